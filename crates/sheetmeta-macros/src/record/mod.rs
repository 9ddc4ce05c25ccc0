//! Implementation of the `#[derive(SheetRecord)]` macro.
//!
//! This module provides derive macro support for sheetmeta, generating a
//! type descriptor from struct and field annotations.

mod attrs;
mod derive;

pub use derive::sheet_record_derive_impl;
