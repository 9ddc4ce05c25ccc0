//! Proc macros for Sheetmeta.
//!
//! This crate provides the [`SheetRecord`] derive, which registers a record
//! type's fields and their spreadsheet annotations at compile time. The
//! resolution engine in `sheetmeta` reads the generated descriptor instead
//! of inspecting types at runtime.
//!
//! Use it through the `sheetmeta` re-export:
//!
//! ```ignore
//! use sheetmeta::SheetRecord;
//!
//! #[derive(SheetRecord)]
//! struct Invoice {
//!     #[exportable(position = 0, header = "Number")]
//!     number: u32,
//! }
//! ```

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `SheetRecord` trait from struct and field annotations.
///
/// The generated `descriptor()` lists every named field in declaration
/// order. Fields without annotations are still registered, so the resolver
/// can place them after the annotated columns.
///
/// # Field Attributes
///
/// `#[exportable(...)]`:
///
/// | Attribute | Type | Description |
/// |-----------|------|-------------|
/// | `ignore` | flag | Leave the field out of exports |
/// | `header` | string | Column title, or resource key when `resource` is set |
/// | `resource` | string | Resource namespace used to localize `header` |
/// | `position` | integer | Column position (default: 0) |
/// | `format` | string | Cell format handed to the writer |
/// | `value_type` | ident or string | `String`, `Number`, `Date`, `Boolean`, `Any` (default) |
///
/// `#[importable(...)]`:
///
/// | Attribute | Type | Description |
/// |-----------|------|-------------|
/// | `position` | integer | Column position (default: 0) |
/// | `default` | string | Value used for empty or invalid cells |
///
/// # Container Attributes
///
/// `#[header_style(font_name = "..", font_color = "..", font_size = N,
/// border_color = "..", back_color = "..")]` declares the header row style;
/// omitted properties take the resolver's defaults.
///
/// `#[sheet(name = "..", first_row = N)]` names the sheet to read and the
/// first row holding data.
///
/// # Example
///
/// ```ignore
/// use sheetmeta::SheetRecord;
///
/// #[derive(SheetRecord)]
/// #[sheet(name = "Clients", first_row = 1)]
/// #[header_style(back_color = "#003366", font_size = 12)]
/// struct Client {
///     #[exportable(position = 0, header = "client_name", resource = "Labels")]
///     #[importable(position = 0)]
///     name: String,
///
///     #[exportable(position = 1, format = "#,##0.00", value_type = Number)]
///     #[importable(position = 1, default = "0")]
///     balance: f64,
///
///     #[exportable(ignore)]
///     internal_ref: String,
/// }
///
/// let descriptor = Client::descriptor();
/// ```
///
/// # Compile-Time Errors
///
/// The macro will fail to compile if:
/// - It is applied to an enum, union, or tuple struct
/// - An attribute key is unknown
/// - A value has the wrong literal type (e.g. `position = "2"`)
#[proc_macro_derive(SheetRecord, attributes(exportable, importable, header_style, sheet))]
pub fn sheet_record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::sheet_record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
