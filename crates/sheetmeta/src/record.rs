//! Trait for derive macro integration.
//!
//! This module provides the [`SheetRecord`] trait which is implemented by
//! the `#[derive(SheetRecord)]` macro to register a type's fields and
//! annotations.

use crate::descriptor::TypeDescriptor;

/// Trait for record types that can be exported to or imported from a sheet.
///
/// This trait is typically derived using `#[derive(SheetRecord)]`, but can
/// also be implemented manually.
///
/// # Derive Usage
///
/// ```
/// use sheetmeta::SheetRecord;
///
/// #[derive(SheetRecord)]
/// #[sheet(name = "People", first_row = 2)]
/// #[header_style(font_color = "#112233")]
/// struct Person {
///     #[exportable(position = 0, header = "Name")]
///     name: String,
///
///     #[exportable(position = 1, format = "dd/MM/yyyy", value_type = Date)]
///     born: String,
///
///     #[exportable(ignore)]
///     internal_id: u64,
///
///     notes: String,
/// }
///
/// let descriptor = Person::descriptor();
/// assert_eq!(descriptor.name, "Person");
/// assert_eq!(descriptor.fields.len(), 4);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use sheetmeta::{ExportAnnotation, FieldDescriptor, SheetRecord, TypeDescriptor};
///
/// struct Task {
///     title: String,
///     done: bool,
/// }
///
/// impl SheetRecord for Task {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::new("Task")
///             .field(FieldDescriptor::new("title").annotate(ExportAnnotation::at(0).header("Title")))
///             .field(FieldDescriptor::new("done"))
///     }
/// }
/// ```
pub trait SheetRecord {
    /// Returns the fields and annotations registered for this type.
    fn descriptor() -> TypeDescriptor;
}
