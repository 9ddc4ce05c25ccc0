//! Sheetmeta - column metadata resolution for tabular export and import.
//!
//! Sheetmeta works out, for a record type, which fields become spreadsheet
//! columns, in what order, and how the header row looks. It does not write
//! or read files: a sheet writer or reader consumes the resolved model.
//!
//! - Field annotations: `#[exportable]` (position, header, localization
//!   namespace, format, value type, ignore) and `#[importable]` (position,
//!   default for empty or invalid cells)
//! - Type annotations: `#[header_style]` and `#[sheet]`
//! - Deterministic ordering: declared positions are kept, fields without
//!   annotations are appended after the highest declared position
//! - Localized headers through an injected [`ResourceLookup`]
//! - Per-property defaulting of the header style
//!
//! # Quick Start
//!
//! ```rust
//! use sheetmeta::{exportable_metadatas, headers_format, headers_name, NoResources, SheetRecord};
//!
//! #[derive(SheetRecord)]
//! #[header_style(font_color = "#112233")]
//! struct Employee {
//!     #[exportable(position = 1, header = "Full name")]
//!     name: String,
//!
//!     #[exportable(position = 0, header = "Id", value_type = Number)]
//!     id: u32,
//!
//!     #[exportable(ignore)]
//!     password_hash: String,
//!
//!     department: String,
//! }
//!
//! let descriptor = Employee::descriptor();
//!
//! let layout = exportable_metadatas(&descriptor);
//! let positions: Vec<_> = layout.iter().map(|m| (m.field_name.as_str(), m.position)).collect();
//! assert_eq!(positions, vec![("name", 1), ("id", 0), ("department", 2)]);
//!
//! let headers = headers_name(&descriptor, &NoResources, "");
//! assert_eq!(headers, vec!["Full name", "Id", "department"]);
//!
//! let style = headers_format(&descriptor);
//! assert_eq!(style.font_color, "#112233");
//! assert_eq!(style.font_name, "Calibry");
//! ```
//!
//! # Ordering Rules
//!
//! ```text
//! base     = max(declared positions) + 1   (0 when nothing is declared)
//! layout   = annotated fields in member order, with their declared positions
//!          ++ remaining fields in member order, at base, base + 1, ...
//! ```
//!
//! Ignored fields are dropped before `base` is computed and never appear in
//! export layouts or header lists. Duplicate declared positions are kept
//! unless [`DuplicatePositions::Reject`] is configured.

mod allocate;
mod annotation;
mod config;
mod descriptor;
mod error;
mod header;
mod metadata;
mod record;
mod resolver;
mod resources;
mod scanner;
mod sheet;
mod style;
mod util;

// Re-export public API
pub use allocate::{export_layout, header_sequence, import_layout, validate_positions};
pub use annotation::{
    ExportAnnotation, FieldValueType, HeaderStyleAnnotation, ImportAnnotation, SheetAnnotation,
};
pub use config::{BlankHeaders, DuplicatePositions, ResolverConfig};
pub use descriptor::{FieldAnnotation, FieldDescriptor, TypeAnnotation, TypeDescriptor};
pub use error::{MetadataError, Result};
pub use header::resolve_header_name;
pub use metadata::Metadata;
pub use record::SheetRecord;
pub use resolver::{
    exportable_metadatas, first_row_with_data, headers_format, headers_name,
    importable_metadatas, sheet_name, MetadataResolver,
};
pub use resources::{locale_fallbacks, NoResources, ResourceLookup, ResourceTable};
pub use scanner::{scan_exportable, scan_importable, Scan, ScannedField};
pub use sheet::NO_FIRST_ROW;
pub use style::{
    resolve_header_style, RowStyle, DEFAULT_BACK_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_FONT_COLOR,
    DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE,
};

pub use sheetmeta_macros::SheetRecord;
