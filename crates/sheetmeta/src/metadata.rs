//! Resolved column metadata consumed by sheet writers and readers.

use serde::{Deserialize, Serialize};

use crate::annotation::FieldValueType;

/// One column of a resolved export or import layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Name of the record field backing this column.
    pub field_name: String,
    /// Zero-based column position.
    pub position: u32,
    /// Cell format handed to the writer.
    pub format: Option<String>,
    pub value_type: FieldValueType,
    /// Value the reader substitutes for empty or unparsable cells.
    pub default_on_invalid: String,
}

impl Metadata {
    pub fn new(
        field_name: impl Into<String>,
        position: u32,
        format: Option<String>,
        value_type: FieldValueType,
        default_on_invalid: impl Into<String>,
    ) -> Self {
        Metadata {
            field_name: field_name.into(),
            position,
            format,
            value_type,
            default_on_invalid: default_on_invalid.into(),
        }
    }

    /// Metadata for a field that carries no relevant annotation.
    ///
    /// The position is assigned later by the allocator.
    pub(crate) fn bare(field_name: &str) -> Self {
        Metadata::new(field_name, 0, None, FieldValueType::Any, String::new())
    }
}
