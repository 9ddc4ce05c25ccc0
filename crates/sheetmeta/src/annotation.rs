//! Declarative annotations attached to record fields and record types.
//!
//! These are plain values: the `#[derive(SheetRecord)]` macro builds them from
//! `#[exportable]`, `#[importable]`, `#[header_style]` and `#[sheet]`
//! attributes, and hand-written [`SheetRecord`](crate::SheetRecord) impls
//! construct them with the builder methods below.

use serde::{Deserialize, Serialize};

/// The kind of value stored in a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValueType {
    /// Free text.
    String,
    /// Numeric value; the column format decides how it is rendered.
    Number,
    /// Date or date-time value.
    Date,
    /// True/false value.
    Boolean,
    /// No particular type; the exporter writes the value's textual form.
    #[default]
    Any,
}

impl FieldValueType {
    /// Returns the lowercase name of this value type.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldValueType::String => "string",
            FieldValueType::Number => "number",
            FieldValueType::Date => "date",
            FieldValueType::Boolean => "boolean",
            FieldValueType::Any => "any",
        }
    }
}

impl std::fmt::Display for FieldValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-field metadata controlling outbound tabular generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportAnnotation {
    /// Exclude the field from export entirely.
    pub is_ignored: bool,
    /// Column title, or a resource key when `resource_type` is set.
    pub header_name: Option<String>,
    /// Resource namespace used to localize `header_name`.
    pub resource_type: Option<String>,
    /// Explicit column position.
    pub position: u32,
    /// Cell format string handed to the writer (e.g. `"dd/MM/yyyy"`).
    pub format: Option<String>,
    /// Kind of value stored in the column.
    pub value_type: FieldValueType,
}

impl ExportAnnotation {
    /// Creates an export annotation at the given position.
    pub fn at(position: u32) -> Self {
        ExportAnnotation {
            position,
            ..Default::default()
        }
    }

    /// Creates an annotation that removes the field from export.
    pub fn ignored() -> Self {
        ExportAnnotation {
            is_ignored: true,
            ..Default::default()
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header_name = Some(header.into());
        self
    }

    pub fn resource(mut self, namespace: impl Into<String>) -> Self {
        self.resource_type = Some(namespace.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn value_type(mut self, value_type: FieldValueType) -> Self {
        self.value_type = value_type;
        self
    }
}

/// Per-field metadata controlling inbound tabular parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportAnnotation {
    /// Explicit column position.
    pub position: u32,
    /// Value substituted when the cell is empty or cannot be parsed.
    pub default_for_null_or_invalid: String,
}

impl ImportAnnotation {
    /// Creates an import annotation at the given position.
    pub fn at(position: u32) -> Self {
        ImportAnnotation {
            position,
            default_for_null_or_invalid: String::new(),
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_for_null_or_invalid = value.into();
        self
    }
}

/// Type-level header row presentation.
///
/// Blank strings and a zero font size mean "not declared"; the style
/// resolver replaces each of them with its default independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderStyleAnnotation {
    pub font_name: String,
    pub font_color: String,
    pub font_size: i16,
    pub border_color: String,
    pub back_color: String,
}

impl HeaderStyleAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    pub fn font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = color.into();
        self
    }

    pub fn font_size(mut self, size: i16) -> Self {
        self.font_size = size;
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    pub fn back_color(mut self, color: impl Into<String>) -> Self {
        self.back_color = color.into();
        self
    }
}

/// Type-level hints for the importer: which sheet to read and where data starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetAnnotation {
    pub sheet_name: Option<String>,
    /// First row holding data, `-1` when not declared.
    pub first_row_with_data: i32,
}

impl Default for SheetAnnotation {
    fn default() -> Self {
        SheetAnnotation {
            sheet_name: None,
            first_row_with_data: crate::sheet::NO_FIRST_ROW,
        }
    }
}

impl SheetAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    pub fn first_row(mut self, row: i32) -> Self {
        self.first_row_with_data = row;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_defaults_to_any() {
        assert_eq!(FieldValueType::default(), FieldValueType::Any);
        assert_eq!(FieldValueType::Date.to_string(), "date");
    }

    #[test]
    fn export_builder() {
        let ann = ExportAnnotation::at(2)
            .header("Birth date")
            .format("dd/MM/yyyy")
            .value_type(FieldValueType::Date);

        assert!(!ann.is_ignored);
        assert_eq!(ann.position, 2);
        assert_eq!(ann.header_name.as_deref(), Some("Birth date"));
        assert_eq!(ann.resource_type, None);
        assert_eq!(ann.format.as_deref(), Some("dd/MM/yyyy"));
        assert_eq!(ann.value_type, FieldValueType::Date);
    }

    #[test]
    fn sheet_annotation_defaults_to_absent_row() {
        let sheet = SheetAnnotation::new();
        assert_eq!(sheet.sheet_name, None);
        assert_eq!(sheet.first_row_with_data, -1);
    }
}
