//! Type descriptors: the registry of fields and annotations for a record type.
//!
//! A [`TypeDescriptor`] is what the resolvers read instead of runtime
//! reflection. It lists the record's exposed fields in declaration order,
//! each with the annotation instances attached to it, plus the annotations
//! attached to the type itself.

use crate::annotation::{
    ExportAnnotation, HeaderStyleAnnotation, ImportAnnotation, SheetAnnotation,
};

/// An annotation attached to a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldAnnotation {
    Export(ExportAnnotation),
    Import(ImportAnnotation),
}

impl From<ExportAnnotation> for FieldAnnotation {
    fn from(ann: ExportAnnotation) -> Self {
        FieldAnnotation::Export(ann)
    }
}

impl From<ImportAnnotation> for FieldAnnotation {
    fn from(ann: ImportAnnotation) -> Self {
        FieldAnnotation::Import(ann)
    }
}

/// An annotation attached to the record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeAnnotation {
    HeaderStyle(HeaderStyleAnnotation),
    Sheet(SheetAnnotation),
}

impl From<HeaderStyleAnnotation> for TypeAnnotation {
    fn from(ann: HeaderStyleAnnotation) -> Self {
        TypeAnnotation::HeaderStyle(ann)
    }
}

impl From<SheetAnnotation> for TypeAnnotation {
    fn from(ann: SheetAnnotation) -> Self {
        TypeAnnotation::Sheet(ann)
    }
}

/// One exposed field of a record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Annotations in the order they were declared.
    pub annotations: Vec<FieldAnnotation>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    /// Attaches an annotation to this field.
    pub fn annotate(mut self, annotation: impl Into<FieldAnnotation>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Iterates over the export annotations attached to this field.
    pub fn export_annotations(&self) -> impl Iterator<Item = &ExportAnnotation> {
        self.annotations.iter().filter_map(|ann| match ann {
            FieldAnnotation::Export(export) => Some(export),
            _ => None,
        })
    }

    /// Iterates over the import annotations attached to this field.
    pub fn import_annotations(&self) -> impl Iterator<Item = &ImportAnnotation> {
        self.annotations.iter().filter_map(|ann| match ann {
            FieldAnnotation::Import(import) => Some(import),
            _ => None,
        })
    }
}

/// Fields and annotations of a record type.
///
/// # Example
///
/// ```
/// use sheetmeta::{ExportAnnotation, FieldDescriptor, SheetAnnotation, TypeDescriptor};
///
/// let descriptor = TypeDescriptor::new("Person")
///     .annotate(SheetAnnotation::new().named("People"))
///     .field(FieldDescriptor::new("name").annotate(ExportAnnotation::at(0).header("Name")))
///     .field(FieldDescriptor::new("notes"));
///
/// assert_eq!(descriptor.fields.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    pub annotations: Vec<TypeAnnotation>,
    /// Exposed fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        TypeDescriptor {
            name: name.into(),
            annotations: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Attaches a type-level annotation.
    pub fn annotate(mut self, annotation: impl Into<TypeAnnotation>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Appends a field after the ones already registered.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// The first header-style annotation on the type, if any.
    pub fn header_style(&self) -> Option<&HeaderStyleAnnotation> {
        self.annotations.iter().find_map(|ann| match ann {
            TypeAnnotation::HeaderStyle(style) => Some(style),
            _ => None,
        })
    }

    /// The first sheet annotation on the type, if any.
    pub fn sheet(&self) -> Option<&SheetAnnotation> {
        self.annotations.iter().find_map(|ann| match ann {
            TypeAnnotation::Sheet(sheet) => Some(sheet),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_annotations_are_filtered_by_kind() {
        let field = FieldDescriptor::new("age")
            .annotate(ExportAnnotation::at(1))
            .annotate(ImportAnnotation::at(4));

        assert_eq!(field.export_annotations().count(), 1);
        assert_eq!(field.import_annotations().next().map(|a| a.position), Some(4));
    }

    #[test]
    fn first_type_annotation_wins() {
        let descriptor = TypeDescriptor::new("T")
            .annotate(SheetAnnotation::new().named("First"))
            .annotate(SheetAnnotation::new().named("Second"));

        assert_eq!(
            descriptor.sheet().and_then(|s| s.sheet_name.as_deref()),
            Some("First")
        );
        assert!(descriptor.header_style().is_none());
    }

    #[test]
    fn fields_keep_registration_order() {
        let descriptor = TypeDescriptor::new("T")
            .field(FieldDescriptor::new("b"))
            .field(FieldDescriptor::new("a"));

        let names: Vec<_> = descriptor.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
