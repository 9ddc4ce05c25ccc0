//! Member scanning: pairs each exposed field with its annotations of one kind.
//!
//! Scanning is the only place that walks a [`TypeDescriptor`]'s fields. The
//! allocators consume the resulting [`Scan`], which keeps fields without a
//! matching annotation in a separate list so they can still be placed after
//! the annotated ones.

use crate::annotation::{ExportAnnotation, ImportAnnotation};
use crate::descriptor::{FieldDescriptor, TypeDescriptor};

/// A field together with the annotations of the scanned kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedField<'a, A> {
    pub name: &'a str,
    /// Never empty; fields without annotations land in [`Scan::bare`].
    pub annotations: Vec<&'a A>,
}

/// Result of scanning a type for one kind of field annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'a, A> {
    /// Fields carrying at least one matching annotation, in member order.
    pub annotated: Vec<ScannedField<'a, A>>,
    /// Names of fields carrying no matching annotation, in member order.
    pub bare: Vec<&'a str>,
}

impl<'a, A> Scan<'a, A> {
    /// Scans `descriptor`, selecting annotations with `select`.
    pub fn new<I>(descriptor: &'a TypeDescriptor, select: impl Fn(&'a FieldDescriptor) -> I) -> Self
    where
        I: Iterator<Item = &'a A>,
    {
        let mut annotated = Vec::new();
        let mut bare = Vec::new();

        for field in &descriptor.fields {
            let annotations: Vec<&A> = select(field).collect();
            if annotations.is_empty() {
                bare.push(field.name.as_str());
            } else {
                annotated.push(ScannedField {
                    name: field.name.as_str(),
                    annotations,
                });
            }
        }

        Scan { annotated, bare }
    }
}

/// Scans a type for `#[exportable]` annotations.
pub fn scan_exportable(descriptor: &TypeDescriptor) -> Scan<'_, ExportAnnotation> {
    Scan::new(descriptor, FieldDescriptor::export_annotations)
}

/// Scans a type for `#[importable]` annotations.
pub fn scan_importable(descriptor: &TypeDescriptor) -> Scan<'_, ImportAnnotation> {
    Scan::new(descriptor, FieldDescriptor::import_annotations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> TypeDescriptor {
        TypeDescriptor::new("Mixed")
            .field(FieldDescriptor::new("plain"))
            .field(FieldDescriptor::new("exported").annotate(ExportAnnotation::at(0)))
            .field(FieldDescriptor::new("imported").annotate(ImportAnnotation::at(0)))
            .field(FieldDescriptor::new("hidden").annotate(ExportAnnotation::ignored()))
    }

    #[test]
    fn export_scan_partitions_fields() {
        let descriptor = mixed();
        let scan = scan_exportable(&descriptor);

        let annotated: Vec<_> = scan.annotated.iter().map(|f| f.name).collect();
        assert_eq!(annotated, vec!["exported", "hidden"]);
        assert_eq!(scan.bare, vec!["plain", "imported"]);
    }

    #[test]
    fn import_scan_partitions_fields() {
        let descriptor = mixed();
        let scan = scan_importable(&descriptor);

        assert_eq!(scan.annotated.len(), 1);
        assert_eq!(scan.annotated[0].name, "imported");
        assert_eq!(scan.bare, vec!["plain", "exported", "hidden"]);
    }

    #[test]
    fn every_annotation_instance_is_reported() {
        let descriptor = TypeDescriptor::new("T").field(
            FieldDescriptor::new("twice")
                .annotate(ExportAnnotation::at(0))
                .annotate(ExportAnnotation::at(5)),
        );
        let scan = scan_exportable(&descriptor);

        assert_eq!(scan.annotated[0].annotations.len(), 2);
        assert!(scan.bare.is_empty());
    }

    #[test]
    fn empty_type() {
        let descriptor = TypeDescriptor::new("Empty");
        let scan = scan_exportable(&descriptor);
        assert!(scan.annotated.is_empty());
        assert!(scan.bare.is_empty());
    }
}
