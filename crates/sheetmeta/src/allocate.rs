//! Column position allocation.
//!
//! Annotated fields keep the position they declare. Fields without a
//! matching annotation are appended after them, numbered from one past the
//! highest declared position, in declaration order:
//!
//! ```text
//! name    #[exportable(position = 2)]   -> 2
//! email   (none)                        -> 3
//! age     #[exportable(position = 0)]   -> 0
//! notes   (none)                        -> 4
//! ```
//!
//! Two annotated fields declaring the same position are both kept; use
//! [`validate_positions`] (or [`DuplicatePositions::Reject`]) to refuse such
//! layouts.
//!
//! [`DuplicatePositions::Reject`]: crate::DuplicatePositions::Reject

use std::collections::BTreeMap;
use std::iter;

use tracing::{debug, warn};

use crate::annotation::FieldValueType;
use crate::config::BlankHeaders;
use crate::descriptor::TypeDescriptor;
use crate::error::{MetadataError, Result};
use crate::header::resolve_header_name;
use crate::metadata::Metadata;
use crate::resources::ResourceLookup;
use crate::scanner::{scan_exportable, scan_importable};
use crate::util::is_blank;

/// Export layout of a type. Ignored fields are left out.
pub fn export_layout(descriptor: &TypeDescriptor) -> Vec<Metadata> {
    let scan = scan_exportable(descriptor);

    let annotated = scan
        .annotated
        .iter()
        .flat_map(|field| {
            field
                .annotations
                .iter()
                .filter(|ann| !ann.is_ignored)
                .map(move |ann| {
                    Metadata::new(
                        field.name,
                        ann.position,
                        ann.format.clone(),
                        ann.value_type,
                        String::new(),
                    )
                })
        })
        .collect();

    append_bare(&descriptor.name, annotated, &scan.bare)
}

/// Import layout of a type. Every entry has value type `Any`.
pub fn import_layout(descriptor: &TypeDescriptor) -> Vec<Metadata> {
    let scan = scan_importable(descriptor);

    let annotated = scan
        .annotated
        .iter()
        .flat_map(|field| {
            field.annotations.iter().map(move |ann| {
                Metadata::new(
                    field.name,
                    ann.position,
                    None,
                    FieldValueType::Any,
                    ann.default_for_null_or_invalid.clone(),
                )
            })
        })
        .collect();

    append_bare(&descriptor.name, annotated, &scan.bare)
}

/// Appends the bare fields after the highest declared position.
///
/// Tail positions saturate at `u32::MAX`: once the position space runs out,
/// the remaining fields share the last position.
fn append_bare(type_name: &str, mut layout: Vec<Metadata>, bare: &[&str]) -> Vec<Metadata> {
    if bare.is_empty() {
        return layout;
    }

    // `None` when a declared position is already `u32::MAX`.
    let next_free = match layout.iter().map(|meta| meta.position).max() {
        Some(max) => max.checked_add(1),
        None => Some(0),
    };
    let free = next_free.map_or(0, |next| u64::from(u32::MAX - next) + 1);
    let base = next_free.unwrap_or(u32::MAX);

    debug!(
        type_name,
        count = bare.len(),
        base,
        "appending fields without annotations"
    );

    if bare.len() as u64 > free {
        warn!(
            type_name,
            count = bare.len(),
            free,
            "position space exhausted, trailing fields share position {}",
            u32::MAX
        );
    }

    let positions = (base..=u32::MAX).chain(iter::repeat(u32::MAX));
    layout.extend(bare.iter().zip(positions).map(|(name, position)| Metadata {
        position,
        ..Metadata::bare(name)
    }));
    layout
}

/// Display names of a type's exported columns.
///
/// Annotated fields come first, in member order, named by
/// [`resolve_header_name`]. Fields without an export annotation follow under
/// their bare field name. Ignored fields are left out.
pub fn header_sequence<L>(
    descriptor: &TypeDescriptor,
    lookup: &L,
    locale: &str,
    blank: BlankHeaders,
) -> Vec<String>
where
    L: ResourceLookup + ?Sized,
{
    let scan = scan_exportable(descriptor);

    let mut headers: Vec<String> = scan
        .annotated
        .iter()
        .flat_map(|field| {
            field
                .annotations
                .iter()
                .filter(|ann| !ann.is_ignored)
                .map(move |ann| {
                    let resolved = resolve_header_name(ann, lookup, locale);
                    match (resolved, blank) {
                        (Some(header), BlankHeaders::FieldName) if is_blank(&header) => {
                            field.name.to_string()
                        }
                        (None, BlankHeaders::FieldName) => field.name.to_string(),
                        (resolved, _) => resolved.unwrap_or_default(),
                    }
                })
        })
        .collect();

    headers.extend(scan.bare.iter().map(|name| name.to_string()));
    headers
}

/// Fails if two entries share a position.
pub fn validate_positions(layout: &[Metadata]) -> Result<()> {
    let mut seen: BTreeMap<u32, &str> = BTreeMap::new();
    for meta in layout {
        if let Some(first) = seen.insert(meta.position, &meta.field_name) {
            return Err(MetadataError::DuplicatePosition {
                position: meta.position,
                first: first.to_string(),
                second: meta.field_name.clone(),
            });
        }
    }
    Ok(())
}

/// Positions shared by several entries, with the sharing fields in member
/// order. Sorted by position.
pub(crate) fn duplicate_positions(layout: &[Metadata]) -> Vec<(u32, Vec<&str>)> {
    let mut by_position: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    for meta in layout {
        by_position
            .entry(meta.position)
            .or_default()
            .push(&meta.field_name);
    }
    by_position
        .into_iter()
        .filter(|(_, fields)| fields.len() > 1)
        .collect()
}

/// Logs one warning per position shared by several entries.
pub(crate) fn warn_duplicate_positions(type_name: &str, layout: &[Metadata]) {
    for (position, fields) in duplicate_positions(layout) {
        warn!(
            type_name,
            position,
            fields = %fields.join(", "),
            "position declared by more than one field"
        );
    }
}
