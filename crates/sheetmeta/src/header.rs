//! Header name resolution with optional localization.

use tracing::debug;

use crate::annotation::ExportAnnotation;
use crate::resources::ResourceLookup;
use crate::util::is_blank;

/// Computes the display name declared by one export annotation.
///
/// When both a resource namespace and a non-blank header are declared, the
/// header is a key into that namespace and is replaced by the string the
/// lookup returns for `locale`. A key the lookup does not know is returned
/// as-is. Without a namespace the header is returned verbatim, and a blank
/// or absent header is passed through unchanged.
///
/// ```
/// use sheetmeta::{resolve_header_name, ExportAnnotation, NoResources, ResourceTable};
///
/// let table = ResourceTable::new().with("Labels", "es", "first_name", "Nombre");
/// let ann = ExportAnnotation::at(0).header("first_name").resource("Labels");
///
/// assert_eq!(resolve_header_name(&ann, &table, "es").as_deref(), Some("Nombre"));
/// assert_eq!(resolve_header_name(&ann, &NoResources, "es").as_deref(), Some("first_name"));
/// ```
pub fn resolve_header_name<L>(
    annotation: &ExportAnnotation,
    lookup: &L,
    locale: &str,
) -> Option<String>
where
    L: ResourceLookup + ?Sized,
{
    let header = annotation.header_name.as_deref()?;

    let namespace = match annotation.resource_type.as_deref() {
        Some(namespace) if !is_blank(header) => namespace,
        _ => return Some(header.to_string()),
    };

    match lookup.lookup(namespace, header, locale) {
        Some(localized) => Some(localized),
        None => {
            debug!(namespace, key = header, locale, "no localized header, using key");
            Some(header.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{NoResources, ResourceTable};

    fn labels() -> ResourceTable {
        ResourceTable::new()
            .with("Labels", "", "name", "Name")
            .with("Labels", "es", "name", "Nombre")
    }

    #[test]
    fn verbatim_without_namespace() {
        let ann = ExportAnnotation::at(0).header("name");
        assert_eq!(resolve_header_name(&ann, &labels(), "es").as_deref(), Some("name"));
    }

    #[test]
    fn localized_with_namespace() {
        let ann = ExportAnnotation::at(0).header("name").resource("Labels");
        assert_eq!(resolve_header_name(&ann, &labels(), "es").as_deref(), Some("Nombre"));
        assert_eq!(resolve_header_name(&ann, &labels(), "en").as_deref(), Some("Name"));
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let ann = ExportAnnotation::at(0).header("missing").resource("Labels");
        assert_eq!(resolve_header_name(&ann, &labels(), "es").as_deref(), Some("missing"));
    }

    #[test]
    fn blank_header_passes_through() {
        let ann = ExportAnnotation::at(0).header("   ").resource("Labels");
        let lookup = |_: &str, _: &str, _: &str| -> Option<String> {
            panic!("blank keys are never looked up")
        };
        assert_eq!(resolve_header_name(&ann, &lookup, "es").as_deref(), Some("   "));
    }

    #[test]
    fn absent_header_passes_through() {
        let ann = ExportAnnotation::at(0).resource("Labels");
        assert_eq!(resolve_header_name(&ann, &NoResources, ""), None);
    }

    #[test]
    fn lookup_receives_namespace_key_and_locale() {
        let ann = ExportAnnotation::at(0).header("k").resource("Ns");
        let lookup = |ns: &str, key: &str, locale: &str| Some(format!("{ns}/{key}/{locale}"));
        assert_eq!(resolve_header_name(&ann, &lookup, "pt-BR").as_deref(), Some("Ns/k/pt-BR"));
    }

    #[test]
    fn repeated_resolution_is_stable() {
        let ann = ExportAnnotation::at(0).header("name").resource("Labels");
        let table = labels();
        let first = resolve_header_name(&ann, &table, "es");
        let second = resolve_header_name(&ann, &table, "es");
        assert_eq!(first, second);
        assert_eq!(ann.header_name.as_deref(), Some("name"));
    }
}
