//! Localized string lookup used to translate header names.
//!
//! The resolvers never load resource bundles themselves. They call a
//! [`ResourceLookup`] supplied by the host, passing the namespace declared on
//! the field, the header key and the active locale.

use std::collections::HashMap;

/// Resolves a key in a resource namespace for a locale.
///
/// Implemented for closures, so a lookup can be passed inline:
///
/// ```
/// use sheetmeta::ResourceLookup;
///
/// let lookup = |ns: &str, key: &str, _locale: &str| {
///     (ns == "Labels" && key == "name").then(|| "Nombre".to_string())
/// };
/// assert_eq!(lookup.lookup("Labels", "name", "es"), Some("Nombre".to_string()));
/// ```
pub trait ResourceLookup {
    /// Returns the localized string, or `None` when the key is unknown.
    fn lookup(&self, namespace: &str, key: &str, locale: &str) -> Option<String>;
}

impl<F> ResourceLookup for F
where
    F: Fn(&str, &str, &str) -> Option<String>,
{
    fn lookup(&self, namespace: &str, key: &str, locale: &str) -> Option<String> {
        self(namespace, key, locale)
    }
}

/// A lookup that knows no strings; every header falls back to its key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceLookup for NoResources {
    fn lookup(&self, _namespace: &str, _key: &str, _locale: &str) -> Option<String> {
        None
    }
}

/// In-memory string table keyed by namespace, locale and key.
///
/// Lookups walk from the specific locale to its neutral parent and then to
/// the invariant locale (`""`): `es-CL` tries `es-CL`, `es`, then `""`.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    entries: HashMap<(String, String, String), String>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string, replacing any previous value for the same entry.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries
            .insert((namespace.into(), locale.into(), key.into()), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(
        mut self,
        namespace: impl Into<String>,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(namespace, locale, key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceLookup for ResourceTable {
    fn lookup(&self, namespace: &str, key: &str, locale: &str) -> Option<String> {
        locale_fallbacks(locale).find_map(|candidate| {
            self.entries
                .get(&(namespace.to_string(), candidate.to_string(), key.to_string()))
                .cloned()
        })
    }
}

/// Yields `locale`, each parent obtained by dropping the last `-` subtag,
/// and finally the invariant locale `""`.
pub fn locale_fallbacks(locale: &str) -> impl Iterator<Item = &str> {
    let mut next = Some(locale);
    std::iter::from_fn(move || {
        let current = next?;
        next = if current.is_empty() {
            None
        } else {
            Some(current.rfind('-').map_or("", |idx| &current[..idx]))
        };
        Some(current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_chain() {
        let chain: Vec<_> = locale_fallbacks("zh-Hant-TW").collect();
        assert_eq!(chain, vec!["zh-Hant-TW", "zh-Hant", "zh", ""]);

        let chain: Vec<_> = locale_fallbacks("").collect();
        assert_eq!(chain, vec![""]);
    }

    #[test]
    fn table_prefers_specific_locale() {
        let table = ResourceTable::new()
            .with("Labels", "es", "name", "Nombre")
            .with("Labels", "es-CL", "name", "Nombre (CL)")
            .with("Labels", "", "name", "Name");

        assert_eq!(table.lookup("Labels", "name", "es-CL").as_deref(), Some("Nombre (CL)"));
        assert_eq!(table.lookup("Labels", "name", "es-AR").as_deref(), Some("Nombre"));
        assert_eq!(table.lookup("Labels", "name", "fr").as_deref(), Some("Name"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn table_misses() {
        let table = ResourceTable::new().with("Labels", "es", "name", "Nombre");

        assert_eq!(table.lookup("Labels", "age", "es"), None);
        assert_eq!(table.lookup("Other", "name", "es"), None);
        assert_eq!(table.lookup("Labels", "name", "en"), None);
    }

    #[test]
    fn no_resources_never_resolves() {
        assert_eq!(NoResources.lookup("Labels", "name", ""), None);
    }

    #[test]
    fn trait_objects_resolve() {
        let table = ResourceTable::new().with("L", "", "k", "v");
        let lookup: &dyn ResourceLookup = &table;
        assert_eq!(lookup.lookup("L", "k", "de").as_deref(), Some("v"));
    }
}
