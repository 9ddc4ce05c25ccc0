//! Entry points: free functions for the default rules and a configurable
//! [`MetadataResolver`].

use tracing::trace;

use crate::allocate::{
    export_layout, header_sequence, import_layout, validate_positions, warn_duplicate_positions,
};
use crate::config::{BlankHeaders, DuplicatePositions, ResolverConfig};
use crate::descriptor::TypeDescriptor;
use crate::error::Result;
use crate::metadata::Metadata;
use crate::record::SheetRecord;
use crate::resources::{NoResources, ResourceLookup};
use crate::sheet;
use crate::style::{resolve_header_style, RowStyle};

/// Ordered display names of the exported columns of `descriptor`.
pub fn headers_name<L>(descriptor: &TypeDescriptor, lookup: &L, locale: &str) -> Vec<String>
where
    L: ResourceLookup + ?Sized,
{
    header_sequence(descriptor, lookup, locale, BlankHeaders::Keep)
}

/// Export column layout; duplicate declared positions are kept.
pub fn exportable_metadatas(descriptor: &TypeDescriptor) -> Vec<Metadata> {
    export_layout(descriptor)
}

/// Import column layout; duplicate declared positions are kept.
pub fn importable_metadatas(descriptor: &TypeDescriptor) -> Vec<Metadata> {
    import_layout(descriptor)
}

/// Header row style, with the fixed defaults filling undeclared properties.
pub fn headers_format(descriptor: &TypeDescriptor) -> RowStyle {
    resolve_header_style(descriptor, &RowStyle::default())
}

/// Declared sheet name, if any.
pub fn sheet_name(descriptor: &TypeDescriptor) -> Option<String> {
    sheet::sheet_name(descriptor)
}

/// Declared first data row, or [`NO_FIRST_ROW`](crate::NO_FIRST_ROW).
pub fn first_row_with_data(descriptor: &TypeDescriptor) -> i32 {
    sheet::first_row_with_data(descriptor)
}

/// Resolves metadata with an injected resource lookup and a configuration.
///
/// The resolver holds no per-type state, so one instance can serve any
/// number of types and threads.
///
/// ```
/// use sheetmeta::{MetadataResolver, ResolverConfig, ResourceTable, SheetRecord};
///
/// #[derive(SheetRecord)]
/// struct Client {
///     #[exportable(position = 0, header = "client_name", resource = "Labels")]
///     name: String,
///     balance: f64,
/// }
///
/// let table = ResourceTable::new().with("Labels", "es", "client_name", "Cliente");
/// let resolver = MetadataResolver::new(table, ResolverConfig::default().with_locale("es-CL"));
///
/// assert_eq!(resolver.headers_name_of::<Client>(), vec!["Cliente", "balance"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataResolver<L = NoResources> {
    lookup: L,
    config: ResolverConfig,
}

impl MetadataResolver<NoResources> {
    /// A resolver without localization and with default configuration.
    pub fn plain() -> Self {
        MetadataResolver::default()
    }
}

impl<L: ResourceLookup> MetadataResolver<L> {
    pub fn new(lookup: L, config: ResolverConfig) -> Self {
        MetadataResolver { lookup, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Display names of the exported columns.
    pub fn headers_name(&self, descriptor: &TypeDescriptor) -> Vec<String> {
        trace!(type_name = %descriptor.name, "resolving header names");
        header_sequence(
            descriptor,
            &self.lookup,
            &self.config.locale,
            self.config.blank_headers,
        )
    }

    /// Export column layout, checked against the duplicate-position policy.
    pub fn exportable_metadatas(&self, descriptor: &TypeDescriptor) -> Result<Vec<Metadata>> {
        trace!(type_name = %descriptor.name, "resolving export layout");
        self.enforce(descriptor, export_layout(descriptor))
    }

    /// Import column layout, checked against the duplicate-position policy.
    pub fn importable_metadatas(&self, descriptor: &TypeDescriptor) -> Result<Vec<Metadata>> {
        trace!(type_name = %descriptor.name, "resolving import layout");
        self.enforce(descriptor, import_layout(descriptor))
    }

    /// Header style, with the configured defaults filling gaps.
    pub fn headers_format(&self, descriptor: &TypeDescriptor) -> RowStyle {
        resolve_header_style(descriptor, &self.config.header_style)
    }

    pub fn sheet_name(&self, descriptor: &TypeDescriptor) -> Option<String> {
        sheet::sheet_name(descriptor)
    }

    pub fn first_row_with_data(&self, descriptor: &TypeDescriptor) -> i32 {
        sheet::first_row_with_data(descriptor)
    }

    pub fn headers_name_of<T: SheetRecord>(&self) -> Vec<String> {
        self.headers_name(&T::descriptor())
    }

    pub fn exportable_metadatas_of<T: SheetRecord>(&self) -> Result<Vec<Metadata>> {
        self.exportable_metadatas(&T::descriptor())
    }

    pub fn importable_metadatas_of<T: SheetRecord>(&self) -> Result<Vec<Metadata>> {
        self.importable_metadatas(&T::descriptor())
    }

    pub fn headers_format_of<T: SheetRecord>(&self) -> RowStyle {
        self.headers_format(&T::descriptor())
    }

    pub fn sheet_name_of<T: SheetRecord>(&self) -> Option<String> {
        self.sheet_name(&T::descriptor())
    }

    pub fn first_row_with_data_of<T: SheetRecord>(&self) -> i32 {
        self.first_row_with_data(&T::descriptor())
    }

    fn enforce(&self, descriptor: &TypeDescriptor, layout: Vec<Metadata>) -> Result<Vec<Metadata>> {
        match self.config.duplicate_positions {
            DuplicatePositions::Keep => {
                warn_duplicate_positions(&descriptor.name, &layout);
                Ok(layout)
            }
            DuplicatePositions::Reject => {
                validate_positions(&layout)?;
                Ok(layout)
            }
        }
    }
}
