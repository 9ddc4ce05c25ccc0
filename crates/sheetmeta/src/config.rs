//! Resolver configuration.
//!
//! Everything here has a default that reproduces the plain resolution rules,
//! so an empty document (or `ResolverConfig::default()`) is always valid.
//!
//! ```
//! use sheetmeta::{BlankHeaders, DuplicatePositions, ResolverConfig};
//!
//! let config = ResolverConfig::from_yaml(
//!     "locale: es-CL\nduplicate_positions: reject\nheader_style:\n  font_size: 14\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.locale, "es-CL");
//! assert_eq!(config.duplicate_positions, DuplicatePositions::Reject);
//! assert_eq!(config.blank_headers, BlankHeaders::Keep);
//! assert_eq!(config.header_style.font_size, 14);
//! assert_eq!(config.header_style.font_name, "Calibry");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::RowStyle;

/// What to do when two annotated fields declare the same position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePositions {
    /// Keep both entries in member order.
    #[default]
    Keep,
    /// Fail with [`MetadataError::DuplicatePosition`](crate::MetadataError::DuplicatePosition).
    Reject,
}

/// How blank or absent resolved header names appear in header lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankHeaders {
    /// Pass the blank value through; absent headers become `""`.
    #[default]
    Keep,
    /// Use the field name instead.
    FieldName,
}

/// Settings for [`MetadataResolver`](crate::MetadataResolver).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Active locale handed to the resource lookup (`""` is the invariant locale).
    pub locale: String,
    pub duplicate_positions: DuplicatePositions,
    pub blank_headers: BlankHeaders,
    /// Values used for header style properties a type leaves undeclared.
    pub header_style: RowStyle,
}

impl ResolverConfig {
    /// Parses a configuration from YAML. Missing keys take their defaults,
    /// and blank or zero header style properties take the fixed defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: ResolverConfig = serde_yaml::from_str(text)?;
        Ok(ResolverConfig {
            header_style: config.header_style.normalized(),
            ..config
        })
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_duplicate_positions(mut self, policy: DuplicatePositions) -> Self {
        self.duplicate_positions = policy;
        self
    }

    pub fn with_blank_headers(mut self, policy: BlankHeaders) -> Self {
        self.blank_headers = policy;
        self
    }

    pub fn with_header_style(mut self, style: RowStyle) -> Self {
        self.header_style = style.normalized();
        self
    }
}
