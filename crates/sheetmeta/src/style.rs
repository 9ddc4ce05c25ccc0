//! Header row style resolution.
//!
//! A type may declare its header presentation with `#[header_style(...)]`.
//! Each of the five properties is checked on its own: a blank string or a
//! non-positive font size is replaced by the corresponding default while the
//! other declared values are kept.

use serde::{Deserialize, Serialize};

use crate::annotation::HeaderStyleAnnotation;
use crate::descriptor::TypeDescriptor;
use crate::util::is_blank;

pub const DEFAULT_FONT_NAME: &str = "Calibry";
pub const DEFAULT_FONT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_FONT_SIZE: u16 = 11;
pub const DEFAULT_BORDER_COLOR: &str = "#000000";
pub const DEFAULT_BACK_COLOR: &str = "#888888";

/// Resolved header row presentation. Every property is always populated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RowStyle {
    pub font_name: String,
    pub font_color: String,
    pub font_size: u16,
    pub border_color: String,
    pub back_color: String,
}

impl Default for RowStyle {
    fn default() -> Self {
        RowStyle {
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_color: DEFAULT_FONT_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            back_color: DEFAULT_BACK_COLOR.to_string(),
        }
    }
}

impl RowStyle {
    /// Merges a declared style over `defaults`, property by property.
    pub fn from_annotation(annotation: &HeaderStyleAnnotation, defaults: &RowStyle) -> Self {
        RowStyle {
            font_name: or_default(&annotation.font_name, &defaults.font_name),
            font_color: or_default(&annotation.font_color, &defaults.font_color),
            font_size: u16::try_from(annotation.font_size)
                .ok()
                .filter(|size| *size > 0)
                .unwrap_or(defaults.font_size),
            border_color: or_default(&annotation.border_color, &defaults.border_color),
            back_color: or_default(&annotation.back_color, &defaults.back_color),
        }
        .normalized()
    }

    /// Replaces blank properties and a zero font size with the fixed
    /// defaults.
    ///
    /// ```
    /// use sheetmeta::RowStyle;
    ///
    /// let style = RowStyle {
    ///     font_name: String::new(),
    ///     font_size: 0,
    ///     back_color: "#003366".into(),
    ///     ..RowStyle::default()
    /// };
    ///
    /// let style = style.normalized();
    /// assert_eq!(style.font_name, "Calibry");
    /// assert_eq!(style.font_size, 11);
    /// assert_eq!(style.back_color, "#003366");
    /// ```
    pub fn normalized(self) -> Self {
        RowStyle {
            font_name: or_default(&self.font_name, DEFAULT_FONT_NAME),
            font_color: or_default(&self.font_color, DEFAULT_FONT_COLOR),
            font_size: if self.font_size > 0 {
                self.font_size
            } else {
                DEFAULT_FONT_SIZE
            },
            border_color: or_default(&self.border_color, DEFAULT_BORDER_COLOR),
            back_color: or_default(&self.back_color, DEFAULT_BACK_COLOR),
        }
    }
}

fn or_default(declared: &str, default: &str) -> String {
    if is_blank(declared) {
        default.to_string()
    } else {
        declared.to_string()
    }
}

/// Resolves the header style of a type against explicit defaults.
pub fn resolve_header_style(descriptor: &TypeDescriptor, defaults: &RowStyle) -> RowStyle {
    match descriptor.header_style() {
        Some(annotation) => RowStyle::from_annotation(annotation, defaults),
        None => defaults.clone().normalized(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_annotation_gives_fixed_defaults() {
        let style = resolve_header_style(&TypeDescriptor::new("T"), &RowStyle::default());
        assert_eq!(
            style,
            RowStyle {
                font_name: "Calibry".into(),
                font_color: "#FFFFFF".into(),
                font_size: 11,
                border_color: "#000000".into(),
                back_color: "#888888".into(),
            }
        );
    }

    #[test]
    fn defaulting_is_per_property() {
        let descriptor =
            TypeDescriptor::new("T").annotate(HeaderStyleAnnotation::new().font_color("#112233"));
        let style = resolve_header_style(&descriptor, &RowStyle::default());

        assert_eq!(style.font_color, "#112233");
        assert_eq!(style.font_name, DEFAULT_FONT_NAME);
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(style.border_color, DEFAULT_BORDER_COLOR);
        assert_eq!(style.back_color, DEFAULT_BACK_COLOR);
    }

    #[test]
    fn blank_and_non_positive_values_are_replaced() {
        let ann = HeaderStyleAnnotation::new()
            .font_name("  ")
            .font_size(-4)
            .border_color("#123456");
        let style = RowStyle::from_annotation(&ann, &RowStyle::default());

        assert_eq!(style.font_name, DEFAULT_FONT_NAME);
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(style.border_color, "#123456");

        let zero = HeaderStyleAnnotation::new().font_size(0);
        assert_eq!(RowStyle::from_annotation(&zero, &RowStyle::default()).font_size, 11);
    }

    #[test]
    fn fully_declared_style_is_kept() {
        let ann = HeaderStyleAnnotation::new()
            .font_name("Arial")
            .font_color("#000001")
            .font_size(14)
            .border_color("#000002")
            .back_color("#000003");
        let style = RowStyle::from_annotation(&ann, &RowStyle::default());

        assert_eq!(style.font_name, "Arial");
        assert_eq!(style.font_color, "#000001");
        assert_eq!(style.font_size, 14);
        assert_eq!(style.border_color, "#000002");
        assert_eq!(style.back_color, "#000003");
    }

    #[test]
    fn blank_defaults_fall_back_to_fixed_values() {
        let defaults = RowStyle {
            font_name: String::new(),
            font_size: 0,
            border_color: " ".into(),
            ..RowStyle::default()
        };

        assert_eq!(
            resolve_header_style(&TypeDescriptor::new("T"), &defaults),
            RowStyle::default()
        );

        let descriptor =
            TypeDescriptor::new("T").annotate(HeaderStyleAnnotation::new().font_color("#010203"));
        let style = resolve_header_style(&descriptor, &defaults);
        assert_eq!(style.font_name, DEFAULT_FONT_NAME);
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(style.border_color, DEFAULT_BORDER_COLOR);
        assert_eq!(style.font_color, "#010203");
    }

    #[test]
    fn custom_defaults_fill_gaps() {
        let defaults = RowStyle {
            font_name: "Verdana".into(),
            ..RowStyle::default()
        };
        let descriptor =
            TypeDescriptor::new("T").annotate(HeaderStyleAnnotation::new().font_size(9));
        let style = resolve_header_style(&descriptor, &defaults);

        assert_eq!(style.font_name, "Verdana");
        assert_eq!(style.font_size, 9);
    }
}
