//! Attribute parsing for the SheetRecord derive macro.
//!
//! This module provides parsers for the `#[exportable(...)]` and
//! `#[importable(...)]` field attributes and the `#[header_style(...)]` and
//! `#[sheet(...)]` container attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, ExprUnary, Ident, Lit, Meta, Result, Token, UnOp,
};

/// The value type declared for an exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    String,
    Number,
    Date,
    Boolean,
    #[default]
    Any,
}

impl ValueType {
    /// Parse a value type from an identifier: `value_type = Date`.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::from_str(&ident.to_string(), ident.span())
    }

    /// Parse a value type from a string literal: `value_type = "date"`.
    pub fn from_str(s: &str, span: Span) -> Result<Self> {
        match s {
            "String" | "string" | "text" => Ok(ValueType::String),
            "Number" | "number" => Ok(ValueType::Number),
            "Date" | "date" => Ok(ValueType::Date),
            "Boolean" | "boolean" | "Bool" | "bool" => Ok(ValueType::Boolean),
            "Any" | "any" => Ok(ValueType::Any),
            other => Err(Error::new(
                span,
                format!(
                    "unknown value type: '{}'. Expected one of: String, Number, Date, Boolean, Any",
                    other
                ),
            )),
        }
    }

    /// Name of the matching `sheetmeta::FieldValueType` variant.
    pub fn variant_name(self) -> &'static str {
        match self {
            ValueType::String => "String",
            ValueType::Number => "Number",
            ValueType::Date => "Date",
            ValueType::Boolean => "Boolean",
            ValueType::Any => "Any",
        }
    }
}

/// Field-level attributes from `#[exportable(...)]`.
#[derive(Debug, Default, Clone)]
pub struct ExportableAttr {
    /// Exclude the field from export: `ignore`
    pub ignore: bool,
    /// Column title or resource key: `header = "Name"`
    pub header: Option<String>,
    /// Resource namespace: `resource = "Labels"`
    pub resource: Option<String>,
    /// Column position: `position = 2`
    pub position: u32,
    /// Cell format: `format = "dd/MM/yyyy"`
    pub format: Option<String>,
    /// Value type: `value_type = Date`
    pub value_type: ValueType,
}

/// Field-level attributes from `#[importable(...)]`.
#[derive(Debug, Default, Clone)]
pub struct ImportableAttr {
    /// Column position: `position = 0`
    pub position: u32,
    /// Replacement for empty or invalid cells: `default = "0"`
    pub default: Option<String>,
}

/// Container-level attributes from `#[header_style(...)]`.
#[derive(Debug, Default, Clone)]
pub struct HeaderStyleAttr {
    pub font_name: Option<String>,
    pub font_color: Option<String>,
    pub font_size: Option<i16>,
    pub border_color: Option<String>,
    pub back_color: Option<String>,
}

/// Container-level attributes from `#[sheet(...)]`.
#[derive(Debug, Default, Clone)]
pub struct SheetAttr {
    /// Sheet name: `name = "Clients"`
    pub name: Option<String>,
    /// First row with data: `first_row = 2`
    pub first_row: Option<i32>,
}

impl Parse for ExportableAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ExportableAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // ignore (flag)
                Meta::Path(p) if p.is_ident("ignore") => {
                    attr.ignore = true;
                }

                // header = "Name"
                Meta::NameValue(nv) if nv.path.is_ident("header") => {
                    attr.header = Some(parse_string_expr(&nv.value)?);
                }

                // resource = "Labels"
                Meta::NameValue(nv) if nv.path.is_ident("resource") => {
                    attr.resource = Some(parse_string_expr(&nv.value)?);
                }

                // position = 2
                Meta::NameValue(nv) if nv.path.is_ident("position") => {
                    attr.position = parse_int_expr(&nv.value)?;
                }

                // format = "dd/MM/yyyy"
                Meta::NameValue(nv) if nv.path.is_ident("format") => {
                    attr.format = Some(parse_string_expr(&nv.value)?);
                }

                // value_type = Date or value_type = "date"
                Meta::NameValue(nv) if nv.path.is_ident("value_type") => {
                    attr.value_type = parse_value_type(&nv.value)?;
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown exportable attribute: expected one of: ignore, header, \
                         resource, position, format, value_type",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

impl Parse for ImportableAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ImportableAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("position") => {
                    attr.position = parse_int_expr(&nv.value)?;
                }

                Meta::NameValue(nv) if nv.path.is_ident("default") => {
                    attr.default = Some(parse_string_expr(&nv.value)?);
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown importable attribute: expected one of: position, default",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

impl Parse for HeaderStyleAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = HeaderStyleAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("font_name") => {
                    attr.font_name = Some(parse_string_expr(&nv.value)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("font_color") => {
                    attr.font_color = Some(parse_string_expr(&nv.value)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("font_size") => {
                    attr.font_size = Some(parse_int_expr(&nv.value)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("border_color") => {
                    attr.border_color = Some(parse_string_expr(&nv.value)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("back_color") => {
                    attr.back_color = Some(parse_string_expr(&nv.value)?);
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown header_style attribute: expected one of: font_name, \
                         font_color, font_size, border_color, back_color",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

impl Parse for SheetAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SheetAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    attr.name = Some(parse_string_expr(&nv.value)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("first_row") => {
                    attr.first_row = Some(parse_int_expr(&nv.value)?);
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown sheet attribute: expected one of: name, first_row",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

fn parse_string_expr(expr: &Expr) -> Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        _ => Err(Error::new(expr.span(), "expected a string literal")),
    }
}

/// Parses an integer literal, optionally negated: `2`, `-1`.
fn parse_int_expr<N>(expr: &Expr) -> Result<N>
where
    N: std::str::FromStr,
    N::Err: std::fmt::Display,
{
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(i), ..
        }) => i.base10_parse(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: Lit::Int(i), ..
            }) => format!("-{}", i.base10_digits())
                .parse()
                .map_err(|e: N::Err| Error::new(expr.span(), e)),
            _ => Err(Error::new(expr.span(), "expected an integer literal")),
        },
        _ => Err(Error::new(expr.span(), "expected an integer literal")),
    }
}

fn parse_value_type(expr: &Expr) -> Result<ValueType> {
    match expr {
        Expr::Path(p) => match p.path.get_ident() {
            Some(ident) => ValueType::from_ident(ident),
            None => Err(Error::new(p.span(), "expected a value type name")),
        },
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => ValueType::from_str(&s.value(), s.span()),
        _ => Err(Error::new(
            expr.span(),
            "value_type must be an identifier or a string literal",
        )),
    }
}

/// Parses one attribute; a bare `#[name]` yields the defaults.
fn parse_attr<T: Parse + Default>(attr: &Attribute) -> Result<T> {
    match &attr.meta {
        Meta::Path(_) => Ok(T::default()),
        _ => attr.parse_args::<T>(),
    }
}

/// Annotations declared on one field, in declaration order.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub exportable: Vec<ExportableAttr>,
    pub importable: Vec<ImportableAttr>,
}

/// Annotations declared on the struct.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    pub header_style: Vec<HeaderStyleAttr>,
    pub sheet: Vec<SheetAttr>,
}

/// Extract `#[exportable(...)]` and `#[importable(...)]` from a field.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    for attr in attrs {
        if attr.path().is_ident("exportable") {
            parsed.exportable.push(parse_attr(attr)?);
        } else if attr.path().is_ident("importable") {
            parsed.importable.push(parse_attr(attr)?);
        }
    }
    Ok(parsed)
}

/// Extract `#[header_style(...)]` and `#[sheet(...)]` from the struct.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttrs> {
    let mut parsed = ContainerAttrs::default();
    for attr in attrs {
        if attr.path().is_ident("header_style") {
            parsed.header_style.push(parse_attr(attr)?);
        } else if attr.path().is_ident("sheet") {
            parsed.sheet.push(parse_attr(attr)?);
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_exportable(tokens: &str) -> Result<ExportableAttr> {
        syn::parse_str::<ExportableAttr>(tokens)
    }

    #[test]
    fn test_exportable_full() {
        let attr = parse_exportable(
            r#"position = 3, header = "name_key", resource = "Labels", format = "0.00", value_type = Number"#,
        )
        .unwrap();
        assert_eq!(attr.position, 3);
        assert_eq!(attr.header.as_deref(), Some("name_key"));
        assert_eq!(attr.resource.as_deref(), Some("Labels"));
        assert_eq!(attr.format.as_deref(), Some("0.00"));
        assert_eq!(attr.value_type, ValueType::Number);
        assert!(!attr.ignore);
    }

    #[test]
    fn test_exportable_ignore() {
        let attr = parse_exportable("ignore").unwrap();
        assert!(attr.ignore);
        assert_eq!(attr.position, 0);
    }

    #[test]
    fn test_value_type_string_literal() {
        let attr = parse_exportable(r#"value_type = "date""#).unwrap();
        assert_eq!(attr.value_type, ValueType::Date);
    }

    #[test]
    fn test_value_type_defaults_to_any() {
        let attr = parse_exportable("position = 1").unwrap();
        assert_eq!(attr.value_type, ValueType::Any);
    }

    #[test]
    fn test_invalid_value_type() {
        let result = parse_exportable("value_type = Money");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown value type"));
    }

    #[test]
    fn test_unknown_exportable_key() {
        let result = parse_exportable(r#"title = "x""#);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown exportable attribute"));
    }

    #[test]
    fn test_position_must_be_integer() {
        assert!(parse_exportable(r#"position = "2""#).is_err());
        assert!(parse_exportable("position = -2").is_err());
    }

    #[test]
    fn test_importable() {
        let attr = syn::parse_str::<ImportableAttr>(r#"position = 4, default = "N/A""#).unwrap();
        assert_eq!(attr.position, 4);
        assert_eq!(attr.default.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_header_style() {
        let attr =
            syn::parse_str::<HeaderStyleAttr>(r##"font_color = "#112233", font_size = 14"##)
                .unwrap();
        assert_eq!(attr.font_color.as_deref(), Some("#112233"));
        assert_eq!(attr.font_size, Some(14));
        assert_eq!(attr.font_name, None);
    }

    #[test]
    fn test_sheet_negative_row() {
        let attr = syn::parse_str::<SheetAttr>(r#"name = "Data", first_row = -1"#).unwrap();
        assert_eq!(attr.name.as_deref(), Some("Data"));
        assert_eq!(attr.first_row, Some(-1));
    }

    #[test]
    fn test_bare_attribute_uses_defaults() {
        let attrs: Vec<Attribute> = syn::parse_quote! {
            #[exportable]
            #[importable(position = 2)]
        };
        let attrs = parse_field_attrs(&attrs).unwrap();
        assert_eq!(attrs.exportable.len(), 1);
        assert_eq!(attrs.exportable[0].position, 0);
        assert_eq!(attrs.importable[0].position, 2);
    }

    #[test]
    fn test_unrelated_attributes_are_skipped() {
        let attrs: Vec<Attribute> = syn::parse_quote! {
            #[serde(rename = "x")]
        };
        let attrs = parse_field_attrs(&attrs).unwrap();
        assert!(attrs.exportable.is_empty());
        assert!(attrs.importable.is_empty());
    }
}
