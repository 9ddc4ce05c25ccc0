//! Implementation of the `#[derive(SheetRecord)]` macro.
//!
//! This macro generates an implementation of the `SheetRecord` trait whose
//! `descriptor()` registers every named field, in declaration order, with
//! the annotations attached to it.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{
    parse_container_attrs, parse_field_attrs, ExportableAttr, HeaderStyleAttr, ImportableAttr,
    SheetAttr,
};

/// Main implementation of the SheetRecord derive macro.
pub fn sheet_record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let type_name = struct_name.to_string();

    let container_attrs = parse_container_attrs(&input.attrs)?;

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "SheetRecord can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "SheetRecord can only be derived for structs",
            ))
        }
    };

    let mut type_annotations: Vec<TokenStream> = Vec::new();
    type_annotations.extend(container_attrs.header_style.iter().map(header_style_tokens));
    type_annotations.extend(container_attrs.sheet.iter().map(sheet_tokens));

    let mut field_tokens: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        let field_name = unraw(&field_ident.to_string());

        let attrs = parse_field_attrs(&field.attrs)?;

        let mut annotations: Vec<TokenStream> = Vec::new();
        annotations.extend(attrs.exportable.iter().map(exportable_tokens));
        annotations.extend(attrs.importable.iter().map(importable_tokens));

        field_tokens.push(quote! {
            .field(
                ::sheetmeta::FieldDescriptor::new(#field_name)
                    #(.annotate(#annotations))*
            )
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::sheetmeta::SheetRecord for #struct_name #ty_generics #where_clause {
            fn descriptor() -> ::sheetmeta::TypeDescriptor {
                ::sheetmeta::TypeDescriptor::new(#type_name)
                    #(.annotate(#type_annotations))*
                    #(#field_tokens)*
            }
        }
    };

    Ok(expanded)
}

fn exportable_tokens(attr: &ExportableAttr) -> TokenStream {
    let is_ignored = attr.ignore;
    let header_name = option_string_tokens(&attr.header);
    let resource_type = option_string_tokens(&attr.resource);
    let position = attr.position;
    let format = option_string_tokens(&attr.format);
    let value_type = format_ident!("{}", attr.value_type.variant_name());

    quote! {
        ::sheetmeta::ExportAnnotation {
            is_ignored: #is_ignored,
            header_name: #header_name,
            resource_type: #resource_type,
            position: #position,
            format: #format,
            value_type: ::sheetmeta::FieldValueType::#value_type,
        }
    }
}

fn importable_tokens(attr: &ImportableAttr) -> TokenStream {
    let position = attr.position;
    let default = attr.default.as_deref().unwrap_or("");

    quote! {
        ::sheetmeta::ImportAnnotation {
            position: #position,
            default_for_null_or_invalid: #default.to_string(),
        }
    }
}

fn header_style_tokens(attr: &HeaderStyleAttr) -> TokenStream {
    let font_name = attr.font_name.as_deref().unwrap_or("");
    let font_color = attr.font_color.as_deref().unwrap_or("");
    let font_size = attr.font_size.unwrap_or(0);
    let border_color = attr.border_color.as_deref().unwrap_or("");
    let back_color = attr.back_color.as_deref().unwrap_or("");

    quote! {
        ::sheetmeta::HeaderStyleAnnotation {
            font_name: #font_name.to_string(),
            font_color: #font_color.to_string(),
            font_size: #font_size,
            border_color: #border_color.to_string(),
            back_color: #back_color.to_string(),
        }
    }
}

fn sheet_tokens(attr: &SheetAttr) -> TokenStream {
    let sheet_name = option_string_tokens(&attr.name);
    let first_row = match attr.first_row {
        Some(row) => quote! { #row },
        None => quote! { ::sheetmeta::NO_FIRST_ROW },
    };

    quote! {
        ::sheetmeta::SheetAnnotation {
            sheet_name: #sheet_name,
            first_row_with_data: #first_row,
        }
    }
}

fn option_string_tokens(value: &Option<String>) -> TokenStream {
    match value {
        Some(s) => quote! { ::std::option::Option::Some(#s.to_string()) },
        None => quote! { ::std::option::Option::None },
    }
}

/// Strip the `r#` prefix of raw identifiers.
fn unraw(name: &str) -> String {
    name.strip_prefix("r#").unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(tokens: TokenStream) -> Result<String> {
        let input: DeriveInput = syn::parse2(tokens)?;
        sheet_record_derive_impl(input).map(|ts| ts.to_string())
    }

    #[test]
    fn test_unraw() {
        assert_eq!(unraw("r#type"), "type");
        assert_eq!(unraw("name"), "name");
    }

    #[test]
    fn test_expands_fields_in_order() {
        let out = expand(quote! {
            struct Row {
                #[exportable(position = 1)]
                b: String,
                a: u32,
            }
        })
        .unwrap();

        let b = out.find("\"b\"").unwrap();
        let a = out.find("\"a\"").unwrap();
        assert!(b < a);
        assert!(out.contains("ExportAnnotation"));
        assert!(out.contains("1u32"));
    }

    #[test]
    fn test_rejects_enums() {
        let err = expand(quote! { enum E { A } }).unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn test_rejects_tuple_structs() {
        let err = expand(quote! { struct T(u32); }).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_sheet_without_row_uses_sentinel() {
        let out = expand(quote! {
            #[sheet(name = "Data")]
            struct Row { a: u32 }
        })
        .unwrap();
        assert!(out.contains("NO_FIRST_ROW"));
    }
}
