//! Implementation of the #[refdoc_class] macro

use crate::attrs::{doc_text, is_doc_hidden, item_role, strip_refdoc_attrs, ItemRole};
use crate::type_parser::type_annotation;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse2, Fields, ItemStruct, LitStr, Visibility};

/// Parse refdoc_class attributes
#[derive(Default)]
struct RefdocClassAttrs {
    name: Option<String>,
}

impl RefdocClassAttrs {
    fn parse(attr: TokenStream) -> syn::Result<Self> {
        let mut attrs = RefdocClassAttrs::default();
        if attr.is_empty() {
            return Ok(attrs);
        }

        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                attrs.name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        });
        syn::parse::Parser::parse2(parser, attr)?;

        Ok(attrs)
    }
}

pub fn refdoc_class_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand(attr, item) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let mut input: ItemStruct = parse2(item)?;
    let attrs = RefdocClassAttrs::parse(attr)?;

    let struct_name = &input.ident;
    let class_name = attrs.name.unwrap_or_else(|| struct_name.to_string());
    let class_doc = option_tokens(doc_text(&input.attrs));

    // Public named fields are the struct's data members
    let mut field_tokens = Vec::new();
    if let Fields::Named(fields) = &mut input.fields {
        for field in fields.named.iter_mut() {
            let role = item_role(&field.attrs)?;
            strip_refdoc_attrs(&mut field.attrs);

            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            if !matches!(field.vis, Visibility::Public(_))
                || role == ItemRole::Skip
                || is_doc_hidden(&field.attrs)
            {
                continue;
            }

            let name = ident.to_string();
            let doc = option_tokens(doc_text(&field.attrs));
            let return_type = option_tokens(type_annotation(&field.ty));

            field_tokens.push(quote! {
                ::refdoc_ir::MemberSymbol {
                    name: #name.to_string(),
                    kind: ::refdoc_ir::MemberKind::Property,
                    signature: None,
                    return_type: #return_type,
                    doc: #doc,
                }
            });
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics ::refdoc_ir::DocumentedClass for #struct_name #ty_generics #where_clause {
            fn class_header() -> ::refdoc_ir::ClassSymbol {
                ::refdoc_ir::ClassSymbol {
                    name: #class_name.to_string(),
                    doc: #class_doc,
                    constructor: None,
                    members: vec![#(#field_tokens),*],
                }
            }
        }
    })
}

/// Emit `Some("...".to_string())` or `None`
pub(crate) fn option_tokens(value: Option<String>) -> TokenStream {
    match value {
        Some(text) => quote! { Some(#text.to_string()) },
        None => quote! { None },
    }
}
