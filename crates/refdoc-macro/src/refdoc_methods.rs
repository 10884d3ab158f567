//! Implementation of the #[refdoc_methods] macro

use crate::attrs::{doc_text, is_doc_hidden, item_role, strip_refdoc_attrs, ItemRole};
use crate::refdoc_class::option_tokens;
use crate::type_parser::{return_annotation, render_signature};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse2, ImplItem, ImplItemFn, ItemImpl, LitStr, Visibility};

/// Parse refdoc_methods attributes
struct RefdocMethodsAttrs {
    constructor: String,
}

impl RefdocMethodsAttrs {
    fn parse(attr: TokenStream) -> syn::Result<Self> {
        let mut attrs = RefdocMethodsAttrs {
            constructor: "new".to_string(),
        };
        if attr.is_empty() {
            return Ok(attrs);
        }

        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("constructor") {
                let value: LitStr = meta.value()?.parse()?;
                attrs.constructor = value.value();
                Ok(())
            } else {
                Err(meta.error("expected `constructor = \"...\"`"))
            }
        });
        syn::parse::Parser::parse2(parser, attr)?;

        Ok(attrs)
    }
}

/// How one `pub fn` shows up in the table
enum Collected {
    Constructor(Option<String>),
    Member(TokenStream),
}

fn collect_fn(
    func: &ImplItemFn,
    role: ItemRole,
    constructor_name: &str,
) -> Option<Collected> {
    if !matches!(func.vis, Visibility::Public(_))
        || role == ItemRole::Skip
        || is_doc_hidden(&func.attrs)
    {
        return None;
    }

    let name = func.sig.ident.to_string();
    if role == ItemRole::Constructor || (role == ItemRole::Auto && name == constructor_name) {
        return Some(Collected::Constructor(render_signature(&func.sig, false)));
    }

    let doc = option_tokens(doc_text(&func.attrs));
    let member = if role == ItemRole::Property {
        let return_type = option_tokens(return_annotation(&func.sig.output));
        quote! {
            ::refdoc_ir::MemberSymbol {
                name: #name.to_string(),
                kind: ::refdoc_ir::MemberKind::Property,
                signature: None,
                return_type: #return_type,
                doc: #doc,
            }
        }
    } else {
        let signature = option_tokens(render_signature(&func.sig, true));
        quote! {
            ::refdoc_ir::MemberSymbol {
                name: #name.to_string(),
                kind: ::refdoc_ir::MemberKind::Method,
                signature: #signature,
                return_type: None,
                doc: #doc,
            }
        }
    };

    Some(Collected::Member(member))
}

pub fn refdoc_methods_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand(attr, item) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let mut input: ItemImpl = parse2(item)?;
    let attrs = RefdocMethodsAttrs::parse(attr)?;

    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[refdoc_methods] documents inherent impl blocks only",
        ));
    }

    let mut constructor = None;
    let mut member_tokens = Vec::new();

    for item in input.items.iter_mut() {
        let ImplItem::Fn(func) = item else {
            continue;
        };
        let role = item_role(&func.attrs)?;
        strip_refdoc_attrs(&mut func.attrs);

        match collect_fn(func, role, &attrs.constructor) {
            Some(Collected::Constructor(signature)) => {
                if constructor.is_some() {
                    return Err(syn::Error::new_spanned(
                        &func.sig.ident,
                        "a documented class has exactly one constructor",
                    ));
                }
                constructor = Some(signature);
            }
            Some(Collected::Member(tokens)) => member_tokens.push(tokens),
            None => {}
        }
    }

    let constructor = option_tokens(constructor.flatten());
    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics ::refdoc_ir::DocumentedMembers for #self_ty #where_clause {
            fn constructor_signature() -> Option<String> {
                #constructor
            }

            fn members() -> Vec<::refdoc_ir::MemberSymbol> {
                vec![#(#member_tokens),*]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(attr: TokenStream, item: TokenStream) -> String {
        expand(attr, item).unwrap().to_string()
    }

    #[test]
    fn test_expand_classifies_members() {
        let item = quote! {
            impl Slicer {
                /// Create a slicer.
                pub fn new(axis: u8) -> Self { Self { axis } }

                /// Refresh the view.
                pub fn refresh(&mut self, force: bool) {}

                /// Current axis.
                #[refdoc(property)]
                pub fn axis(&self) -> u8 { self.axis }

                fn private_helper(&self) {}
            }
        };
        let out = expand_str(TokenStream::new(), item);

        assert!(out.contains("DocumentedMembers for Slicer"));
        assert!(out.contains("\"(axis: u8)\""));
        assert!(out.contains("\"(&mut self, force: bool)\""));
        assert!(out.contains("MemberKind :: Property"));
        assert!(out.contains("\"u8\""));
        assert!(!out.contains("\"private_helper\""));
        assert!(!out.contains("refdoc (property)"));
    }

    #[test]
    fn test_custom_constructor_name() {
        let item = quote! {
            impl Slicer {
                pub fn create(volume: Vec<u8>) -> Self { todo!() }
                pub fn new() -> Self { todo!() }
            }
        };
        let out = expand_str(quote!(constructor = "create"), item);
        assert!(out.contains("\"(volume: Vec<u8>)\""));
        assert!(out.contains("\"new\""));
    }

    #[test]
    fn test_two_constructors_rejected() {
        let item = quote! {
            impl Slicer {
                pub fn new() -> Self { todo!() }
                #[refdoc(constructor)]
                pub fn with_axis(axis: u8) -> Self { todo!() }
            }
        };
        assert!(expand(TokenStream::new(), item).is_err());
    }

    #[test]
    fn test_trait_impl_rejected() {
        let item = quote! {
            impl Default for Slicer {
                fn default() -> Self { todo!() }
            }
        };
        assert!(expand(TokenStream::new(), item).is_err());
    }
}
