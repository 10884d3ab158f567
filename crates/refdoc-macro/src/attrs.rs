//! Attribute helpers shared by the refdoc macros

use syn::{Attribute, Expr, ExprLit, Lit, Meta};

/// What `#[refdoc(...)]` says about an item
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ItemRole {
    /// No marker: classify by shape
    #[default]
    Auto,
    /// `#[refdoc(constructor)]`
    Constructor,
    /// `#[refdoc(property)]`
    Property,
    /// `#[refdoc(skip)]`
    Skip,
}

/// Collect `///` doc comments into one string, lines joined with `\n`.
///
/// Each line keeps the leading space rustdoc leaves after `///`; the
/// normalizer strips that later. All-blank docs count as absent.
pub fn doc_text(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    let text = lines.join("\n");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Check for `#[doc(hidden)]`
pub fn is_doc_hidden(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        if !attr.path().is_ident("doc") {
            return false;
        }
        let mut hidden = false;
        if let Meta::List(_) = &attr.meta {
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("hidden") {
                    hidden = true;
                }
                Ok(())
            });
        }
        hidden
    })
}

/// Read the `#[refdoc(...)]` role of an item
pub fn item_role(attrs: &[Attribute]) -> syn::Result<ItemRole> {
    let mut role = ItemRole::Auto;
    for attr in attrs.iter().filter(|a| a.path().is_ident("refdoc")) {
        attr.parse_nested_meta(|meta| {
            role = if meta.path.is_ident("constructor") {
                ItemRole::Constructor
            } else if meta.path.is_ident("property") {
                ItemRole::Property
            } else if meta.path.is_ident("skip") {
                ItemRole::Skip
            } else {
                return Err(meta.error("expected `constructor`, `property` or `skip`"));
            };
            Ok(())
        })?;
    }
    Ok(role)
}

/// Remove `#[refdoc(...)]` helper attributes so the item compiles
pub fn strip_refdoc_attrs(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident("refdoc"));
}
