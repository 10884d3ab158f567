//! Rendering of Rust types and signatures as display text
//!
//! The reference page shows types the way they are written in source, so
//! this module turns syn nodes back into compact text (`Vec<u8>`, not the
//! token-spaced `Vec < u8 >` that `quote` prints).

use quote::ToTokens;
use syn::{FnArg, Pat, ReturnType, Signature, Type};

/// Token-spacing fixups applied in order
const TIDY_RULES: &[(&str, &str)] = &[
    (" :: ", "::"),
    (":: ", "::"),
    (" ::", "::"),
    (" < ", "<"),
    ("< ", "<"),
    (" <", "<"),
    (" >", ">"),
    (" ,", ","),
    ("( ", "("),
    (" )", ")"),
    ("[ ", "["),
    (" ]", "]"),
    (" ;", ";"),
    ("& ", "&"),
];

/// Words whose parameter list is written without a space: `Fn(u8)`, `fn(&str)`
const CALL_LIKE: &[&str] = &["Fn", "FnMut", "FnOnce", "fn"];

/// Print a token stream with Rust-style spacing
pub fn tidy(tokens: impl ToTokens) -> String {
    let mut text = tokens.to_token_stream().to_string();
    for (from, to) in TIDY_RULES {
        text = text.replace(from, to);
    }
    join_call_parens(&text)
}

/// Drop the space between a [`CALL_LIKE`] word and its opening paren
fn join_call_parens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(" (") {
        let head = &rest[..pos];
        let word = head
            .rsplit(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()
            .unwrap_or("");
        out.push_str(head);
        if !CALL_LIKE.contains(&word) {
            out.push(' ');
        }
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);
    out
}

/// Render a type as written in source
pub fn render_type(ty: &Type) -> String {
    match ty {
        Type::Paren(inner) => render_type(&inner.elem),
        Type::Group(inner) => render_type(&inner.elem),
        _ => tidy(ty),
    }
}

/// Resolve the annotation shown next to a property.
///
/// Returns `None` when the type does not name anything a reader could look
/// up: `impl Trait`, `_`, or macro-produced types. References are shown by
/// their referent, since a getter returning `&str` exposes a `str`.
pub fn type_annotation(ty: &Type) -> Option<String> {
    match ty {
        Type::Reference(r) => type_annotation(&r.elem),
        Type::Paren(inner) => type_annotation(&inner.elem),
        Type::Group(inner) => type_annotation(&inner.elem),
        Type::ImplTrait(_) | Type::Infer(_) | Type::Macro(_) | Type::Verbatim(_) => None,
        _ => Some(render_type(ty)),
    }
}

/// Annotation of a function's return type, if it has one
pub fn return_annotation(output: &ReturnType) -> Option<String> {
    match output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => type_annotation(ty),
    }
}

/// Render one parameter: `&self`, `mut self`, `name: Type`
fn render_param(arg: &FnArg) -> String {
    match arg {
        FnArg::Receiver(receiver) => {
            let reference = if receiver.reference.is_some() { "&" } else { "" };
            let mutability = if receiver.mutability.is_some() { "mut " } else { "" };
            if receiver.colon_token.is_some() {
                format!("self: {}", render_type(&receiver.ty))
            } else {
                format!("{}{}self", reference, mutability)
            }
        }
        FnArg::Typed(pat_type) => {
            let name = match &*pat_type.pat {
                Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
                other => tidy(other),
            };
            format!("{}: {}", name, render_type(&pat_type.ty))
        }
    }
}

/// Render a call signature: `(&self, level: u8) -> bool`
///
/// Variadic signatures have no faithful rendering and yield `None`.
pub fn render_signature(sig: &Signature, with_return: bool) -> Option<String> {
    if sig.variadic.is_some() {
        return None;
    }

    let params: Vec<String> = sig.inputs.iter().map(render_param).collect();
    let mut rendered = format!("({})", params.join(", "));

    if with_return {
        if let ReturnType::Type(_, ty) = &sig.output {
            rendered.push_str(" -> ");
            rendered.push_str(&render_type(ty));
        }
    }

    Some(rendered)
}
