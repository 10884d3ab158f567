//! Call signature rendering
//!
//! Signatures in a metadata table are written from the definition's point of
//! view and still carry the receiver. Headings show them from the caller's
//! point of view: `(self, a, b=1)` becomes `(a, b=1)`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A leading receiver: `self`, `&self`, `&'a mut self`, `mut self`,
    /// `self: Box<Self>`, with the comma that follows it
    static ref RECEIVER_REGEX: Regex = Regex::new(
        r"^\(\s*(?:&\s*(?:'\w+\s+)?)?(?:mut\s+)?self\b(?:\s*:\s*[^,)]*)?\s*(?:,\s*)?"
    ).unwrap();

    /// A trailing unit return annotation
    static ref UNIT_RETURN_REGEX: Regex = Regex::new(
        r"\s*->\s*(?:None|\(\s*\))\s*$"
    ).unwrap();
}

/// Remove the receiver from a parenthesised parameter list
pub fn strip_receiver(signature: &str) -> String {
    RECEIVER_REGEX.replace(signature.trim(), "(").into_owned()
}

/// Remove a trailing `-> None` or `-> ()`
pub fn elide_unit_return(signature: &str) -> String {
    UNIT_RETURN_REGEX.replace(signature, "").into_owned()
}

/// Render a signature for a heading
pub fn render_signature(signature: &str, elide_unit: bool) -> String {
    let stripped = strip_receiver(signature);
    if elide_unit {
        elide_unit_return(&stripped)
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_receiver() {
        assert_eq!(strip_receiver("(self, a, b=1)"), "(a, b=1)");
        assert_eq!(strip_receiver("(self)"), "()");
        assert_eq!(strip_receiver("(&self)"), "()");
        assert_eq!(strip_receiver("(&mut self, x: u8) -> bool"), "(x: u8) -> bool");
        assert_eq!(strip_receiver("(&'a self, x: u8)"), "(x: u8)");
        assert_eq!(strip_receiver("(mut self)"), "()");
        assert_eq!(strip_receiver("(self: Box<Self>, n: usize)"), "(n: usize)");
    }

    #[test]
    fn test_strip_receiver_leaves_other_params() {
        assert_eq!(strip_receiver("(selfish, x)"), "(selfish, x)");
        assert_eq!(strip_receiver("(a, self)"), "(a, self)");
        assert_eq!(strip_receiver("(axis: u8)"), "(axis: u8)");
        assert_eq!(strip_receiver("()"), "()");
    }

    #[test]
    fn test_elide_unit_return() {
        assert_eq!(elide_unit_return("() -> None"), "()");
        assert_eq!(elide_unit_return("(x) -> ()"), "(x)");
        assert_eq!(elide_unit_return("(x) -> Nonesuch"), "(x) -> Nonesuch");
        assert_eq!(elide_unit_return("(x) -> bool"), "(x) -> bool");
    }

    #[test]
    fn test_render_signature() {
        assert_eq!(render_signature("(self) -> None", true), "()");
        assert_eq!(render_signature("(self) -> None", false), "() -> None");
        assert_eq!(render_signature("(&self, n: u8) -> ()", true), "(n: u8)");
    }
}
