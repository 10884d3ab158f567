//! Symbol metadata for classes and their members
//!
//! A [`ClassSymbol`] is the static stand-in for a reflectable type: it lists
//! the constructor signature, the class doc and every public member in
//! declaration order.

use serde::{Deserialize, Serialize};

/// Kind of a class member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    /// Invocable member
    #[default]
    Method,
    /// Data member, read without call syntax
    Property,
}

/// Metadata for a single class member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSymbol {
    /// Member name as declared
    pub name: String,
    /// Method or property
    pub kind: MemberKind,
    /// Call signature text, e.g. `(&self, level: u8) -> bool` (methods only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signature: Option<String>,
    /// Return type annotation of the accessor (properties only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub return_type: Option<String>,
    /// Raw documentation string
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub doc: Option<String>,
}

impl MemberSymbol {
    /// Create a method with the given signature text
    pub fn method(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Method,
            signature: Some(signature.into()),
            return_type: None,
            doc: None,
        }
    }

    /// Create a property without a type annotation
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
            signature: None,
            return_type: None,
            doc: None,
        }
    }

    /// Set the return type annotation
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Drop the signature, marking the member as not introspectable
    pub fn without_signature(mut self) -> Self {
        self.signature = None;
        self
    }

    /// Check if this member is invocable
    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }

    /// Documentation, treating empty or whitespace-only text as absent
    pub fn documentation(&self) -> Option<&str> {
        non_blank(self.doc.as_deref())
    }
}

/// Metadata for a documented class
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSymbol {
    /// Type name
    pub name: String,
    /// Raw class documentation
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub doc: Option<String>,
    /// Constructor signature text, e.g. `(volume: Volume, axis: u8)`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub constructor: Option<String>,
    /// Members in declaration order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub members: Vec<MemberSymbol>,
}

impl ClassSymbol {
    /// Create a new class table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set the constructor signature
    pub fn with_constructor(mut self, signature: impl Into<String>) -> Self {
        self.constructor = Some(signature.into());
        self
    }

    /// Add a member
    pub fn member(mut self, member: MemberSymbol) -> Self {
        self.members.push(member);
        self
    }

    /// Append members, keeping their order
    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberSymbol>) -> Self {
        self.members.extend(members);
        self
    }

    /// Get a member by name
    pub fn find_member(&self, name: &str) -> Option<&MemberSymbol> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Get all methods, in declaration order
    pub fn methods(&self) -> impl Iterator<Item = &MemberSymbol> {
        self.members.iter().filter(|m| m.kind == MemberKind::Method)
    }

    /// Get all properties, in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &MemberSymbol> {
        self.members.iter().filter(|m| m.kind == MemberKind::Property)
    }

    /// Class documentation, treating empty or whitespace-only text as absent
    pub fn documentation(&self) -> Option<&str> {
        non_blank(self.doc.as_deref())
    }

    /// Parse a table from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the table to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Class-level metadata, implemented by `#[refdoc_class]`
pub trait DocumentedClass {
    /// Name, doc comment and field properties of the type
    fn class_header() -> ClassSymbol;
}

/// Member metadata, implemented by `#[refdoc_methods]`
pub trait DocumentedMembers {
    /// Constructor signature, if the impl block declares one
    fn constructor_signature() -> Option<String>;

    /// Methods and accessor properties in declaration order
    fn members() -> Vec<MemberSymbol>;
}

/// A type with a complete metadata table
pub trait Documented {
    /// Build the table from scratch
    fn class_symbol() -> ClassSymbol;
}

impl<T: DocumentedClass + DocumentedMembers> Documented for T {
    fn class_symbol() -> ClassSymbol {
        let mut class = T::class_header();
        class.constructor = T::constructor_signature();
        class.with_members(T::members())
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
