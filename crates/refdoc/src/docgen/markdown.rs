//! Markdown rendering of a reference document
//!
//! A page is a title, one block for the class, one per documented method
//! and property, and an optional companion text. Parts are joined with a
//! blank line.

use serde::Serialize;

/// Separator between the parts of a page
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// What a block documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    /// The class header
    Class,
    /// An invocable member
    Method,
    /// A data member
    Property,
}

impl BlockKind {
    /// Get the heading keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            BlockKind::Class => "class",
            BlockKind::Method => "method",
            BlockKind::Property => "property",
        }
    }
}

/// ``**<keyword> `<target>`**``
fn heading(kind: BlockKind, target: &str) -> String {
    format!("**{} `{}`**", kind.keyword(), target)
}

/// One heading + body unit of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    /// What the block documents
    pub kind: BlockKind,
    /// Rendered heading, e.g. ``**method `T.run()`**``
    pub heading: String,
    /// Normalized documentation
    pub body: Option<String>,
}

impl DocBlock {
    /// Create a class block: ``**class `Name(sig)`**``
    pub fn class(name: &str, signature: &str, body: Option<String>) -> Self {
        Self {
            kind: BlockKind::Class,
            heading: heading(BlockKind::Class, &format!("{}{}", name, signature)),
            body,
        }
    }

    /// Create a method block: ``**method `Name.member(sig)`**``
    pub fn method(class: &str, member: &str, signature: &str, body: String) -> Self {
        Self {
            kind: BlockKind::Method,
            heading: heading(BlockKind::Method, &format!("{}.{}{}", class, member, signature)),
            body: Some(body),
        }
    }

    /// Create a property block: ``**property `Name.member`**``, with an
    /// optional `` (`Type`)`` suffix
    pub fn property(class: &str, member: &str, type_name: Option<&str>, body: String) -> Self {
        let mut text = heading(BlockKind::Property, &format!("{}.{}", class, member));
        if let Some(ty) = type_name {
            text.push_str(&format!(" (`{}`)", ty));
        }
        Self {
            kind: BlockKind::Property,
            heading: text,
            body: Some(body),
        }
    }

    /// Render the block.
    ///
    /// Property docs follow the heading on the same line after `": "`; the
    /// other kinds put the body in its own paragraph.
    pub fn render(&self) -> String {
        match (&self.body, self.kind) {
            (None, _) => self.heading.clone(),
            (Some(body), BlockKind::Property) => format!("{}: {}", self.heading, body),
            (Some(body), _) => format!("{}{}{}", self.heading, BLOCK_SEPARATOR, body),
        }
    }
}

/// A complete reference page, in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceDocument {
    /// Section title line
    pub title: String,
    /// Class block
    pub class: DocBlock,
    /// Method blocks, in table order
    pub methods: Vec<DocBlock>,
    /// Property blocks, in table order
    pub properties: Vec<DocBlock>,
    /// Free-standing text appended verbatim
    pub companion: Option<String>,
}

impl ReferenceDocument {
    /// All blocks in emission order
    pub fn blocks(&self) -> impl Iterator<Item = &DocBlock> {
        std::iter::once(&self.class)
            .chain(self.methods.iter())
            .chain(self.properties.iter())
    }

    /// Render the page as Markdown
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.methods.len() + self.properties.len() + 3);
        parts.push(self.title.clone());
        parts.extend(self.blocks().map(DocBlock::render));
        if let Some(companion) = &self.companion {
            parts.push(companion.clone());
        }
        parts.join(BLOCK_SEPARATOR)
    }
}
