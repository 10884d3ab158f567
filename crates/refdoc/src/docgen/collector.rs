//! Collector - walks a class table and assembles the reference document
//!
//! The walk is a pure function of the table: it filters out private and
//! undocumented members, routes the rest into the method or property group,
//! normalizes each doc string and renders its heading.

use crate::config::{FailurePolicy, RefDocConfig};
use crate::dedent::dedent;
use crate::diagnostics::{codes, Diagnostic, DiagnosticsCollector, RefDocError, RefDocResult};
use crate::docgen::markdown::{DocBlock, ReferenceDocument};
use crate::docgen::signature::render_signature;
use refdoc_ir::{ClassSymbol, MemberKind, MemberSymbol};
use tracing::debug;

/// Normalize a doc string for output
fn normalize(doc: &str) -> String {
    dedent(doc).trim_end().to_string()
}

/// Walks class tables and produces reference documents
///
/// ```
/// use refdoc::{Collector, RefDocConfig};
/// use refdoc_ir::{ClassSymbol, MemberSymbol};
///
/// let class = ClassSymbol::new("T")
///     .with_doc("A class.")
///     .with_constructor("(self, x)")
///     .member(MemberSymbol::method("run", "(self) -> None").with_doc("Runs it."));
///
/// let mut collector = Collector::new(RefDocConfig::default());
/// let doc = collector.collect(&class, None).unwrap();
/// assert_eq!(doc.methods[0].heading, "**method `T.run()`**");
/// ```
#[derive(Debug, Default)]
pub struct Collector {
    /// Configuration
    config: RefDocConfig,
    /// Diagnostics collector
    diagnostics: DiagnosticsCollector,
}

impl Collector {
    /// Create a new collector with the given configuration
    pub fn new(config: RefDocConfig) -> Self {
        Self {
            config,
            diagnostics: DiagnosticsCollector::new(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &RefDocConfig {
        &self.config
    }

    /// Get the diagnostics
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Take the diagnostics, leaving an empty collector behind
    pub fn take_diagnostics(&mut self) -> DiagnosticsCollector {
        std::mem::take(&mut self.diagnostics)
    }

    /// Build the reference document for a class.
    ///
    /// Diagnostics left over from a previous call are discarded.
    ///
    /// # Errors
    ///
    /// - [`RefDocError::UnintrospectableSignature`] when the constructor has
    ///   no signature, or a documented method has none and the signature
    ///   policy is [`FailurePolicy::Error`]
    /// - [`RefDocError::MissingClassDocumentation`] when the class has no
    ///   doc and the class-doc policy is [`FailurePolicy::Error`]
    pub fn collect(
        &mut self,
        class: &ClassSymbol,
        companion: Option<&str>,
    ) -> RefDocResult<ReferenceDocument> {
        debug!(class = %class.name, members = class.members.len(), "collecting reference document");
        self.diagnostics = DiagnosticsCollector::new();

        let header = self.class_block(class)?;

        let mut methods = Vec::new();
        let mut properties = Vec::new();
        for member in &class.members {
            let Some(block) = self.member_block(class, member)? else {
                continue;
            };
            match member.kind {
                MemberKind::Method => methods.push(block),
                MemberKind::Property => properties.push(block),
            }
        }

        debug!(
            class = %class.name,
            methods = methods.len(),
            properties = properties.len(),
            "reference document collected"
        );

        Ok(ReferenceDocument {
            title: self.config.title_for(&class.name),
            class: header,
            methods,
            properties,
            companion: companion.map(str::to_string),
        })
    }

    /// Build the class header block
    fn class_block(&mut self, class: &ClassSymbol) -> RefDocResult<DocBlock> {
        let constructor = class
            .constructor
            .as_deref()
            .filter(|sig| !sig.trim().is_empty())
            .ok_or_else(|| RefDocError::signature(&class.name, "constructor"))?;
        let signature = render_signature(constructor, self.config.elide_unit_return);

        let body = match class.documentation() {
            Some(doc) => Some(normalize(doc)),
            None => match self.config.missing_class_doc {
                FailurePolicy::Error => return Err(RefDocError::missing_class_doc(&class.name)),
                FailurePolicy::Warn => {
                    self.diagnostics.add(
                        Diagnostic::warning("class has no documentation")
                            .on_member(&class.name)
                            .with_code(codes::MISSING_CLASS_DOC),
                    );
                    None
                }
            },
        };

        Ok(DocBlock::class(&class.name, &signature, body))
    }

    /// Build the block for one member, or `None` if it is filtered out
    fn member_block(
        &mut self,
        class: &ClassSymbol,
        member: &MemberSymbol,
    ) -> RefDocResult<Option<DocBlock>> {
        let qualified = format!("{}.{}", class.name, member.name);

        if self.config.is_private(&member.name) {
            self.diagnostics.add(
                Diagnostic::info("private member skipped")
                    .on_member(&qualified)
                    .with_code(codes::PRIVATE_MEMBER),
            );
            return Ok(None);
        }

        let Some(doc) = member.documentation() else {
            self.diagnostics.add(
                Diagnostic::info("undocumented member skipped")
                    .on_member(&qualified)
                    .with_code(codes::MISSING_DOC),
            );
            return Ok(None);
        };
        let body = normalize(doc);

        match member.kind {
            MemberKind::Method => {
                let Some(raw) = member
                    .signature
                    .as_deref()
                    .filter(|sig| !sig.trim().is_empty())
                else {
                    return match self.config.unintrospectable_signature {
                        FailurePolicy::Error => {
                            Err(RefDocError::signature(&class.name, &member.name))
                        }
                        FailurePolicy::Warn => {
                            self.diagnostics.add(
                                Diagnostic::warning("signature cannot be rendered; member skipped")
                                    .on_member(&qualified)
                                    .with_code(codes::NO_SIGNATURE),
                            );
                            Ok(None)
                        }
                    };
                };
                let signature = render_signature(raw, self.config.elide_unit_return);
                Ok(Some(DocBlock::method(&class.name, &member.name, &signature, body)))
            }
            MemberKind::Property => {
                let type_name = member.return_type.as_deref().filter(|t| !t.trim().is_empty());
                if type_name.is_none() {
                    self.diagnostics.add(
                        Diagnostic::info("no type annotation")
                            .on_member(&qualified)
                            .with_code(codes::NO_TYPE_ANNOTATION),
                    );
                }
                Ok(Some(DocBlock::property(&class.name, &member.name, type_name, body)))
            }
        }
    }
}

/// Build the reference page for a class with the default configuration.
///
/// `companion` is appended verbatim as the last block.
pub fn build_reference_document(class: &ClassSymbol, companion: Option<&str>) -> RefDocResult<String> {
    let mut collector = Collector::new(RefDocConfig::default());
    Ok(collector.collect(class, companion)?.render())
}
