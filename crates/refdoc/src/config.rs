//! Generator configuration
//!
//! A [`RefDocConfig`] controls the page title, the private-name marker and
//! what happens when a table is missing structural metadata. It can be
//! built in code or loaded from a TOML file:
//!
//! ```toml
//! title = "### The {name} class"
//! private_prefix = "_"
//! missing_class_doc = "warn"
//! unintrospectable_signature = "error"
//! elide_unit_return = true
//! ```

use crate::diagnostics::{RefDocError, RefDocResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder replaced by the class name in the title template
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Default title template
pub const DEFAULT_TITLE: &str = "### The {name} class";

/// What to do when required metadata is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole document
    #[default]
    Error,
    /// Log a warning and continue
    Warn,
}

/// Configuration for the collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RefDocConfig {
    /// Title template; `{name}` is replaced by the class name
    pub title: String,
    /// Members whose name starts with this are never documented
    pub private_prefix: String,
    /// Class without documentation
    pub missing_class_doc: FailurePolicy,
    /// Documented method without a signature
    pub unintrospectable_signature: FailurePolicy,
    /// Drop `-> None` / `-> ()` from rendered signatures
    pub elide_unit_return: bool,
}

impl Default for RefDocConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            private_prefix: "_".to_string(),
            missing_class_doc: FailurePolicy::Error,
            unintrospectable_signature: FailurePolicy::Error,
            elide_unit_return: true,
        }
    }
}

impl RefDocConfig {
    /// Create the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> RefDocResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> RefDocResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&text)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> RefDocResult<()> {
        if self.private_prefix.is_empty() {
            return Err(RefDocError::config(
                "private_prefix must not be empty; it would hide every member",
            ));
        }
        if self.title.trim().is_empty() {
            return Err(RefDocError::config("title must not be empty"));
        }
        Ok(())
    }

    /// Set the title template
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the private-name marker
    pub fn with_private_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.private_prefix = prefix.into();
        self
    }

    /// Set the policy for a class without documentation
    pub fn with_missing_class_doc(mut self, policy: FailurePolicy) -> Self {
        self.missing_class_doc = policy;
        self
    }

    /// Set the policy for a documented method without a signature
    pub fn with_unintrospectable_signature(mut self, policy: FailurePolicy) -> Self {
        self.unintrospectable_signature = policy;
        self
    }

    /// Keep or drop unit return annotations
    pub fn with_elide_unit_return(mut self, elide: bool) -> Self {
        self.elide_unit_return = elide;
        self
    }

    /// Render the title for a class
    pub fn title_for(&self, class_name: &str) -> String {
        self.title.replace(NAME_PLACEHOLDER, class_name)
    }

    /// Check whether a member name carries the private marker
    pub fn is_private(&self, name: &str) -> bool {
        name.starts_with(&self.private_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RefDocConfig::default();
        assert_eq!(config.title_for("VolumeSlicer"), "### The VolumeSlicer class");
        assert!(config.is_private("_cache"));
        assert!(!config.is_private("refresh"));
        assert_eq!(config.missing_class_doc, FailurePolicy::Error);
        assert_eq!(config.unintrospectable_signature, FailurePolicy::Error);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = RefDocConfig::from_toml(
            r###"
            title = "## {name} reference"
            missing_class_doc = "warn"
            "###,
        )
        .unwrap();

        assert_eq!(config.title_for("T"), "## T reference");
        assert_eq!(config.missing_class_doc, FailurePolicy::Warn);
        assert_eq!(config.private_prefix, "_");
        assert!(config.elide_unit_return);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = RefDocConfig::from_toml("titel = \"x\"").unwrap_err();
        assert!(matches!(err, RefDocError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_empty_prefix() {
        let err = RefDocConfig::from_toml("private_prefix = \"\"").unwrap_err();
        assert!(matches!(err, RefDocError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("refdoc.toml");
        std::fs::write(&path, "unintrospectable_signature = \"warn\"\n").unwrap();

        let config = RefDocConfig::from_file(&path).unwrap();
        assert_eq!(config.unintrospectable_signature, FailurePolicy::Warn);

        let missing = RefDocConfig::from_file(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(RefDocError::Io(_))));
    }
}
