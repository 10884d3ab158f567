//! RefDocBuilder - Main API for reference page generation
//!
//! This module provides the builder pattern API for configuring and
//! running one reference page generation, typically from a build script
//! or a documentation pipeline.

use crate::config::RefDocConfig;
use crate::diagnostics::{Diagnostic, RefDocError, RefDocResult};
use crate::docgen::{Collector, ReferenceDocument};
use refdoc_ir::{ClassRegistry, ClassSymbol, Documented};
use std::path::{Path, PathBuf};
use tracing::info;

/// Build output containing the generated page
#[derive(Debug)]
pub struct BuildOutput {
    /// Rendered Markdown
    pub markdown: String,
    /// The structured document the Markdown was rendered from
    pub document: ReferenceDocument,
    /// File the page was written to, if any
    pub output_file: Option<PathBuf>,
    /// Non-fatal findings of the member walk
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    /// Number of documented methods
    pub fn method_count(&self) -> usize {
        self.document.methods.len()
    }

    /// Number of documented properties
    pub fn property_count(&self) -> usize {
        self.document.properties.len()
    }
}

/// Builder for configuring reference page generation
///
/// # Example
///
/// ```no_run
/// use refdoc::RefDocBuilder;
///
/// RefDocBuilder::from_json_file("target/refdoc/VolumeSlicer.json")
///     .expect("Failed to load table")
///     .companion_file("docs/slicer_companion.md")
///     .output_file("docs/reference.md")
///     .build()
///     .expect("Failed to generate docs");
/// ```
#[derive(Debug)]
pub struct RefDocBuilder {
    /// Class to document
    pub class: ClassSymbol,
    /// Text appended verbatim after the member blocks
    pub companion: Option<String>,
    /// File read for the companion text at build time
    pub companion_file: Option<PathBuf>,
    /// Collector configuration
    pub config: RefDocConfig,
    /// TOML config file read at build time
    pub config_file: Option<PathBuf>,
    /// Where to write the page
    pub output_file: Option<PathBuf>,
}

impl RefDocBuilder {
    /// Create a new builder for a class table
    pub fn new(class: ClassSymbol) -> Self {
        Self {
            class,
            companion: None,
            companion_file: None,
            config: RefDocConfig::default(),
            config_file: None,
            output_file: None,
        }
    }

    /// Create a builder for a type annotated with the refdoc macros
    pub fn for_type<T: Documented>() -> Self {
        Self::new(T::class_symbol())
    }

    /// Create a builder for a class registered with `register_class!`
    pub fn from_inventory(name: &str) -> RefDocResult<Self> {
        ClassRegistry::from_inventory()
            .find(name)
            .cloned()
            .map(Self::new)
            .ok_or_else(|| RefDocError::ClassNotFound(name.to_string()))
    }

    /// Create a builder from a JSON table on disk
    pub fn from_json_file(path: impl AsRef<Path>) -> RefDocResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::new(ClassSymbol::from_json(&json)?))
    }

    /// Set the companion text
    pub fn companion(mut self, text: impl Into<String>) -> Self {
        self.companion = Some(text.into());
        self
    }

    /// Read the companion text from a file at build time
    pub fn companion_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.companion_file = Some(path.into());
        self
    }

    /// Set the configuration
    pub fn config(mut self, config: RefDocConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a TOML file at build time
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set the output file
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Build the page
    ///
    /// This method:
    /// 1. Loads the config and companion files, if set
    /// 2. Walks the class table
    /// 3. Renders the Markdown
    /// 4. Writes it to the output file, if set
    pub fn build(self) -> RefDocResult<BuildOutput> {
        let config = match &self.config_file {
            Some(path) => RefDocConfig::from_file(path)?,
            None => {
                self.config.validate()?;
                self.config
            }
        };

        let companion = match &self.companion_file {
            Some(path) => Some(std::fs::read_to_string(path)?),
            None => self.companion,
        };

        let mut collector = Collector::new(config);
        let document = collector.collect(&self.class, companion.as_deref())?;
        let markdown = document.render();

        if let Some(path) = &self.output_file {
            if path.is_dir() {
                return Err(RefDocError::other(format!(
                    "output path {} is a directory",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &markdown)?;
            info!(
                class = %self.class.name,
                path = %path.display(),
                methods = document.methods.len(),
                properties = document.properties.len(),
                "reference page written"
            );
        }

        Ok(BuildOutput {
            markdown,
            document,
            output_file: self.output_file,
            diagnostics: collector.take_diagnostics().into_diagnostics(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FailurePolicy;
    use crate::test::{mock_class, mock_method, mock_slicer_class};
    use tempfile::TempDir;

    #[test]
    fn test_build_in_memory() {
        let output = RefDocBuilder::new(mock_class("T").member(mock_method("run", "(self)")))
            .companion("Companion.")
            .build()
            .unwrap();

        assert_eq!(output.method_count(), 1);
        assert_eq!(output.property_count(), 0);
        assert!(output.output_file.is_none());
        assert!(output.markdown.ends_with("Companion."));
    }

    #[test]
    fn test_build_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("reference.md");

        let output = RefDocBuilder::new(mock_slicer_class())
            .output_file(&path)
            .build()
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, output.markdown);
        assert!(written.starts_with("### The VolumeSlicer class"));
    }

    #[test]
    fn test_build_reads_files() {
        let dir = TempDir::new().unwrap();
        let table = dir.path().join("table.json");
        let config = dir.path().join("refdoc.toml");
        let companion = dir.path().join("companion.md");

        std::fs::write(&table, mock_slicer_class().to_json().unwrap()).unwrap();
        std::fs::write(&config, "title = \"## {name}\"\n").unwrap();
        std::fs::write(&companion, "Helper docs.").unwrap();

        let output = RefDocBuilder::from_json_file(&table)
            .unwrap()
            .config_file(&config)
            .companion_file(&companion)
            .build()
            .unwrap();

        assert!(output.markdown.starts_with("## VolumeSlicer\n\n"));
        assert!(output.markdown.ends_with("\n\nHelper docs."));
    }

    #[test]
    fn test_build_reports_diagnostics() {
        let output = RefDocBuilder::new(mock_slicer_class()).build().unwrap();
        // _subscribe is private, refresh is undocumented, nslices has no type
        assert_eq!(output.diagnostics.len(), 3);
    }

    #[test]
    fn test_build_propagates_policy_errors() {
        let class = refdoc_ir::ClassSymbol::new("T").with_constructor("(self)");
        let err = RefDocBuilder::new(class.clone()).build().unwrap_err();
        assert!(matches!(err, RefDocError::MissingClassDocumentation { .. }));

        let output = RefDocBuilder::new(class)
            .config(RefDocConfig::default().with_missing_class_doc(FailurePolicy::Warn))
            .build()
            .unwrap();
        assert_eq!(output.diagnostics.len(), 1);
    }

    #[test]
    fn test_output_path_is_directory() {
        let dir = TempDir::new().unwrap();
        let err = RefDocBuilder::new(mock_slicer_class())
            .output_file(dir.path())
            .build()
            .unwrap_err();
        assert!(matches!(err, RefDocError::Other(_)));
    }

    #[test]
    fn test_unregistered_class() {
        let err = RefDocBuilder::from_inventory("NoSuchClass").unwrap_err();
        assert!(matches!(err, RefDocError::ClassNotFound(name) if name == "NoSuchClass"));
    }

    #[test]
    fn test_missing_table_file() {
        let err = RefDocBuilder::from_json_file("/nonexistent/table.json").unwrap_err();
        assert!(matches!(err, RefDocError::Io(_)));
    }
}
