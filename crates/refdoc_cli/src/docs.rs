//! Reference page command for the refdoc CLI
//!
//! Renders one class as a Markdown reference page, either from a JSON
//! metadata table or from the classes registered in this binary.

use anyhow::{bail, Context, Result};
use refdoc::{RefDocBuilder, RefDocConfig};
use refdoc_ir::{ClassRegistry, ClassSymbol};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::volume_slicer::SLICER_COMPANION_DOC;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "refdoc.toml";

/// Companion texts for the classes built into this binary
const BUILTIN_COMPANIONS: &[(&str, &str)] = &[("VolumeSlicer", SLICER_COMPANION_DOC)];

/// Run the command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    let cmd = DocsCommand::parse(args)?;

    if cmd.help {
        usage();
        return Ok(());
    }

    if cmd.list {
        for name in list_classes(&cmd)? {
            println!("{}", name);
        }
        return Ok(());
    }

    let markdown = generate(&cmd)?;
    if cmd.output.is_none() {
        println!("{}", markdown);
    }

    Ok(())
}

/// Reference command configuration
#[derive(Debug, Default, PartialEq)]
struct DocsCommand {
    /// Class to document
    class: Option<String>,
    /// JSON metadata table to document instead of a registered class
    table: Option<PathBuf>,
    /// File appended verbatim after the member blocks
    companion: Option<PathBuf>,
    /// TOML configuration file
    config: Option<PathBuf>,
    /// Where to write the page; stdout when absent
    output: Option<PathBuf>,
    /// List the available classes instead of rendering
    list: bool,
    /// Print usage
    help: bool,
}

impl DocsCommand {
    fn parse(args: &[String]) -> Result<Self> {
        let mut cmd = DocsCommand::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--class" | "-c" => {
                    cmd.class = Some(flag_value(args, i, "a class name")?.to_string());
                    i += 2;
                }
                "--table" | "-t" => {
                    cmd.table = Some(PathBuf::from(flag_value(args, i, "a JSON file")?));
                    i += 2;
                }
                "--companion" => {
                    cmd.companion = Some(PathBuf::from(flag_value(args, i, "a file")?));
                    i += 2;
                }
                "--config" => {
                    cmd.config = Some(PathBuf::from(flag_value(args, i, "a TOML file")?));
                    i += 2;
                }
                "--output" | "-o" => {
                    cmd.output = Some(PathBuf::from(flag_value(args, i, "a file")?));
                    i += 2;
                }
                "--list" => {
                    cmd.list = true;
                    i += 1;
                }
                "--help" | "-h" => {
                    cmd.help = true;
                    i += 1;
                }
                _ => {
                    bail!("Unknown argument: {}", args[i]);
                }
            }
        }

        Ok(cmd)
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, what: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(value) if !value.starts_with('-') => Ok(value.as_str()),
        _ => bail!("{} requires {}", args[i], what),
    }
}

fn list_classes(cmd: &DocsCommand) -> Result<Vec<String>> {
    match &cmd.table {
        Some(path) => Ok(vec![load_table(path)?.name]),
        None => Ok(ClassRegistry::from_inventory()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()),
    }
}

fn load_table(path: &Path) -> Result<ClassSymbol> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read table {}", path.display()))?;
    ClassSymbol::from_json(&json)
        .with_context(|| format!("Failed to parse table {}", path.display()))
}

/// Pick the class to document: the table if given, otherwise `--class` or
/// the only registered class.
fn select_class(cmd: &DocsCommand) -> Result<ClassSymbol> {
    if let Some(path) = &cmd.table {
        let class = load_table(path)?;
        if let Some(name) = &cmd.class {
            if *name != class.name {
                bail!("Table {} describes {}, not {}", path.display(), class.name, name);
            }
        }
        return Ok(class);
    }

    let registry = ClassRegistry::from_inventory();
    match &cmd.class {
        Some(name) => match registry.find(name) {
            Some(class) => Ok(class.clone()),
            None => bail!(
                "Unknown class: {} (available: {})",
                name,
                registry.names().join(", ")
            ),
        },
        None => match registry.classes() {
            [class] => Ok(class.clone()),
            [] => bail!("No classes registered; pass --table"),
            _ => bail!(
                "Several classes registered, pick one with --class: {}",
                registry.names().join(", ")
            ),
        },
    }
}

fn resolve_config(cmd: &DocsCommand) -> Result<RefDocConfig> {
    let path = match &cmd.config {
        Some(path) => path.clone(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(RefDocConfig::default());
            }
            debug!(path = %default.display(), "using config from working directory");
            default
        }
    };
    RefDocConfig::from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

fn generate(cmd: &DocsCommand) -> Result<String> {
    let class = select_class(cmd)?;
    let config = resolve_config(cmd)?;

    let builtin_companion = if cmd.table.is_none() {
        BUILTIN_COMPANIONS
            .iter()
            .find(|(name, _)| *name == class.name)
            .map(|(_, text)| *text)
    } else {
        None
    };

    let mut builder = RefDocBuilder::new(class).config(config);
    match (&cmd.companion, builtin_companion) {
        (Some(path), _) => builder = builder.companion_file(path),
        (None, Some(text)) => builder = builder.companion(text),
        (None, None) => {}
    }
    if let Some(path) = &cmd.output {
        builder = builder.output_file(path);
    }

    let output = builder.build().context("Failed to generate reference page")?;
    if !output.diagnostics.is_empty() {
        debug!(count = output.diagnostics.len(), "members skipped or annotated");
    }

    if let Some(path) = &output.output_file {
        eprintln!(
            "Wrote {} ({} methods, {} properties)",
            path.display(),
            output.method_count(),
            output.property_count()
        );
    }

    Ok(output.markdown)
}

/// Print usage information
pub fn usage() {
    eprintln!("refdoc [options]");
    eprintln!();
    eprintln!("Render a Markdown reference page for one class.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --class, -c <name>        Class to document (default: the only registered class)");
    eprintln!("  --table, -t <file.json>   Document a JSON metadata table");
    eprintln!("  --companion <file>        Append this file after the member blocks");
    eprintln!("  --config <file.toml>      Configuration (default: ./refdoc.toml if present)");
    eprintln!("  --output, -o <file>       Write the page here instead of stdout");
    eprintln!("  --list                    List the available classes");
    eprintln!("  --help, -h                Show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  REFDOC_LOG                Log filter (default: info)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  refdoc                                    Document the built-in VolumeSlicer");
    eprintln!("  refdoc -t slicer.json -o docs/api.md      Document a table into a file");
}
