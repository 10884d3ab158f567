//! refdoc - Markdown reference pages for a single class
//!
//! # Environment Variables
//!
//! - `REFDOC_LOG` - Log level (default: "info")
//!
//! Logs go to stderr so that a page printed to stdout stays clean.

mod docs;
mod volume_slicer;

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("REFDOC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    docs::run(&args)
}
