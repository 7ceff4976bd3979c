//! `photosort` is a library and command-line tool for filing dining-hall food
//! photos into a per-location, per-dish archive tree.
//!
//! Photos arrive in a flat source directory (by default `Uncategorized/`),
//! named `<locationCode>-<dishName>[ (<n>)].jpg`. A run classifies each
//! candidate, relocates it and accumulates a per-location, per-dish tally
//! that is written as a human-readable report. Nothing is ever overwritten:
//! colliding destination names get a ` (1)`, ` (2)`, ... suffix. Names carrying
//! a `TODO` marker go to a triage folder instead, and names matching neither
//! convention are left in place (logged and counted, never an error).
//!
//! As a library, it provides a three-stage pipeline:
//! 1. **Discover**: list the candidate `.jpg` files in the source directory.
//! 2. **Sort**: classify each filename and move the file into the archive tree.
//! 3. **Report**: render the accumulated summary.
//!
//! With the `gallery` feature (on by default) the [`gallery`] module renders
//! a self-contained static HTML page with a lightbox viewer from an archive
//! tree laid out as `campus/dining hall/dish/photo`.
//!
//! # Example: Library Usage
//!
//! ```
//! use photosort::{discover, sort_photos, write_summary, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. A source directory with one conventionally named photo.
//! let temp = tempdir().unwrap();
//! let source = temp.path().join("Uncategorized");
//! fs::create_dir(&source).unwrap();
//! fs::write(source.join("JG1-西红柿炒鸡蛋.jpg"), b"jpeg bytes").unwrap();
//!
//! // 2. Create a Config programmatically using the builder.
//! let config = ConfigBuilder::new()
//!     .source_dir(&source)
//!     .archive_root(temp.path())
//!     .build()
//!     .unwrap();
//!
//! // 3. Execute the pipeline stage by stage.
//! let candidates = discover(&config).unwrap();
//! let outcome = sort_photos(&candidates, &config).unwrap();
//!
//! let mut report = Vec::new();
//! write_summary(&mut report, &outcome.summary).unwrap();
//!
//! assert_eq!(outcome.filed, 1);
//! assert!(temp.path().join("教工餐厅一层/西红柿炒鸡蛋").is_dir());
//! assert!(String::from_utf8(report).unwrap().starts_with("教工餐厅一层\n"));
//! ```

// Make modules public if they contain public types used in the API
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
#[cfg(feature = "gallery")]
pub mod gallery;
pub mod mapping;
pub mod output;
pub mod sorter;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, SummaryDestination};
pub use core_types::{SortOutcome, Summary};
pub use mapping::LocationMap;
pub use output::write_summary;
pub use sorter::sort_photos;

use anyhow::Result;
use std::io::Write;

/// Discovers candidate photos in the configured source directory.
///
/// This is the first stage of the pipeline. Only regular files ending in
/// `.jpg` are candidates, returned sorted by name so the collision numbering
/// of the subsequent sort is reproducible.
///
/// # Errors
/// Fails when the source directory is missing or unreadable; the run must
/// not degrade into an empty report.
pub fn discover(config: &Config) -> Result<Vec<String>> {
    discovery::list_candidates(&config.source_dir)
}

/// Executes the complete pipeline: discover, sort, report.
///
/// This is the primary entry point for running the tool's logic
/// programmatically in a way that mirrors the command-line execution. The
/// summary report is written to the configured destination; in dry-run mode
/// it goes to stdout instead, so the filesystem stays untouched.
///
/// An empty source directory is not an error: the report is regenerated
/// empty, which keeps a second run over an already-sorted archive idempotent.
///
/// # Errors
/// Propagates discovery, sorting, and report-writing failures.
pub fn run(config: &Config) -> Result<SortOutcome> {
    let candidates = discover(config)?;
    let outcome = sort_photos(&candidates, config)?;

    // A dry run must not create the report file either.
    let destination = if config.dry_run {
        SummaryDestination::Stdout
    } else {
        config.summary_destination.clone()
    };
    let mut writer = output::setup_summary_writer(&destination)?;
    write_summary(&mut writer, &outcome.summary)?;
    writer.flush()?;

    Ok(outcome)
}
