//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the
//! CLI, making them available to the rest of the application in a structured
//! and type-safe manner.

use crate::mapping::LocationMap;
use std::path::{Path, PathBuf};

pub use builder::ConfigBuilder;
mod builder;

/// Represents the destination for the summary report.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SummaryDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

/// Settings for one sorting run.
///
/// The source and archive roots are explicit so nothing in the pipeline
/// depends on the process working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for unsorted photos.
    pub source_dir: PathBuf,
    /// Root under which the location/dish folders (and `TODO/`) are created.
    pub archive_root: PathBuf,
    /// Where the summary report is written.
    pub summary_destination: SummaryDestination,
    /// The location-code lookup table used to resolve display names.
    pub mapping: LocationMap,
    /// Log each planned move without touching the filesystem. The summary is
    /// still accumulated and printed to stdout.
    pub dry_run: bool,
    /// Log-and-continue on per-file I/O errors instead of aborting the run.
    pub keep_going: bool,
}

impl Config {
    /// Creates a `Config` rooted at the given directories, for tests.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test(source_dir: &Path, archive_root: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            archive_root: archive_root.to_path_buf(),
            summary_destination: SummaryDestination::Stdout,
            mapping: LocationMap::builtin(),
            dry_run: false,
            keep_going: false,
        }
    }
}
