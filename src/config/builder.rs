use super::{Config, SummaryDestination};
use crate::cli::Cli;
use crate::constants;
use crate::mapping::LocationMap;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Builds a [`Config`] from CLI arguments or programmatic settings.
///
/// Unset fields fall back to the documented defaults: source
/// `Uncategorized/`, archive root `.`, summary file `summary.txt`, and the
/// built-in location table.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    source_dir: Option<PathBuf>,
    archive_root: Option<PathBuf>,
    summary_file: Option<String>,
    mapping_file: Option<PathBuf>,
    mapping: Option<LocationMap>,
    dry_run: bool,
    keep_going: bool,
}

impl ConfigBuilder {
    /// Creates a builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            source_dir: Some(PathBuf::from(cli.source_dir)),
            archive_root: Some(PathBuf::from(cli.archive_root)),
            summary_file: Some(cli.summary_file),
            mapping_file: cli.mapping.map(PathBuf::from),
            mapping: None,
            dry_run: cli.dry_run,
            keep_going: cli.keep_going,
        }
    }

    /// Sets the directory scanned for unsorted photos.
    pub fn source_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the root the archive tree is created under.
    pub fn archive_root(mut self, path: impl AsRef<Path>) -> Self {
        self.archive_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the summary destination: a file path, or `-` for stdout.
    pub fn summary_file(mut self, destination: impl Into<String>) -> Self {
        self.summary_file = Some(destination.into());
        self
    }

    /// Loads a replacement location table from this JSON file at build time.
    pub fn mapping_file(mut self, path: impl AsRef<Path>) -> Self {
        self.mapping_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Uses this location table directly, overriding any mapping file.
    pub fn mapping(mut self, mapping: LocationMap) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Enables or disables dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enables or disables per-file log-and-continue error handling.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Resolves defaults, loads the mapping file if one was given, and
    /// produces the final [`Config`].
    ///
    /// # Errors
    /// Returns an error when the mapping file cannot be read or parsed.
    pub fn build(self) -> Result<Config> {
        let mapping = match (self.mapping, self.mapping_file) {
            (Some(mapping), _) => mapping,
            (None, Some(path)) => LocationMap::from_json_file(&path)?,
            (None, None) => LocationMap::builtin(),
        };

        let summary_destination = match self.summary_file.as_deref() {
            Some("-") => SummaryDestination::Stdout,
            Some(path) => SummaryDestination::File(PathBuf::from(path)),
            None => SummaryDestination::File(PathBuf::from(constants::DEFAULT_SUMMARY_FILE)),
        };

        Ok(Config {
            source_dir: self
                .source_dir
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_SOURCE_DIR)),
            archive_root: self.archive_root.unwrap_or_else(|| PathBuf::from(".")),
            summary_destination,
            mapping,
            dry_run: self.dry_run,
            keep_going: self.keep_going,
        })
    }
}
