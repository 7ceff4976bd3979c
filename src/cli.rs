// src/cli.rs

use clap::Parser;
#[cfg(feature = "gallery")]
use clap::Subcommand;

use crate::constants;

/// Files dining-hall food photos into a per-location archive tree.
///
/// photosort reads `.jpg` files named `<locationCode>-<dishName>[ (<n>)].jpg`
/// from a flat source directory, resolves the location code through a lookup
/// table, and moves each photo into `<archive root>/<location>/<dish>/`.
/// Names carrying a TODO marker go to a `TODO/` triage folder instead, and a
/// per-location, per-dish tally is written as a text report. Colliding
/// destination names get a ` (1)`, ` (2)`, ... suffix; nothing is ever
/// overwritten.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory containing the unsorted .jpg photos.
    #[arg(default_value = constants::DEFAULT_SOURCE_DIR)]
    pub source_dir: String,

    /// Root directory the location/dish folders are created under.
    #[arg(short = 'a', long, value_name = "DIR", default_value = ".")]
    pub archive_root: String,

    /// Write the run summary to this file ('-' for stdout).
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        default_value = constants::DEFAULT_SUMMARY_FILE
    )]
    pub summary_file: String,

    /// JSON file of {"code": "display name"} pairs replacing the built-in
    /// location table.
    #[arg(short = 'M', long, value_name = "FILE")]
    pub mapping: Option<String>,

    /// Log each move that would happen without touching the filesystem.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Continue with the remaining photos when a single move fails.
    #[arg(short = 'k', long, action = clap::ArgAction::SetTrue)]
    pub keep_going: bool,
}

/// Subcommands beyond the default sorting run.
#[cfg(feature = "gallery")]
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a self-contained static HTML gallery page from an archive tree.
    Gallery {
        /// Root of the photo archive to scan (campus/dining hall/dish layout).
        #[arg(default_value = constants::DEFAULT_PHOTOS_DIR)]
        photos_dir: String,

        /// Output HTML file.
        #[arg(
            short = 'o',
            long,
            value_name = "FILE",
            default_value = constants::DEFAULT_GALLERY_FILE
        )]
        output: String,

        /// Page title.
        #[arg(short = 't', long, default_value = constants::DEFAULT_GALLERY_TITLE)]
        title: String,
    },
}
