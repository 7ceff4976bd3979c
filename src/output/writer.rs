// src/output/writer.rs

//! Sets up the writer for the configured summary destination.

use crate::config::SummaryDestination;
use crate::errors::io_error_with_path;
use anyhow::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Creates the appropriate writer for the summary destination.
///
/// # Errors
/// Returns an error if the report file cannot be created.
pub fn setup_summary_writer(destination: &SummaryDestination) -> Result<Box<dyn Write>> {
    Ok(match destination {
        SummaryDestination::Stdout => Box::new(io::stdout()),
        SummaryDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file)) // Use BufWriter for file I/O
        }
    })
}
