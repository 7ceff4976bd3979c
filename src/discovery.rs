//! Lists candidate photos in the source directory.

use crate::constants::PHOTO_SUFFIX;
use crate::errors::AppError;
use anyhow::Result;
use log::{debug, warn};
use std::path::Path;

/// Returns the candidate filenames in `source_dir`, sorted.
///
/// Only regular files whose name ends with the exact `.jpg` suffix are
/// candidates; everything else is invisible to the sorter and stays where it
/// is. The list is sorted so that the collision numbering of a run is
/// reproducible regardless of the directory's on-disk order.
///
/// # Errors
/// Returns [`AppError::SourceDirUnreadable`] when the directory is missing or
/// cannot be listed. This is fatal for the run: a missing source must not
/// silently produce an empty report.
pub fn list_candidates(source_dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(source_dir).map_err(|e| AppError::SourceDirUnreadable {
        path: source_dir.display().to_string(),
        source: e,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AppError::SourceDirUnreadable {
            path: source_dir.display().to_string(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| AppError::SourceDirUnreadable {
            path: source_dir.display().to_string(),
            source: e,
        })?;
        if !file_type.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        match file_name.to_str() {
            Some(name) if name.ends_with(PHOTO_SUFFIX) => candidates.push(name.to_string()),
            Some(_) => {}
            None => {
                warn!(
                    "Skipping '{}': filename is not valid UTF-8",
                    file_name.to_string_lossy()
                );
            }
        }
    }

    candidates.sort();
    debug!(
        "Found {} candidate(s) in '{}'",
        candidates.len(),
        source_dir.display()
    );
    Ok(candidates)
}
