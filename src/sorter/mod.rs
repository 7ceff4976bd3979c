//! The sorting pass: classify each candidate, relocate it, tally the result.

use crate::classify::{classify, Classification};
use crate::config::Config;
use crate::constants::TODO_DIR;
use crate::core_types::SortOutcome;
use crate::errors::io_error_with_path;
use anyhow::Result;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

mod collision;
pub use collision::next_available_path;

/// Files each candidate into the archive tree and tallies the result.
///
/// Candidates are processed in the given order, which fixes the collision
/// numbering. Per candidate:
/// - a name carrying the TODO marker moves into `TODO/`, with no tally;
/// - a name matching the `<code>-<dish>.jpg` convention moves into
///   `<archive root>/<location>/<dish>/` and increments the summary;
/// - anything else stays in the source directory and is counted as skipped.
///
/// Every processed photo ends up in exactly one of the dish folders or the
/// TODO folder, under a collision-free name.
///
/// # Errors
/// A failed mkdir or rename aborts the run unless `config.keep_going` is set,
/// in which case it is logged and the photo is counted as failed.
pub fn sort_photos(files: &[String], config: &Config) -> Result<SortOutcome> {
    let mut outcome = SortOutcome::default();

    for file_name in files {
        let source = config.source_dir.join(file_name);
        match classify(file_name) {
            Classification::Todo => {
                let dest_dir = config.archive_root.join(TODO_DIR);
                match file_into(&source, &dest_dir, file_name, config) {
                    Ok(()) => outcome.todo += 1,
                    Err(e) => handle_move_error(e, file_name, config, &mut outcome)?,
                }
            }
            Classification::Dish(name) => {
                let location = config.mapping.resolve(&name.location_code);
                let dest_dir = config.archive_root.join(location).join(&name.dish);
                match file_into(&source, &dest_dir, file_name, config) {
                    Ok(()) => {
                        outcome.summary.record(location, &name.dish);
                        outcome.filed += 1;
                    }
                    Err(e) => handle_move_error(e, file_name, config, &mut outcome)?,
                }
            }
            Classification::Unrecognized => {
                warn!("Skipping '{file_name}': name does not follow the archive convention");
                outcome.skipped.push(file_name.clone());
            }
        }
    }

    info!(
        "Filed {} photo(s), {} to {}, {} skipped, {} failed",
        outcome.filed,
        outcome.todo,
        TODO_DIR,
        outcome.skipped.len(),
        outcome.failed.len()
    );
    Ok(outcome)
}

/// Moves `source` into `dest_dir` under a collision-free name, creating the
/// directory first. A dry run only logs the move.
fn file_into(source: &Path, dest_dir: &Path, file_name: &str, config: &Config) -> Result<()> {
    if config.dry_run {
        let dest = next_available_path(dest_dir, file_name);
        info!("Would move '{}' -> '{}'", source.display(), dest.display());
        return Ok(());
    }
    fs::create_dir_all(dest_dir).map_err(|e| io_error_with_path(e, dest_dir))?;
    let dest = next_available_path(dest_dir, file_name);
    fs::rename(source, &dest).map_err(|e| io_error_with_path(e, source))?;
    debug!("Moved '{}' -> '{}'", source.display(), dest.display());
    Ok(())
}

fn handle_move_error(
    error: anyhow::Error,
    file_name: &str,
    config: &Config,
    outcome: &mut SortOutcome,
) -> Result<()> {
    if config.keep_going {
        warn!("Leaving '{file_name}' in place: {error:#}");
        outcome.failed.push(file_name.to_string());
        Ok(())
    } else {
        Err(error)
    }
}
