//! Static HTML gallery generation (requires the `gallery` feature).
//!
//! Walks an archive tree laid out as `campus/dining hall/dish/photo`, groups
//! the photos three levels deep and substitutes the result into the embedded
//! page template. The generated page is fully self-contained: styling and the
//! lightbox viewer ship inside the single output file, so it can be dropped
//! next to the photo tree on any static file server.

use crate::errors::{io_error_with_path, AppError};
use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

mod render;
mod scan;

pub use render::render_page;
pub use scan::{scan_photos, PhotoEntry};

/// Settings for one gallery build.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Root of the archive tree to scan. Image `src` attributes in the page
    /// are relative to this path's parent, so the page belongs next to it.
    pub photos_dir: PathBuf,
    /// File the page is written to.
    pub output_file: PathBuf,
    /// Page title.
    pub title: String,
}

/// Counts reported after a gallery build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryStats {
    /// Photos placed on the page.
    pub photos: usize,
    /// Distinct campuses (top-level directories with photos).
    pub campuses: usize,
    /// Distinct dining halls across all campuses.
    pub dining_halls: usize,
}

/// Scans the archive tree and writes the gallery page.
///
/// # Errors
/// Returns [`AppError::PhotosDirMissing`] when the archive root does not
/// exist, and I/O errors from the walk or the final write.
pub fn generate(config: &GalleryConfig) -> Result<GalleryStats> {
    if !config.photos_dir.is_dir() {
        return Err(AppError::PhotosDirMissing {
            path: config.photos_dir.display().to_string(),
        }
        .into());
    }

    let photos = scan_photos(&config.photos_dir)?;
    debug!(
        "Found {} photo(s) under '{}'",
        photos.len(),
        config.photos_dir.display()
    );

    let src_prefix = config.photos_dir.to_string_lossy().replace('\\', "/");
    let (page, stats) = render_page(&photos, &config.title, &src_prefix);

    fs::write(&config.output_file, page).map_err(|e| io_error_with_path(e, &config.output_file))?;
    info!(
        "Gallery written to '{}': {} photo(s), {} campus(es), {} dining hall(s)",
        config.output_file.display(),
        stats.photos,
        stats.campuses,
        stats.dining_halls
    );
    Ok(stats)
}
