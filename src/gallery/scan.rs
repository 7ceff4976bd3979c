//! Stage 1 of a gallery build: find the photos.

use crate::constants::GALLERY_IMAGE_EXTENSIONS;
use anyhow::Result;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// One photo found in the archive tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoEntry {
    /// Path relative to the scanned root, with forward slashes.
    pub rel_path: String,
    /// Top-level directory: the campus.
    pub campus: String,
    /// Second-level directory: the dining hall.
    pub dining_hall: String,
    /// Third-level directory: the dish.
    pub dish: String,
    /// The photo's filename.
    pub file_name: String,
}

/// Walks `root` and returns every image nested at least campus/hall/dish
/// deep, in deterministic name order.
///
/// Image files are recognized by extension, case-insensitively. Files that
/// are not nested deeply enough have no place in the campus/hall/dish
/// grouping and are ignored.
pub fn scan_photos(root: &Path) -> Result<Vec<PhotoEntry>> {
    let mut photos = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_image(entry.path()) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue; // walked entries always live under root
        };
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if parts.len() < 4 {
            debug!(
                "Ignoring '{}': not nested campus/hall/dish deep",
                rel.display()
            );
            continue;
        }
        photos.push(PhotoEntry {
            rel_path: parts.join("/"),
            campus: parts[0].clone(),
            dining_hall: parts[1].clone(),
            dish: parts[2].clone(),
            file_name: parts[parts.len() - 1].clone(),
        });
    }
    Ok(photos)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| GALLERY_IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}
