// src/constants.rs

/// Default directory scanned for unsorted photos.
pub const DEFAULT_SOURCE_DIR: &str = "Uncategorized";

/// Default file the run summary is written to.
pub const DEFAULT_SUMMARY_FILE: &str = "summary.txt";

/// Marker substring that routes a photo to the triage folder, bypassing
/// classification.
pub const TODO_MARKER: &str = "TODO";

/// Name of the triage folder for marked photos.
pub const TODO_DIR: &str = "TODO";

/// Candidate files must carry this exact suffix. The match is case-sensitive,
/// like the archive's capture convention.
pub const PHOTO_SUFFIX: &str = ".jpg";

/// Default root of the archive tree the gallery generator scans.
#[cfg(feature = "gallery")]
pub const DEFAULT_PHOTOS_DIR: &str = "Photos";

/// Default output file for the generated gallery page.
#[cfg(feature = "gallery")]
pub const DEFAULT_GALLERY_FILE: &str = "index.html";

/// Default gallery page title.
#[cfg(feature = "gallery")]
pub const DEFAULT_GALLERY_TITLE: &str = "Campus Food Photo Archive";

/// Extensions (lowercase) the gallery generator treats as images.
#[cfg(feature = "gallery")]
pub const GALLERY_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
