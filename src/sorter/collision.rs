//! Collision-avoiding destination paths.

use std::path::{Path, PathBuf};

/// Returns the first non-existing path for `file_name` inside `dir`.
///
/// Starts at the natural destination and probes `name (1).jpg`,
/// `name (2).jpg`, ... in increasing order. The numbering restarts at 1 for
/// every file, so the result depends only on what is already on disk and the
/// processing order. An existing file is never overwritten.
pub fn next_available_path(dir: &Path, file_name: &str) -> PathBuf {
    let natural = dir.join(file_name);
    if !natural.exists() {
        return natural;
    }
    let (stem, extension) = split_file_name(file_name);
    let mut index: u32 = 1;
    loop {
        let candidate = dir.join(format!("{stem} ({index}){extension}"));
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}

/// Splits `photo.jpg` into `("photo", ".jpg")`. The extension keeps its dot
/// and is empty when there is none; a leading dot alone does not count as an
/// extension.
fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(index) if index > 0 => file_name.split_at(index),
        _ => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_free_path_is_returned_unchanged() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = next_available_path(temp.path(), "photo.jpg");
        assert_eq!(path, temp.path().join("photo.jpg"));
        Ok(())
    }

    #[test]
    fn test_collisions_number_upwards() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("photo.jpg"), "0")?;

        let first = next_available_path(temp.path(), "photo.jpg");
        assert_eq!(first, temp.path().join("photo (1).jpg"));

        fs::write(&first, "1")?;
        let second = next_available_path(temp.path(), "photo.jpg");
        assert_eq!(second, temp.path().join("photo (2).jpg"));
        Ok(())
    }

    #[test]
    fn test_gap_in_numbering_is_not_reused_out_of_order() -> anyhow::Result<()> {
        // Probing is sequential from 1, so the first free index wins even if
        // later ones are also free.
        let temp = tempdir()?;
        fs::write(temp.path().join("photo.jpg"), "0")?;
        fs::write(temp.path().join("photo (2).jpg"), "2")?;

        let path = next_available_path(temp.path(), "photo.jpg");
        assert_eq!(path, temp.path().join("photo (1).jpg"));
        Ok(())
    }

    #[test]
    fn test_split_keeps_last_extension_only() {
        assert_eq!(split_file_name("a.b.jpg"), ("a.b", ".jpg"));
        assert_eq!(split_file_name("photo.jpg"), ("photo", ".jpg"));
    }

    #[test]
    fn test_split_without_extension() {
        assert_eq!(split_file_name("photo"), ("photo", ""));
    }

    #[test]
    fn test_split_dotfile_has_no_extension() {
        assert_eq!(split_file_name(".hidden"), (".hidden", ""));
    }

    #[test]
    fn test_collision_without_extension() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("photo"), "0")?;

        let path = next_available_path(temp.path(), "photo");
        assert_eq!(path, temp.path().join("photo (1)"));
        Ok(())
    }
}
