// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn photosort_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("photosort"))
}

// Creates the default source directory inside `root` and fills it with
// placeholder photos.
#[allow(dead_code)]
pub fn seed_source(root: &Path, names: &[&str]) {
    let source = root.join("Uncategorized");
    fs::create_dir_all(&source).unwrap();
    for name in names {
        fs::write(source.join(name), "jpeg bytes").unwrap();
    }
}
