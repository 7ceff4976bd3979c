mod common; // Declare the common module

use assert_cmd::prelude::*;
use common::{photosort_cmd, seed_source};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_mapped_location_files_into_display_name() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    seed_source(temp.path(), &["JG1-tomato.jpg"]);

    photosort_cmd().current_dir(temp.path()).assert().success();

    assert!(temp
        .path()
        .join("教工餐厅一层/tomato/JG1-tomato.jpg")
        .exists());
    assert!(!temp.path().join("Uncategorized/JG1-tomato.jpg").exists());

    let summary = fs::read_to_string(temp.path().join("summary.txt"))?;
    assert_eq!(summary, "教工餐厅一层\n  tomato: 1\n\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_unmapped_code_uses_code_as_folder() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    seed_source(temp.path(), &["ZZZ-mystery dish.jpg"]);

    photosort_cmd().current_dir(temp.path()).assert().success();

    assert!(temp
        .path()
        .join("ZZZ/mystery dish/ZZZ-mystery dish.jpg")
        .exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_summary_uses_first_seen_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // Candidates are processed sorted by name: FW1-a, FW1-b, JG1-c.
    seed_source(temp.path(), &["JG1-c.jpg", "FW1-b.jpg", "FW1-a.jpg"]);

    photosort_cmd().current_dir(temp.path()).assert().success();

    let summary = fs::read_to_string(temp.path().join("summary.txt"))?;
    let expected = "风味餐厅一层\n  a: 1\n  b: 1\n\n教工餐厅一层\n  c: 1\n\n";
    assert_eq!(summary, expected);

    temp.close()?;
    Ok(())
}

#[test]
fn test_summary_to_stdout_with_dash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    seed_source(temp.path(), &["JG1-tomato.jpg"]);

    photosort_cmd()
        .current_dir(temp.path())
        .args(["--summary-file", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("教工餐厅一层"))
        .stdout(predicate::str::contains("  tomato: 1"));

    assert!(!temp.path().join("summary.txt").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_explicit_source_and_archive_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    fs::create_dir(&inbox)?;
    fs::write(inbox.join("WM-pizza.jpg"), "jpeg")?;
    let archive = temp.path().join("archive");
    fs::create_dir(&archive)?;

    photosort_cmd()
        .current_dir(temp.path())
        .arg("inbox")
        .args(["--archive-root", "archive"])
        .assert()
        .success();

    assert!(archive.join("外卖/pizza/WM-pizza.jpg").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_duplicate_annotation_kept_in_filename() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    seed_source(temp.path(), &["JG1-tomato (1).jpg"]);

    photosort_cmd().current_dir(temp.path()).assert().success();

    // The annotation marks a capture-source duplicate; the dish folder is
    // shared and the filename is preserved.
    assert!(temp
        .path()
        .join("教工餐厅一层/tomato/JG1-tomato (1).jpg")
        .exists());

    let summary = fs::read_to_string(temp.path().join("summary.txt"))?;
    assert_eq!(summary, "教工餐厅一层\n  tomato: 1\n\n");

    temp.close()?;
    Ok(())
}
