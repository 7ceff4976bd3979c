mod common;

use assert_cmd::prelude::*;
use common::{photosort_cmd, seed_source};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_replacement_mapping_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    seed_source(temp.path(), &["X1-rice.jpg", "JG1-tomato.jpg"]);
    fs::write(
        temp.path().join("halls.json"),
        r#"{"X1": "West Canteen"}"#,
    )?;

    photosort_cmd()
        .current_dir(temp.path())
        .args(["--mapping", "halls.json"])
        .assert()
        .success();

    assert!(temp.path().join("West Canteen/rice/X1-rice.jpg").exists());
    // The file replaces the built-in table, so JG1 now passes through as-is.
    assert!(temp.path().join("JG1/tomato/JG1-tomato.jpg").exists());
    assert!(!temp.path().join("教工餐厅一层").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_invalid_mapping_file_aborts_before_moving() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    seed_source(temp.path(), &["JG1-tomato.jpg"]);
    fs::write(temp.path().join("halls.json"), "not json at all")?;

    photosort_cmd()
        .current_dir(temp.path())
        .args(["--mapping", "halls.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid location mapping"));

    // Nothing was moved.
    assert!(temp.path().join("Uncategorized/JG1-tomato.jpg").exists());

    temp.close()?;
    Ok(())
}
