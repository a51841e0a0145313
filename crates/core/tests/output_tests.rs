use std::fs;
use std::path::Path;

use tempfile::tempdir;
use unmap_core::{destination_root, ensure_output_dir, write_source};

#[test]
fn creates_missing_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a/b/c");
    ensure_output_dir(&nested).expect("should create dirs");
    assert!(nested.exists() && nested.is_dir());
}

#[test]
fn ok_if_directory_exists() {
    let dir = tempdir().unwrap();
    ensure_output_dir(dir.path()).expect("existing dir should be ok");
}

#[test]
fn error_if_path_is_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("file.txt");
    fs::write(&file_path, "data").unwrap();
    let err = ensure_output_dir(&file_path).expect_err("should error when path is a file");
    assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
}

#[test]
fn preserve_mirrors_the_input_directory() {
    let out = Path::new("/out");
    let input = Path::new("/builds/site/js/app.js.map");
    assert_eq!(
        destination_root(out, input, true),
        Path::new("/out/builds/site/js")
    );
    assert_eq!(destination_root(out, input, false), Path::new("/out"));
}

#[tokio::test]
async fn writes_nested_sources_and_overwrites() {
    let dir = tempdir().unwrap();
    let dest = write_source(dir.path(), "src/app.js", "one").await.unwrap();
    assert_eq!(dest, dir.path().join("src/app.js"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "one");

    let again = write_source(dir.path(), "src/app.js", "two").await.unwrap();
    assert_eq!(again, dest);
    assert_eq!(fs::read_to_string(&dest).unwrap(), "two");
}

#[tokio::test]
async fn hostile_relative_paths_stay_inside_the_root() {
    let dir = tempdir().unwrap();
    let dest = write_source(dir.path(), "../outside.js", "x").await.unwrap();
    assert!(dest.starts_with(dir.path()));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "x");

    let dest = write_source(dir.path(), "/rooted.js", "y").await.unwrap();
    assert!(dest.starts_with(dir.path()));
}

#[tokio::test]
async fn unusable_path_gets_a_synthesized_name() {
    let dir = tempdir().unwrap();
    let dest = write_source(dir.path(), "..", "z").await.unwrap();
    assert_eq!(dest, dir.path().join("recovered-source"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "z");
}
