use std::fs;

use dashboard_engine::{ensure_state_dir, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("state").join("dashboard");
    assert!(!nested.exists());

    ensure_state_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn rejects_a_file_where_the_dir_should_be() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let err = ensure_state_dir(&file_path).unwrap_err();
    assert!(matches!(err, PersistError::StateDir(_)));
}

#[test]
fn atomic_write_replaces_previous_content() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("location.ron", "(href: \"/a\")").unwrap();
    let second = writer.write("location.ron", "(href: \"/b\")").unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "(href: \"/b\")");
    let entries = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(entries, 1, "temp files must not be left behind");
}
