use tempfile::TempDir;

#[test]
fn $safeitemname$_works() {
    let dir = TempDir::new().unwrap();
    assert!(dir.path().exists());
}
