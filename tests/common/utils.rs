use std::path::PathBuf;

/// Shape used across schema and CLI tests.
pub const APP_SHAPE: &str = r#"
root: app
shape:
  main: article
  footer: ~
fragments:
  article:
    header: header
    secondHeader: header
  header:
    text: ~
"#;

/// A unique path under the system temp dir for this test process.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("testid-tree-{}-{}", std::process::id(), name))
}

/// Write `content` to a fresh temp file and return its path.
pub fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, content).unwrap();
    path
}
