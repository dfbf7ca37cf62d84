use std::path::{Path, PathBuf};

/// The configuration document shipped at the repository root
pub fn shipped_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config.yml")
}

#[allow(dead_code)]
pub fn shipped_text() -> String {
    std::fs::read_to_string(shipped_config()).expect("config.yml should be readable")
}

/// Write `contents` to `name` inside `dir` and return the file path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}
