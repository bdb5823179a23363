use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub fn testparams_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_testparams"))
}

#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[allow(dead_code)]
pub fn expected_output(name: &str) -> String {
    let path = fixture_path("expected").join(format!("{}.json", name));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
        .trim_end()
        .to_string()
}

/// Writes `content` to `base/rel`, creating parent directories
#[allow(dead_code)]
pub fn write_file(base: &Path, rel: &str, content: &str) -> PathBuf {
    let path = base.join(rel);
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
    fs::write(&path, content).expect("write fixture file");
    path
}
