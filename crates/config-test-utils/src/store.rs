//! [`TestStore`] for file-backed configuration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fixtures;

/// A temporary directory holding backend files.
///
/// # Example
///
/// ```rust,no_run
/// use config_test_utils::TestStore;
///
/// let store = TestStore::new();
/// store.write_reference_json("config.json");
/// let uri = store.json_uri("config.json");
/// assert!(uri.starts_with("json:/"));
/// ```
pub struct TestStore {
    temp_dir: TempDir,
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStore {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the store.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_reference_json(&self, name: &str) -> PathBuf {
        self.write_file(name, fixtures::REFERENCE_JSON)
    }

    pub fn write_reference_ini(&self, name: &str) -> PathBuf {
        self.write_file(name, fixtures::REFERENCE_INI)
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.path(name))
            .unwrap_or_else(|_| panic!("Could not read file: {}", self.path(name).display()))
    }

    /// `json:` URI for `name`, written as `json:/` followed by the absolute
    /// path so the location reads `//abs/path`.
    pub fn json_uri(&self, name: &str) -> String {
        format!("json:/{}", self.path(name).display())
    }

    /// `file:` URI for `name`.
    pub fn file_uri(&self, name: &str) -> String {
        format!("file:{}", self.path(name).display())
    }

    /// Assert that the file `name` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, name: &str, content: &str) {
        let file_content = self.read_file(name);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            self.path(name).display(),
            content,
            file_content
        );
    }
}
