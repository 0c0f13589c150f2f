//! Flat INI-style file backend
//!
//! ```text
//! # comment
//! name = value
//!
//! [section]
//! key = value
//! ```
//!
//! `/name` addresses a top-level key and `/section/key` a key inside a
//! section. The format cannot hold anything deeper, so writes below two
//! levels are rejected, and recursive retrieval is not supported at all.
//! Writing rewrites the whole file under the same sidecar lock the JSON
//! backend uses; comments are not preserved.

use std::path::{Path, PathBuf};

use config_tree::KeyPath;
use indexmap::IndexMap;

use crate::driver::BackendDriver;
use crate::error::{Error, Result};
use crate::io;

const BACKEND: &str = "file";

/// Driver for an INI-style `key = value` file.
#[derive(Debug, Clone)]
pub struct FlatFileDriver {
    path: PathBuf,
}

/// Parsed file contents, in file order.
#[derive(Debug, Default, PartialEq)]
struct FlatDocument {
    globals: IndexMap<String, String>,
    sections: IndexMap<String, IndexMap<String, String>>,
}

impl FlatFileDriver {
    /// Open an existing file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let driver = Self { path: path.into() };
        driver.load()?;
        tracing::debug!(path = %driver.path.display(), "opened flat file backend");
        Ok(driver)
    }

    /// Open a file, creating an empty one if it is missing.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let driver = Self { path: path.into() };
        io::with_exclusive_lock(&driver.path, || {
            if io::read_text_if_exists(&driver.path)?.is_none() {
                io::write_atomic(&driver.path, b"")?;
            }
            Ok(())
        })?;
        Ok(driver)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<FlatDocument> {
        let content = io::read_text(&self.path)?;
        Ok(FlatDocument::parse(&content, &self.path))
    }

    fn load_or_empty(&self) -> Result<FlatDocument> {
        Ok(io::read_text_if_exists(&self.path)?
            .map(|content| FlatDocument::parse(&content, &self.path))
            .unwrap_or_default())
    }
}

impl FlatDocument {
    fn parse(content: &str, origin: &Path) -> Self {
        let mut document = Self::default();
        let mut section: Option<String> = None;

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim().to_string();
                document.sections.entry(name.clone()).or_default();
                section = Some(name);
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!(
                    file = %origin.display(),
                    line = index + 1,
                    "skipping line without '='"
                );
                continue;
            };
            let (key, value) = (key.trim().to_string(), value.trim().to_string());
            match &section {
                Some(name) => {
                    document
                        .sections
                        .entry(name.clone())
                        .or_default()
                        .insert(key, value);
                }
                None => {
                    document.globals.insert(key, value);
                }
            }
        }
        document
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.globals {
            out.push_str(&format!("{key} = {value}\n"));
        }
        for (name, entries) in &self.sections {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{name}]\n"));
            for (key, value) in entries {
                out.push_str(&format!("{key} = {value}\n"));
            }
        }
        out
    }

    fn get(&self, path: &KeyPath) -> Option<&String> {
        match path.segments() {
            [key] => self.globals.get(key),
            [section, key] => self.sections.get(section)?.get(key),
            _ => None,
        }
    }

    fn set(&mut self, path: &KeyPath, value: &str) -> Result<()> {
        match path.segments() {
            [key] => {
                if self.sections.contains_key(key) {
                    return Err(config_tree::Error::conflicting(path, "path names a section").into());
                }
                self.globals.insert(key.clone(), value.to_string());
            }
            [section, key] => {
                if self.globals.contains_key(section) {
                    return Err(config_tree::Error::conflicting(
                        path,
                        format!("'{section}' holds a value"),
                    )
                    .into());
                }
                self.sections
                    .entry(section.clone())
                    .or_default()
                    .insert(key.clone(), value.to_string());
            }
            _ => {
                return Err(Error::unsupported(
                    BACKEND,
                    format!("writing {path}: only /key and /section/key can be stored"),
                ));
            }
        }
        Ok(())
    }
}

impl BackendDriver for FlatFileDriver {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn raw_get(&self, path: &KeyPath) -> Result<Option<String>> {
        Ok(self.load()?.get(path).cloned())
    }

    fn raw_set(&mut self, path: &KeyPath, value: &str) -> Result<()> {
        io::with_exclusive_lock(&self.path, || {
            let mut document = self.load_or_empty()?;
            document.set(path, value)?;
            io::write_atomic(&self.path, document.render().as_bytes())
        })?;
        tracing::debug!(%path, file = %self.path.display(), "set flat file value");
        Ok(())
    }

    fn raw_get_by_prefix(&self, _path: &KeyPath) -> Result<Vec<(KeyPath, String)>> {
        Err(Error::unsupported(BACKEND, "recursive retrieval"))
    }
}
