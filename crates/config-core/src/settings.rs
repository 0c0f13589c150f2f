//! Settings for choosing a backend
//!
//! ```toml
//! [backend]
//! uri = "json:///etc/app/config.json"
//! prefix = "/equipment_1"
//! ```

use std::path::Path;

use config_backend::io;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Backend URI, see [`crate::ConfigUri`]
    pub uri: String,
    /// Initial prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl Settings {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            backend: BackendSettings {
                uri: uri.into(),
                prefix: None,
            },
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.backend.prefix = Some(prefix.into());
        self
    }

    /// Load settings from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_text(path)?;
        let extension = extension_of(path);

        let settings = match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML",
                message: e.to_string(),
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON",
                message: e.to_string(),
            })?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.clone(),
                });
            }
        };
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to a file, choosing the format by extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let extension = extension_of(path);

        let content = match extension.as_str() {
            "toml" => toml::to_string_pretty(self).map_err(|e| Error::ConfigSerialize {
                path: path.to_path_buf(),
                format: "TOML",
                message: e.to_string(),
            })?,
            "json" => serde_json::to_string_pretty(self).map_err(|e| Error::ConfigSerialize {
                path: path.to_path_buf(),
                format: "JSON",
                message: e.to_string(),
            })?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.clone(),
                });
            }
        };

        Ok(io::write_atomic(path, content.as_bytes())?)
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase()
}
