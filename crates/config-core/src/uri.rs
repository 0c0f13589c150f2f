//! Backend URIs
//!
//! A configuration URI is `scheme:location`. The scheme picks the backend;
//! the location is handed to the backend constructor untouched.
//!
//! ```text
//! json:///etc/app/config.json
//! file://home/me/some/local/file.ini
//! etcd://myetcdserver:4001/some/prefix
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{Error, Result};

/// Backend kinds a URI can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    /// INI-style flat file (no recursive retrieval)
    File,
    /// JSON document (no arrays)
    Json,
    EtcdV2,
    /// Also selected by plain `etcd`
    EtcdV3,
    Consul,
    MySql,
    /// In-process store
    Memory,
}

impl Scheme {
    pub const ALL: [Scheme; 7] = [
        Scheme::File,
        Scheme::Json,
        Scheme::EtcdV2,
        Scheme::EtcdV3,
        Scheme::Consul,
        Scheme::MySql,
        Scheme::Memory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::File => "file",
            Scheme::Json => "json",
            Scheme::EtcdV2 => "etcd-v2",
            Scheme::EtcdV3 => "etcd-v3",
            Scheme::Consul => "consul",
            Scheme::MySql => "mysql",
            Scheme::Memory => "memory",
        }
    }

    /// Whether the location is a filesystem path.
    pub fn is_file_based(&self) -> bool {
        matches!(self, Scheme::File | Scheme::Json)
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Scheme::File),
            "json" => Ok(Scheme::Json),
            "etcd" | "etcd-v3" => Ok(Scheme::EtcdV3),
            "etcd-v2" => Ok(Scheme::EtcdV2),
            "consul" => Ok(Scheme::Consul),
            "mysql" => Ok(Scheme::MySql),
            "memory" => Ok(Scheme::Memory),
            _ => Err(Error::UnknownScheme {
                scheme: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed configuration URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigUri {
    uri: String,
    scheme: Scheme,
    location: String,
}

impl ConfigUri {
    /// Split `uri` into scheme and location.
    ///
    /// # Errors
    ///
    /// - `InvalidUri` if there is no `:` or the scheme is empty
    /// - `UnknownScheme` if the scheme names no known backend
    pub fn parse(uri: &str) -> Result<Self> {
        let Some((scheme, location)) = uri.split_once(':') else {
            return Err(Error::invalid_uri(uri, "expected 'scheme:location'"));
        };
        if scheme.is_empty() {
            return Err(Error::invalid_uri(uri, "missing scheme"));
        }
        Ok(Self {
            uri: uri.to_string(),
            scheme: scheme.parse()?,
            location: location.to_string(),
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Everything after the first `:`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// The location as a filesystem path.
    ///
    /// `scheme://rest` names the absolute path `/rest`, so `file://home/f.ini`
    /// and `json:///tmp/x.json` are both absolute. `scheme:/abs` and
    /// `scheme:relative` are taken as written.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUri` if the location is empty.
    pub fn file_path(&self) -> Result<PathBuf> {
        let path = match self.location.strip_prefix("//") {
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            Some(rest) => format!("/{rest}"),
            None => self.location.clone(),
        };
        if path.is_empty() || path == "/" {
            return Err(Error::invalid_uri(&self.uri, "missing file path"));
        }
        Ok(PathBuf::from(path))
    }
}

impl FromStr for ConfigUri {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ConfigUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
