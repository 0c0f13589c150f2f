//! Current-prefix handling

use config_tree::KeyPath;

/// Holds the current prefix and composes it with caller paths.
///
/// Every caller path is relative to the prefix. A leading `/` is only
/// syntax: with prefix `/equipment_1`, both `serial` and `/serial` resolve to
/// `/equipment_1/serial`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixResolver {
    prefix: KeyPath,
}

impl PrefixResolver {
    /// Start at the root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<KeyPath>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Replace the prefix. Whether anything exists there is not checked.
    pub fn set_prefix(&mut self, prefix: impl Into<KeyPath>) {
        self.prefix = prefix.into();
        tracing::trace!(prefix = %self.prefix, "prefix changed");
    }

    pub fn prefix(&self) -> &KeyPath {
        &self.prefix
    }

    /// Backend path for a caller path.
    pub fn resolve(&self, path: impl Into<KeyPath>) -> KeyPath {
        self.prefix.join(&path.into())
    }

    /// Caller path for a backend path, or `None` if it lies outside the
    /// prefix.
    pub fn relativize(&self, backend_path: &KeyPath) -> Option<KeyPath> {
        backend_path.strip_prefix(&self.prefix)
    }
}
