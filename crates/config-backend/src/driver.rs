//! The backend driver contract

use config_tree::{KeyPath, Leaf, wire};

use crate::Result;

/// Raw access to one configuration store.
///
/// All paths are absolute in the store's own address space; prefix handling
/// happens before a driver is called. Values cross this boundary in their
/// wire form (see [`config_tree::wire`]).
///
/// Drivers must not cache: every call reflects the store as it is now.
pub trait BackendDriver: Send + Sync {
    /// Short backend name used in diagnostics (usually the URI scheme).
    fn name(&self) -> &'static str;

    /// Read the value stored exactly at `path`.
    ///
    /// Returns `Ok(None)` when nothing is stored there, including when
    /// `path` only has descendants.
    fn raw_get(&self, path: &KeyPath) -> Result<Option<String>>;

    /// Store `value` exactly at `path`.
    fn raw_set(&mut self, path: &KeyPath, value: &str) -> Result<()>;

    /// List every key at or below `path` with its value.
    ///
    /// Returned paths are absolute. An empty list means nothing is stored at
    /// or below `path`.
    fn raw_get_by_prefix(&self, path: &KeyPath) -> Result<Vec<(KeyPath, String)>>;

    /// Typed read. String-only stores return [`Leaf::String`].
    fn get_leaf(&self, path: &KeyPath) -> Result<Option<Leaf>> {
        Ok(self.raw_get(path)?.map(Leaf::String))
    }

    /// Typed write. String-only stores receive the wire form of `leaf`.
    fn set_leaf(&mut self, path: &KeyPath, leaf: &Leaf) -> Result<()> {
        self.raw_set(path, &wire::format(leaf))
    }

    /// Typed prefix listing. String-only stores return [`Leaf::String`] values.
    fn get_leaves_by_prefix(&self, path: &KeyPath) -> Result<Vec<(KeyPath, Leaf)>> {
        Ok(self
            .raw_get_by_prefix(path)?
            .into_iter()
            .map(|(key, value)| (key, Leaf::String(value)))
            .collect())
    }
}

impl<D: BackendDriver + ?Sized> BackendDriver for Box<D> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn raw_get(&self, path: &KeyPath) -> Result<Option<String>> {
        (**self).raw_get(path)
    }

    fn raw_set(&mut self, path: &KeyPath, value: &str) -> Result<()> {
        (**self).raw_set(path, value)
    }

    fn raw_get_by_prefix(&self, path: &KeyPath) -> Result<Vec<(KeyPath, String)>> {
        (**self).raw_get_by_prefix(path)
    }

    fn get_leaf(&self, path: &KeyPath) -> Result<Option<Leaf>> {
        (**self).get_leaf(path)
    }

    fn set_leaf(&mut self, path: &KeyPath, leaf: &Leaf) -> Result<()> {
        (**self).set_leaf(path, leaf)
    }

    fn get_leaves_by_prefix(&self, path: &KeyPath) -> Result<Vec<(KeyPath, Leaf)>> {
        (**self).get_leaves_by_prefix(path)
    }
}
