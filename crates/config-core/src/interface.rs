//! The uniform configuration interface

use config_tree::{Error as TreeError, KeyPath, KeyValueMap, Leaf, Node, Scalar};

use crate::Result;

/// Hierarchical access to one configuration store.
///
/// Every `path` argument is relative to the current prefix (see
/// [`crate::PrefixResolver`]). The prefix is the only state an instance
/// carries; everything else is fetched from the backend on each call.
pub trait ConfigurationInterface: Send + Sync {
    /// Name of the backend behind this instance.
    fn backend(&self) -> &'static str;

    /// Read the value stored exactly at `path`.
    ///
    /// A missing path is `Ok(None)`, as is a path that only has descendants.
    fn get(&self, path: &str) -> Result<Option<Leaf>>;

    /// Read the value stored exactly at `path`, failing with `NotFound` if
    /// there is none.
    fn get_required(&self, path: &str) -> Result<Leaf> {
        self.get(path)?.ok_or_else(|| {
            let full = self.prefix().join(&KeyPath::parse(path));
            TreeError::not_found(full).into()
        })
    }

    /// Store `value` at `path`.
    fn set(&mut self, path: &str, value: Leaf) -> Result<()>;

    /// Fetch everything at or below `path` as a tree rooted at `path`.
    ///
    /// A value stored exactly at `path` comes back as a leaf node; otherwise
    /// the descendants are assembled into a branch.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing is stored at or below `path`
    /// - `UnsupportedOperation` if the backend cannot enumerate by prefix
    fn get_recursive(&self, path: &str) -> Result<Node>;

    /// Fetch everything at or below `path` as flat `path -> text` pairs.
    ///
    /// Keys are relative to the current prefix, not to `path`, so each can be
    /// handed back to [`get`](Self::get) unchanged. Values use the wire form.
    fn get_recursive_map(&self, path: &str) -> Result<KeyValueMap>;

    /// Make `path` the prefix for every later call.
    fn set_prefix(&mut self, path: &str);

    fn prefix(&self) -> &KeyPath;
}

/// Typed conveniences available on every [`ConfigurationInterface`].
///
/// Text values from string-only backends are decoded through
/// [`config_tree::wire`], so `get_as::<bool>` reads `"1"` as `true` whether
/// the store kept a boolean or a string.
pub trait ConfigurationExt: ConfigurationInterface {
    /// Read the value at `path` as `T`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if a value exists but is not a `T`.
    fn get_as<T: Scalar>(&self, path: &str) -> Result<Option<T>> {
        match self.get(path)? {
            Some(leaf) => decode(self.prefix(), path, &leaf).map(Some),
            None => Ok(None),
        }
    }

    fn get_required_as<T: Scalar>(&self, path: &str) -> Result<T> {
        let leaf = self.get_required(path)?;
        decode(self.prefix(), path, &leaf)
    }

    /// Read the value at `path` as `T`, or `default` if nothing is there.
    fn get_or<T: Scalar>(&self, path: &str, default: T) -> Result<T> {
        Ok(self.get_as(path)?.unwrap_or(default))
    }

    fn set_value(&mut self, path: &str, value: impl Into<Leaf>) -> Result<()> {
        self.set(path, value.into())
    }

    /// Set the prefix and hand the instance back for chaining.
    fn scoped(&mut self, prefix: &str) -> &mut Self {
        self.set_prefix(prefix);
        self
    }
}

impl<C: ConfigurationInterface + ?Sized> ConfigurationExt for C {}

fn decode<T: Scalar>(prefix: &KeyPath, path: &str, leaf: &Leaf) -> Result<T> {
    T::from_leaf(leaf)
        .or_else(|| leaf.as_str().and_then(T::from_wire))
        .ok_or_else(|| {
            let full = prefix.join(&KeyPath::parse(path));
            TreeError::type_mismatch(full, T::TYPE_NAME, leaf.kind()).into()
        })
}
