//! In-process backend
//!
//! Keeps typed leaves in an ordered map keyed by path. Keys enumerate in
//! sorted path order, the way key-value stores such as etcd return ranges.

use std::collections::BTreeMap;

use config_tree::{Error as TreeError, KeyPath, Leaf, Node, tree_to_key_values, wire};

use crate::driver::BackendDriver;
use crate::error::{Error, Result};

const BACKEND: &str = "memory";

/// Driver backed by an in-memory ordered map.
#[derive(Debug, Clone, Default)]
pub struct MemoryDriver {
    entries: BTreeMap<KeyPath, Leaf>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a driver with every leaf of `tree`.
    ///
    /// A leaf at the root of `tree` cannot be stored and is rejected.
    pub fn from_tree(tree: &Node) -> Result<Self> {
        Self::from_pairs(tree_to_key_values(tree))
    }

    /// Seed a driver from `(path, leaf)` pairs, applying the same checks as
    /// [`BackendDriver::set_leaf`].
    pub fn from_pairs<I, P, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<KeyPath>,
        L: Into<Leaf>,
    {
        let mut driver = Self::new();
        for (path, leaf) in pairs {
            driver.insert(path.into(), leaf.into())?;
        }
        Ok(driver)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, path: KeyPath, leaf: Leaf) -> Result<()> {
        if path.is_root() {
            return Err(Error::unsupported(BACKEND, "setting a value at the root"));
        }
        let mut ancestor = path.parent();
        while let Some(current) = ancestor {
            if self.entries.contains_key(&current) {
                return Err(TreeError::conflicting(
                    &path,
                    format!("a value is stored at {current}"),
                )
                .into());
            }
            ancestor = current.parent();
        }
        if self.descendants(&path).any(|(key, _)| key != &path) {
            return Err(TreeError::conflicting(&path, "path holds a subtree").into());
        }
        self.entries.insert(path, leaf);
        Ok(())
    }

    fn descendants<'a>(&'a self, path: &'a KeyPath) -> impl Iterator<Item = (&'a KeyPath, &'a Leaf)> {
        self.entries
            .range(path.clone()..)
            .take_while(move |(key, _)| key.starts_with(path))
    }
}

impl BackendDriver for MemoryDriver {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn raw_get(&self, path: &KeyPath) -> Result<Option<String>> {
        Ok(self.entries.get(path).map(wire::format))
    }

    fn raw_set(&mut self, path: &KeyPath, value: &str) -> Result<()> {
        self.insert(path.clone(), Leaf::String(value.to_string()))
    }

    fn raw_get_by_prefix(&self, path: &KeyPath) -> Result<Vec<(KeyPath, String)>> {
        Ok(self
            .descendants(path)
            .map(|(key, leaf)| (key.clone(), wire::format(leaf)))
            .collect())
    }

    fn get_leaf(&self, path: &KeyPath) -> Result<Option<Leaf>> {
        Ok(self.entries.get(path).cloned())
    }

    fn set_leaf(&mut self, path: &KeyPath, leaf: &Leaf) -> Result<()> {
        self.insert(path.clone(), leaf.clone())
    }

    fn get_leaves_by_prefix(&self, path: &KeyPath) -> Result<Vec<(KeyPath, Leaf)>> {
        Ok(self
            .descendants(path)
            .map(|(key, leaf)| (key.clone(), leaf.clone()))
            .collect())
    }
}
