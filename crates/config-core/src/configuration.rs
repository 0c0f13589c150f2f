//! [`ConfigurationInterface`] over any [`BackendDriver`]

use config_backend::BackendDriver;
use config_tree::{Error as TreeError, KeyPath, KeyValueMap, Leaf, Node, key_values_to_tree, wire};

use crate::interface::ConfigurationInterface;
use crate::prefix::PrefixResolver;
use crate::Result;

/// A backend driver plus the current prefix.
///
/// Drivers only know absolute paths and flat listings; this type resolves
/// caller paths against the prefix and assembles listings into trees.
#[derive(Debug)]
pub struct Configuration<D> {
    driver: D,
    resolver: PrefixResolver,
}

impl<D: BackendDriver> Configuration<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            resolver: PrefixResolver::new(),
        }
    }

    /// Wrap `driver` with an initial prefix.
    pub fn with_prefix(driver: D, prefix: impl Into<KeyPath>) -> Self {
        Self {
            driver,
            resolver: PrefixResolver::with_prefix(prefix),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Erase the driver type.
    pub fn boxed(self) -> Box<dyn ConfigurationInterface>
    where
        D: 'static,
    {
        Box::new(self)
    }

    /// Resolve `path` and list every leaf at or below it.
    fn fetch(&self, path: &str) -> Result<(KeyPath, Vec<(KeyPath, Leaf)>)> {
        let resolved = self.resolver.resolve(path);
        let pairs = self.driver.get_leaves_by_prefix(&resolved)?;
        tracing::debug!(
            backend = self.driver.name(),
            path = %resolved,
            count = pairs.len(),
            "fetched keys by prefix"
        );
        Ok((resolved, pairs))
    }
}

impl<D: BackendDriver> ConfigurationInterface for Configuration<D> {
    fn backend(&self) -> &'static str {
        self.driver.name()
    }

    fn get(&self, path: &str) -> Result<Option<Leaf>> {
        let resolved = self.resolver.resolve(path);
        let leaf = self.driver.get_leaf(&resolved)?;
        tracing::debug!(
            backend = self.driver.name(),
            path = %resolved,
            found = leaf.is_some(),
            "get"
        );
        Ok(leaf)
    }

    fn get_required(&self, path: &str) -> Result<Leaf> {
        let resolved = self.resolver.resolve(path);
        self.driver
            .get_leaf(&resolved)?
            .ok_or_else(|| TreeError::not_found(&resolved).into())
    }

    fn set(&mut self, path: &str, value: Leaf) -> Result<()> {
        let resolved = self.resolver.resolve(path);
        self.driver.set_leaf(&resolved, &value)?;
        tracing::debug!(backend = self.driver.name(), path = %resolved, "set");
        Ok(())
    }

    fn get_recursive(&self, path: &str) -> Result<Node> {
        let (resolved, pairs) = self.fetch(path)?;
        if pairs.is_empty() {
            return Err(TreeError::not_found(&resolved).into());
        }
        let relative = pairs
            .into_iter()
            .filter_map(|(key, leaf)| key.strip_prefix(&resolved).map(|key| (key, leaf)));
        Ok(key_values_to_tree(relative)?)
    }

    fn get_recursive_map(&self, path: &str) -> Result<KeyValueMap> {
        let (_, pairs) = self.fetch(path)?;
        Ok(pairs
            .into_iter()
            .filter_map(|(key, leaf)| {
                let key = self.resolver.relativize(&key)?;
                Some((key.to_string(), wire::format(&leaf)))
            })
            .collect())
    }

    fn set_prefix(&mut self, path: &str) {
        self.resolver.set_prefix(path);
    }

    fn prefix(&self) -> &KeyPath {
        self.resolver.prefix()
    }
}
