//! Backend selection by URI scheme

use std::collections::HashMap;

use config_backend::{FlatFileDriver, JsonDriver, MemoryDriver};

use crate::configuration::Configuration;
use crate::interface::ConfigurationInterface;
use crate::settings::Settings;
use crate::uri::{ConfigUri, Scheme};
use crate::Result;

/// Builds a configuration instance for a parsed URI.
pub type Constructor =
    Box<dyn Fn(&ConfigUri) -> Result<Box<dyn ConfigurationInterface>> + Send + Sync>;

/// Registry of backend constructors keyed by scheme.
///
/// Only the file, JSON and in-memory backends ship with this crate. Network
/// backends (etcd, Consul, MySQL) are plugged in with
/// [`register`](Self::register).
pub struct ConfigurationFactory {
    constructors: HashMap<Scheme, Constructor>,
}

impl ConfigurationFactory {
    /// Create an empty factory.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create a factory with the built-in backends registered.
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();
        factory.register(Scheme::File, |uri| {
            Ok(Configuration::new(FlatFileDriver::open(uri.file_path()?)?).boxed())
        });
        factory.register(Scheme::Json, |uri| {
            Ok(Configuration::new(JsonDriver::open(uri.file_path()?)?).boxed())
        });
        factory.register(Scheme::Memory, |_| Ok(Configuration::new(MemoryDriver::new()).boxed()));
        factory
    }

    /// Register a constructor, replacing any previous one for `scheme`.
    pub fn register<F>(&mut self, scheme: Scheme, constructor: F)
    where
        F: Fn(&ConfigUri) -> Result<Box<dyn ConfigurationInterface>> + Send + Sync + 'static,
    {
        self.constructors.insert(scheme, Box::new(constructor));
    }

    pub fn contains(&self, scheme: Scheme) -> bool {
        self.constructors.contains_key(&scheme)
    }

    /// Registered schemes (sorted).
    pub fn schemes(&self) -> Vec<Scheme> {
        let mut schemes: Vec<_> = self.constructors.keys().copied().collect();
        schemes.sort();
        schemes
    }

    /// Build a configuration instance for `uri`.
    ///
    /// # Errors
    ///
    /// - `InvalidUri` / `UnknownScheme` if the URI cannot be parsed
    /// - `BackendUnavailable` if the scheme is known but no driver is
    ///   registered for it
    /// - whatever the backend constructor reports
    pub fn get_configuration(&self, uri: &str) -> Result<Box<dyn ConfigurationInterface>> {
        let uri = ConfigUri::parse(uri)?;
        let Some(constructor) = self.constructors.get(&uri.scheme()) else {
            return Err(config_backend::Error::unavailable(
                uri.scheme().as_str(),
                "no driver is registered for this scheme",
            )
            .into());
        };
        let configuration = constructor(&uri)?;
        tracing::debug!(scheme = %uri.scheme(), uri = %uri, "created configuration");
        Ok(configuration)
    }

    /// Build a configuration instance from settings and apply its prefix.
    pub fn from_settings(&self, settings: &Settings) -> Result<Box<dyn ConfigurationInterface>> {
        let mut configuration = self.get_configuration(&settings.backend.uri)?;
        if let Some(prefix) = &settings.backend.prefix {
            configuration.set_prefix(prefix);
        }
        Ok(configuration)
    }
}

impl Default for ConfigurationFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a configuration instance for `uri` with the built-in backends.
pub fn get_configuration(uri: &str) -> Result<Box<dyn ConfigurationInterface>> {
    ConfigurationFactory::with_builtins().get_configuration(uri)
}
