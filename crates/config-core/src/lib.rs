//! Uniform hierarchical configuration access
//!
//! This crate ties the tree model from `config-tree` to the drivers in
//! `config-backend`:
//!
//! - **[`ConfigurationInterface`]**: `get`, `set`, `get_recursive`,
//!   `get_recursive_map` and the current prefix, identical for every backend
//! - **[`Configuration`]**: the interface implemented over any
//!   [`config_backend::BackendDriver`]
//! - **[`ConfigurationFactory`]**: picks a backend from a URI such as
//!   `json:///etc/app/config.json`
//! - **[`Settings`]**: a TOML or JSON file naming the URI and prefix
//!
//! # Architecture
//!
//! ```text
//!              config-core
//!                   |
//!            config-backend
//!                   |
//!              config-tree
//! ```
//!
//! # Example
//!
//! ```
//! use config_backend::MemoryDriver;
//! use config_core::{Configuration, ConfigurationExt, ConfigurationInterface};
//!
//! let mut conf = Configuration::new(MemoryDriver::new());
//! conf.set_value("/equipment_1/serial", 33333)?;
//! conf.set_value("/equipment_1/enabled", true)?;
//!
//! conf.set_prefix("/equipment_1");
//! assert_eq!(conf.get_as::<i64>("serial")?, Some(33333));
//!
//! let tree = conf.get_recursive("/")?;
//! assert_eq!(tree.get::<bool>("enabled"), Some(true));
//! # Ok::<(), config_core::Error>(())
//! ```

pub mod configuration;
pub mod error;
pub mod factory;
pub mod interface;
pub mod prefix;
pub mod settings;
pub mod uri;

pub use configuration::Configuration;
pub use error::{Error, Result};
pub use factory::{ConfigurationFactory, Constructor, get_configuration};
pub use interface::{ConfigurationExt, ConfigurationInterface};
pub use prefix::PrefixResolver;
pub use settings::{BackendSettings, Settings};
pub use uri::{ConfigUri, Scheme};
