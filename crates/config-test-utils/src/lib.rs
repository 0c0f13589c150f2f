//! Shared test utilities for the configuration workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: the reference equipment document as JSON, tree and flat map
//! - [`store`]: [`TestStore`](store::TestStore), a temporary directory for file backends
//! - [`logging`]: opt-in tracing output for test runs

pub mod fixtures;
pub mod logging;
pub mod store;

pub use logging::init_tracing;
pub use store::TestStore;
