//! Backend drivers for Configuration Store
//!
//! A backend driver knows how to talk to one kind of store. It only has to
//! provide three primitives on string values:
//!
//! - `raw_get`: read one key
//! - `raw_set`: write one key
//! - `raw_get_by_prefix`: list every key at or below a path
//!
//! Tree assembly, typed reads and prefix handling live above this layer in
//! `config-core`. Drivers that keep native value types (JSON, in-memory)
//! additionally override the typed hooks on [`BackendDriver`].
//!
//! Built-in drivers:
//!
//! - [`JsonDriver`]: a JSON document on disk (no arrays)
//! - [`FlatFileDriver`]: an INI-style `key = value` file (no recursive reads)
//! - [`MemoryDriver`]: an in-process ordered map, mainly for tests and embedding

pub mod driver;
pub mod error;
pub mod file;
pub mod io;
pub mod json;
pub mod memory;

pub use driver::BackendDriver;
pub use error::{Error, Result};
pub use file::FlatFileDriver;
pub use json::JsonDriver;
pub use memory::MemoryDriver;
