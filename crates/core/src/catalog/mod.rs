//! Recipe catalog - the static, multilingual recipe collection.
//!
//! The catalog is loaded once from a JSON document (file or HTTP) and is
//! immutable afterwards. Every per-language field carries a mandatory
//! German entry; other languages are optional and fall back to German.

mod loader;
mod types;

pub use loader::{
    load_catalog, source_from_config, CatalogSource, FileCatalogSource, HttpCatalogSource,
};
pub use types::*;
