//! Mock catalog source for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::catalog::{CatalogError, CatalogSource};

/// Mock implementation of the [`CatalogSource`] trait.
///
/// Serves a configurable in-memory document, or simulates an
/// unavailable source.
pub struct MockCatalogSource {
    document: Mutex<Option<String>>,
    unavailable: Mutex<bool>,
}

impl MockCatalogSource {
    /// Create a source with no document configured.
    pub fn new() -> Self {
        Self {
            document: Mutex::new(None),
            unavailable: Mutex::new(false),
        }
    }

    /// Create a source that serves the given raw document.
    pub fn with_document(document: impl Into<String>) -> Self {
        let source = Self::new();
        source.set_document(document);
        source
    }

    /// Replace the served document.
    pub fn set_document(&self, document: impl Into<String>) {
        *self.document.lock().unwrap() = Some(document.into());
        *self.unavailable.lock().unwrap() = false;
    }

    /// Make every subsequent fetch fail.
    pub fn set_unavailable(&self) {
        *self.unavailable.lock().unwrap() = true;
    }
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        if *self.unavailable.lock().unwrap() {
            return Err(CatalogError::Unavailable("mock source offline".to_string()));
        }
        self.document
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| CatalogError::Unavailable("no document configured".to_string()))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
