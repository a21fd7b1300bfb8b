//! Catalog loading from a static document source.
//!
//! Loading is the single asynchronous boundary of the whole system: one
//! fetch, one parse, then the catalog is immutable for the session.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::info;

use super::types::{Catalog, CatalogDocument, CatalogError};
use crate::config::CatalogConfig;

/// A source the catalog document can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw JSON document.
    async fn fetch(&self) -> Result<String, CatalogError>;

    /// Human-readable description of the source for logging.
    fn describe(&self) -> String;
}

/// Catalog document on the local filesystem.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog document served over HTTP.
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout_secs: u32) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(timeout_secs)))
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Build the catalog source described by the configuration.
///
/// A configured URL takes precedence over the file path.
pub fn source_from_config(config: &CatalogConfig) -> Result<Box<dyn CatalogSource>, CatalogError> {
    match &config.url {
        Some(url) => Ok(Box::new(HttpCatalogSource::new(
            url.clone(),
            config.timeout_secs,
        )?)),
        None => Ok(Box::new(FileCatalogSource::new(config.path.clone()))),
    }
}

/// Fetch and parse the catalog document from a source.
///
/// Per-language content is not validated here: recipes with missing
/// translations degrade to German at lookup time instead of failing the
/// load. Only structural defects (unparsable JSON, a recipe without an
/// id) are errors.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog, CatalogError> {
    let raw = source.fetch().await?;
    let document: CatalogDocument =
        serde_json::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

    for (idx, recipe) in document.recipes.iter().enumerate() {
        if recipe.id.is_empty() {
            return Err(CatalogError::Invalid(format!(
                "recipe at index {} has an empty id",
                idx
            )));
        }
    }

    let fingerprint = format!("{:x}", Sha256::digest(raw.as_bytes()));
    info!(
        source = %source.describe(),
        recipes = document.recipes.len(),
        fingerprint = %&fingerprint[..16],
        "Catalog loaded"
    );

    Ok(Catalog::new(document.recipes, fingerprint))
}
