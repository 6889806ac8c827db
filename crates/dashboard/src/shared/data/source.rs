//! Data source abstraction for entity lists.
//!
//! The list service never owns data: a source is injected and asked to
//! load the full collection for one entity type.

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[async_trait]
pub trait EntitySource<T>: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    async fn load(&self) -> anyhow::Result<Vec<T>>;
}

/// In-memory source over a fixed collection
pub struct StaticSource<T> {
    records: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<T> EntitySource<T> for StaticSource<T>
where
    T: Clone + Send + Sync,
{
    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }

    async fn load(&self) -> anyhow::Result<Vec<T>> {
        Ok(self.records.clone())
    }
}

/// Source reading a JSON array from a file on every load
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl<T> EntitySource<T> for JsonFileSource
where
    T: DeserializeOwned + Send + 'static,
{
    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }

    async fn load(&self) -> anyhow::Result<Vec<T>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("cannot read fixtures {}", self.path.display()))?;
        let records: Vec<T> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid fixtures in {}", self.path.display()))?;
        Ok(records)
    }
}
