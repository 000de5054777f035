//! Configuration editor contract

use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;

use crate::types::ConfigHandle;

/// Edits an engine configuration document in memory.
///
/// Edits happen against a [`ConfigHandle`] obtained from [`create`](Self::create)
/// and become a JSON definition via [`save`](Self::save); persisting that
/// definition is the job of [`crate::ConfigManagerApi`].
#[async_trait]
pub trait ConfigApi: Send + Sync {
    /// Start a new in-memory configuration and return its handle.
    async fn create(&self) -> Result<ConfigHandle>;

    /// Register a data source code; returns a JSON document describing it.
    async fn add_data_source(&self, handle: ConfigHandle, code: &str) -> Result<String>;

    /// List the data sources registered on the handle as a JSON document.
    async fn list_data_sources(&self, handle: ConfigHandle) -> Result<String>;

    /// Render the configuration as a JSON definition.
    async fn save(&self, handle: ConfigHandle) -> Result<String>;

    /// Discard the in-memory configuration behind the handle.
    async fn close(&self, handle: ConfigHandle) -> Result<()>;

    /// Release the client. Must be called by the owner when finished.
    async fn destroy(&self) -> Result<()>;

    fn as_any(&self) -> &dyn Any;
}
