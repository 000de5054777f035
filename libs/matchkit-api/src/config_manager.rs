//! Configuration registry contract

use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;

use crate::types::ConfigId;

/// Persists configuration definitions and tracks which one is the default.
#[async_trait]
pub trait ConfigManagerApi: Send + Sync {
    /// Store a configuration definition and return its id.
    async fn add_config(&self, definition: &str, comments: &str) -> Result<ConfigId>;

    /// Fetch a stored configuration definition by id.
    async fn get_config(&self, config_id: ConfigId) -> Result<String>;

    /// Id of the configuration the engine boots with.
    async fn get_default_config_id(&self) -> Result<ConfigId>;

    /// Make a stored configuration the default.
    async fn set_default_config_id(&self, config_id: ConfigId) -> Result<()>;

    /// Release the client. Must be called by the owner when finished.
    async fn destroy(&self) -> Result<()>;

    fn as_any(&self) -> &dyn Any;
}
