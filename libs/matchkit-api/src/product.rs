//! Product metadata contract

use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;

/// Reports build and license metadata for the installed engine.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// License details as a JSON document.
    async fn license(&self) -> Result<String>;

    /// Version details as a JSON document.
    async fn version(&self) -> Result<String>;

    /// Release the client. Must be called by the owner when finished.
    async fn destroy(&self) -> Result<()>;

    fn as_any(&self) -> &dyn Any;
}
