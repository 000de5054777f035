//! Diagnostics contract

use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;

/// Introspects the host the engine runs on.
#[async_trait]
pub trait DiagnosticApi: Send + Sync {
    async fn physical_cores(&self) -> Result<i64>;

    async fn logical_cores(&self) -> Result<i64>;

    /// Release the client. Must be called by the owner when finished.
    async fn destroy(&self) -> Result<()>;

    fn as_any(&self) -> &dyn Any;
}
