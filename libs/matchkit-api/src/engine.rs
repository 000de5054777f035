//! Resolution engine contract

use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;

/// Ingests records into the engine repository and resolves entities.
///
/// Record definitions are JSON documents; the engine interprets them, the
/// SDK surface does not.
#[async_trait]
pub trait EngineApi: Send + Sync {
    /// Load a record into the repository.
    async fn add_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        definition: &str,
        load_id: &str,
    ) -> Result<()>;

    /// Load a record and return a JSON document of affected entities.
    async fn add_record_with_info(
        &self,
        data_source_code: &str,
        record_id: &str,
        definition: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String>;

    /// Resolve the entity a record belongs to, as a JSON document.
    async fn get_entity_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String>;

    /// Remove every record from the repository.
    async fn purge_repository(&self) -> Result<()>;

    /// Release the client. Must be called by the owner when finished.
    async fn destroy(&self) -> Result<()>;

    fn as_any(&self) -> &dyn Any;
}
