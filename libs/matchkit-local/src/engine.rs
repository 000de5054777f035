//! In-process resolution engine

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::json;

use matchkit_api::{EngineApi, SdkSettings};

use crate::NativeGate;

struct StoredRecord {
    entity_id: i64,
    definition: serde_json::Value,
}

/// Resolution engine backed by an in-memory record repository.
///
/// Every record resolves to its own entity; real matching logic lives in
/// the native engine this crate stands in for.
pub struct LocalEngine {
    settings: SdkSettings,
    native: NativeGate,
    next_entity_id: AtomicI64,
    records: RwLock<HashMap<(String, String), StoredRecord>>,
    destroyed: AtomicBool,
}

impl LocalEngine {
    pub fn new(settings: SdkSettings) -> Self {
        Self {
            settings,
            native: NativeGate::new(),
            next_entity_id: AtomicI64::new(1),
            records: RwLock::new(HashMap::new()),
            destroyed: AtomicBool::new(false),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.destroyed.load(Ordering::Acquire) {
            bail!("engine client already destroyed");
        }
        self.native.ensure("engine", &self.settings);
        Ok(())
    }

    fn store(&self, data_source_code: &str, record_id: &str, definition: &str) -> Result<i64> {
        let definition: serde_json::Value = serde_json::from_str(definition)
            .with_context(|| format!("record {data_source_code}/{record_id} is not valid JSON"))?;
        let mut records = self.records.write();
        let key = (data_source_code.to_string(), record_id.to_string());
        // Replacing a record keeps its entity id stable.
        let entity_id = match records.get(&key) {
            Some(existing) => existing.entity_id,
            None => self.next_entity_id.fetch_add(1, Ordering::Relaxed),
        };
        records.insert(
            key,
            StoredRecord {
                entity_id,
                definition,
            },
        );
        Ok(entity_id)
    }
}

#[async_trait]
impl EngineApi for LocalEngine {
    async fn add_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        definition: &str,
        _load_id: &str,
    ) -> Result<()> {
        self.ensure_open()?;
        self.store(data_source_code, record_id, definition)?;
        Ok(())
    }

    async fn add_record_with_info(
        &self,
        data_source_code: &str,
        record_id: &str,
        definition: &str,
        _load_id: &str,
        _flags: i64,
    ) -> Result<String> {
        self.ensure_open()?;
        let entity_id = self.store(data_source_code, record_id, definition)?;
        Ok(json!({
            "DATA_SOURCE": data_source_code,
            "RECORD_ID": record_id,
            "AFFECTED_ENTITIES": [{ "ENTITY_ID": entity_id }],
        })
        .to_string())
    }

    async fn get_entity_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String> {
        self.ensure_open()?;
        let records = self.records.read();
        let key = (data_source_code.to_string(), record_id.to_string());
        let Some(record) = records.get(&key) else {
            bail!("unknown record: {data_source_code}/{record_id}");
        };
        Ok(json!({
            "ENTITY_ID": record.entity_id,
            "DATA_SOURCE": data_source_code,
            "RECORD_ID": record_id,
            "RECORD": record.definition,
        })
        .to_string())
    }

    async fn purge_repository(&self) -> Result<()> {
        self.ensure_open()?;
        self.records.write().clear();
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            bail!("engine client already destroyed");
        }
        self.records.write().clear();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LocalEngine {
        LocalEngine::new(SdkSettings::default())
    }

    #[tokio::test]
    async fn add_record_with_info_reports_affected_entity() {
        let engine = client();
        let with_info = engine
            .add_record_with_info("TEST", "1001", r#"{"NAME_LAST":"SEAMAN"}"#, "TEST", 0)
            .await
            .unwrap();
        let with_info: serde_json::Value = serde_json::from_str(&with_info).unwrap();
        assert_eq!(with_info["DATA_SOURCE"], "TEST");
        assert_eq!(with_info["AFFECTED_ENTITIES"][0]["ENTITY_ID"], 1);
    }

    #[tokio::test]
    async fn replaced_record_keeps_its_entity_id() {
        let engine = client();
        engine
            .add_record("TEST", "1001", r#"{"NAME_LAST":"SEAMAN"}"#, "TEST")
            .await
            .unwrap();
        engine
            .add_record("TEST", "1001", r#"{"NAME_LAST":"SEAMAN","GENDER":"F"}"#, "TEST")
            .await
            .unwrap();

        let entity = engine.get_entity_by_record_id("TEST", "1001").await.unwrap();
        let entity: serde_json::Value = serde_json::from_str(&entity).unwrap();
        assert_eq!(entity["ENTITY_ID"], 1);
        assert_eq!(entity["RECORD"]["GENDER"], "F");
    }

    #[tokio::test]
    async fn invalid_definition_is_rejected() {
        let engine = client();
        assert!(engine
            .add_record("TEST", "1001", "not json", "TEST")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn purge_empties_the_repository() {
        let engine = client();
        engine
            .add_record("TEST", "1001", "{}", "TEST")
            .await
            .unwrap();
        engine.purge_repository().await.unwrap();
        assert!(engine.get_entity_by_record_id("TEST", "1001").await.is_err());
    }
}
