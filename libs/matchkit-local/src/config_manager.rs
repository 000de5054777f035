//! In-process configuration registry

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::RwLock;

use matchkit_api::{ConfigId, ConfigManagerApi, SdkSettings};

use crate::NativeGate;

struct StoredConfig {
    definition: String,
    #[allow(dead_code)]
    comments: String,
}

#[derive(Default)]
struct Registry {
    configs: HashMap<ConfigId, StoredConfig>,
    default_id: Option<ConfigId>,
}

/// Configuration registry backed by an in-memory map.
pub struct LocalConfigManager {
    settings: SdkSettings,
    native: NativeGate,
    next_id: AtomicI64,
    registry: RwLock<Registry>,
    destroyed: AtomicBool,
}

impl LocalConfigManager {
    pub fn new(settings: SdkSettings) -> Self {
        Self {
            settings,
            native: NativeGate::new(),
            next_id: AtomicI64::new(1),
            registry: RwLock::new(Registry::default()),
            destroyed: AtomicBool::new(false),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.destroyed.load(Ordering::Acquire) {
            bail!("config manager client already destroyed");
        }
        self.native.ensure("config_manager", &self.settings);
        Ok(())
    }
}

#[async_trait]
impl ConfigManagerApi for LocalConfigManager {
    async fn add_config(&self, definition: &str, comments: &str) -> Result<ConfigId> {
        self.ensure_open()?;
        let config_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.write().configs.insert(
            config_id,
            StoredConfig {
                definition: definition.to_string(),
                comments: comments.to_string(),
            },
        );
        Ok(config_id)
    }

    async fn get_config(&self, config_id: ConfigId) -> Result<String> {
        self.ensure_open()?;
        let registry = self.registry.read();
        let Some(stored) = registry.configs.get(&config_id) else {
            bail!("unknown config id: {config_id}");
        };
        Ok(stored.definition.clone())
    }

    async fn get_default_config_id(&self) -> Result<ConfigId> {
        self.ensure_open()?;
        let Some(config_id) = self.registry.read().default_id else {
            bail!("no default configuration set");
        };
        Ok(config_id)
    }

    async fn set_default_config_id(&self, config_id: ConfigId) -> Result<()> {
        self.ensure_open()?;
        let mut registry = self.registry.write();
        if !registry.configs.contains_key(&config_id) {
            bail!("unknown config id: {config_id}");
        }
        registry.default_id = Some(config_id);
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            bail!("config manager client already destroyed");
        }
        *self.registry.write() = Registry::default();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LocalConfigManager {
        LocalConfigManager::new(SdkSettings::default())
    }

    #[tokio::test]
    async fn add_then_fetch_round_trips_definition() {
        let manager = client();
        let id = manager.add_config("{\"DATA_SOURCES\":[]}", "initial").await.unwrap();
        let definition = manager.get_config(id).await.unwrap();
        assert_eq!(definition, "{\"DATA_SOURCES\":[]}");
    }

    #[tokio::test]
    async fn default_id_requires_a_stored_config() {
        let manager = client();
        assert!(manager.get_default_config_id().await.is_err());
        assert!(manager.set_default_config_id(42).await.is_err());

        let id = manager.add_config("{}", "").await.unwrap();
        manager.set_default_config_id(id).await.unwrap();
        assert_eq!(manager.get_default_config_id().await.unwrap(), id);
    }

    #[tokio::test]
    async fn ids_are_unique_and_sequential() {
        let manager = client();
        let first = manager.add_config("{}", "").await.unwrap();
        let second = manager.add_config("{}", "").await.unwrap();
        assert_ne!(first, second);
    }
}
