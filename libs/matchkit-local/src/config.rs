//! In-process configuration editor

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::json;

use matchkit_api::{ConfigApi, ConfigHandle, SdkSettings};

use crate::NativeGate;

// Data source ids start above the range reserved for built-in sources.
const FIRST_DATA_SOURCE_ID: i64 = 1000;

/// Configuration editor backed by in-memory draft documents.
pub struct LocalConfig {
    settings: SdkSettings,
    native: NativeGate,
    next_handle: AtomicU64,
    drafts: RwLock<HashMap<ConfigHandle, BTreeMap<String, i64>>>,
    destroyed: AtomicBool,
}

impl LocalConfig {
    pub fn new(settings: SdkSettings) -> Self {
        Self {
            settings,
            native: NativeGate::new(),
            next_handle: AtomicU64::new(1),
            drafts: RwLock::new(HashMap::new()),
            destroyed: AtomicBool::new(false),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.destroyed.load(Ordering::Acquire) {
            bail!("config client already destroyed");
        }
        self.native.ensure("config", &self.settings);
        Ok(())
    }

    fn render(sources: &BTreeMap<String, i64>) -> serde_json::Value {
        let entries: Vec<_> = sources
            .iter()
            .map(|(code, id)| json!({ "DSRC_CODE": code, "DSRC_ID": id }))
            .collect();
        json!({ "DATA_SOURCES": entries })
    }
}

#[async_trait]
impl ConfigApi for LocalConfig {
    async fn create(&self) -> Result<ConfigHandle> {
        self.ensure_open()?;
        let handle = ConfigHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        self.drafts.write().insert(handle, BTreeMap::new());
        Ok(handle)
    }

    async fn add_data_source(&self, handle: ConfigHandle, code: &str) -> Result<String> {
        self.ensure_open()?;
        let mut drafts = self.drafts.write();
        let Some(sources) = drafts.get_mut(&handle) else {
            bail!("unknown config handle: {handle}");
        };
        if sources.contains_key(code) {
            bail!("data source already registered: {code}");
        }
        let id = FIRST_DATA_SOURCE_ID + sources.len() as i64;
        sources.insert(code.to_string(), id);
        Ok(json!({ "DSRC_ID": id }).to_string())
    }

    async fn list_data_sources(&self, handle: ConfigHandle) -> Result<String> {
        self.ensure_open()?;
        let drafts = self.drafts.read();
        let Some(sources) = drafts.get(&handle) else {
            bail!("unknown config handle: {handle}");
        };
        Ok(Self::render(sources).to_string())
    }

    async fn save(&self, handle: ConfigHandle) -> Result<String> {
        self.ensure_open()?;
        let drafts = self.drafts.read();
        let Some(sources) = drafts.get(&handle) else {
            bail!("unknown config handle: {handle}");
        };
        Ok(Self::render(sources).to_string())
    }

    async fn close(&self, handle: ConfigHandle) -> Result<()> {
        self.ensure_open()?;
        if self.drafts.write().remove(&handle).is_none() {
            bail!("unknown config handle: {handle}");
        }
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            bail!("config client already destroyed");
        }
        self.drafts.write().clear();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
