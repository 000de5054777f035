//! In-process product metadata

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::json;

use matchkit_api::{ProductApi, SdkSettings};

use crate::NativeGate;

pub struct LocalProduct {
    settings: SdkSettings,
    native: NativeGate,
    destroyed: AtomicBool,
}

impl LocalProduct {
    pub fn new(settings: SdkSettings) -> Self {
        Self {
            settings,
            native: NativeGate::new(),
            destroyed: AtomicBool::new(false),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.destroyed.load(Ordering::Acquire) {
            bail!("product client already destroyed");
        }
        self.native.ensure("product", &self.settings);
        Ok(())
    }
}

#[async_trait]
impl ProductApi for LocalProduct {
    async fn license(&self) -> Result<String> {
        self.ensure_open()?;
        Ok(json!({
            "licenseType": "EVAL",
            "billing": "MONTHLY",
            "recordLimit": 100_000,
        })
        .to_string())
    }

    async fn version(&self) -> Result<String> {
        self.ensure_open()?;
        Ok(json!({
            "PRODUCT_NAME": "matchkit",
            "VERSION": env!("CARGO_PKG_VERSION"),
        })
        .to_string())
    }

    async fn destroy(&self) -> Result<()> {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            bail!("product client already destroyed");
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn version_carries_the_crate_version() {
        let product = LocalProduct::new(SdkSettings::default());
        let version = product.version().await.unwrap();
        let version: serde_json::Value = serde_json::from_str(&version).unwrap();
        assert_eq!(version["VERSION"], env!("CARGO_PKG_VERSION"));
    }
}
