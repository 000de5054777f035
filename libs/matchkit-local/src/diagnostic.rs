//! In-process diagnostics

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;

use matchkit_api::{DiagnosticApi, SdkSettings};

use crate::NativeGate;

pub struct LocalDiagnostic {
    settings: SdkSettings,
    native: NativeGate,
    destroyed: AtomicBool,
}

impl LocalDiagnostic {
    pub fn new(settings: SdkSettings) -> Self {
        Self {
            settings,
            native: NativeGate::new(),
            destroyed: AtomicBool::new(false),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.destroyed.load(Ordering::Acquire) {
            bail!("diagnostic client already destroyed");
        }
        self.native.ensure("diagnostic", &self.settings);
        Ok(())
    }

    fn parallelism() -> Result<i64> {
        let cores = std::thread::available_parallelism()?;
        Ok(cores.get() as i64)
    }
}

#[async_trait]
impl DiagnosticApi for LocalDiagnostic {
    async fn physical_cores(&self) -> Result<i64> {
        self.ensure_open()?;
        // Hyperthread topology is not probed; report the scheduler's view.
        Self::parallelism()
    }

    async fn logical_cores(&self) -> Result<i64> {
        self.ensure_open()?;
        Self::parallelism()
    }

    async fn destroy(&self) -> Result<()> {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            bail!("diagnostic client already destroyed");
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
