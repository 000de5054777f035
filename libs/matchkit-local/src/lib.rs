//! In-process backend for the matchkit capability traits.
//!
//! These clients keep all engine state in process memory. Native resource
//! bring-up is deferred until the first real operation on a client, and
//! happens at most once per client regardless of concurrency.

use std::sync::OnceLock;

use matchkit_api::SdkSettings;

mod config;
mod config_manager;
mod diagnostic;
mod engine;
mod product;

pub use config::LocalConfig;
pub use config_manager::LocalConfigManager;
pub use diagnostic::LocalDiagnostic;
pub use engine::LocalEngine;
pub use product::LocalProduct;

/// One-shot native bring-up gate shared by all local clients.
pub(crate) struct NativeGate(OnceLock<()>);

impl NativeGate {
    pub(crate) fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Runs native initialization the first time any operation touches
    /// the client. Later calls are no-ops.
    pub(crate) fn ensure(&self, component: &str, settings: &SdkSettings) {
        self.0.get_or_init(|| {
            tracing::debug!(
                component,
                module_name = %settings.module_name,
                verbose_logging = settings.verbose_logging,
                "initializing native engine resources"
            );
        });
    }
}
