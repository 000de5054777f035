//! The factory façade

use std::sync::Arc;

use anyhow::Result;

use matchkit_api::{
    ConfigApi, ConfigManagerApi, DiagnosticApi, EngineApi, ProductApi, SdkSettings,
};
use matchkit_grpc::{GrpcConfig, GrpcConfigManager, GrpcDiagnostic, GrpcEngine, GrpcProduct};
use matchkit_local::{LocalConfig, LocalConfigManager, LocalDiagnostic, LocalEngine, LocalProduct};

use crate::channel::ChannelManager;
use crate::config::{select_backend, Backend, FactoryConfig};
use crate::slot::OnceSlot;

/// Hands out the five matchkit clients for one deployment target.
///
/// Each accessor caches its client after the first call and returns the
/// identical handle to every later (or concurrently racing) caller. A
/// remote-configured factory shares one channel between all five kinds;
/// an in-process factory never touches the network. Instances never
/// share state, so differently configured factories can coexist.
///
/// Dropping the factory drops its cached handles without releasing them;
/// calling `destroy` on each client remains the caller's job.
pub struct SdkFactory {
    config: FactoryConfig,
    channel: ChannelManager,
    config_client: OnceSlot<Arc<dyn ConfigApi>>,
    config_manager_client: OnceSlot<Arc<dyn ConfigManagerApi>>,
    diagnostic_client: OnceSlot<Arc<dyn DiagnosticApi>>,
    engine_client: OnceSlot<Arc<dyn EngineApi>>,
    product_client: OnceSlot<Arc<dyn ProductApi>>,
}

impl SdkFactory {
    pub fn new(config: FactoryConfig) -> Self {
        let channel = ChannelManager::new(config.grpc_address.clone(), config.grpc_options.clone());
        Self {
            config,
            channel,
            config_client: OnceSlot::new(),
            config_manager_client: OnceSlot::new(),
            diagnostic_client: OnceSlot::new(),
            engine_client: OnceSlot::new(),
            product_client: OnceSlot::new(),
        }
    }

    /// Configuration-editor client for this deployment target.
    ///
    /// The engine-configuration payload flows into this kind's in-process
    /// constructor; see [`FactoryConfig::engine_config_json`].
    pub async fn config(&self) -> Result<Arc<dyn ConfigApi>> {
        self.config_client
            .get_or_try_init(|| async {
                Ok(match select_backend(&self.config) {
                    Backend::Local => {
                        Arc::new(LocalConfig::new(self.engine_settings())) as Arc<dyn ConfigApi>
                    }
                    Backend::Remote => Arc::new(GrpcConfig::from_channel(self.channel().await?)),
                })
            })
            .await
    }

    /// Configuration-registry client for this deployment target.
    pub async fn config_manager(&self) -> Result<Arc<dyn ConfigManagerApi>> {
        self.config_manager_client
            .get_or_try_init(|| async {
                Ok(match select_backend(&self.config) {
                    Backend::Local => Arc::new(LocalConfigManager::new(self.base_settings()))
                        as Arc<dyn ConfigManagerApi>,
                    Backend::Remote => {
                        Arc::new(GrpcConfigManager::from_channel(self.channel().await?))
                    }
                })
            })
            .await
    }

    /// Diagnostics client for this deployment target.
    pub async fn diagnostic(&self) -> Result<Arc<dyn DiagnosticApi>> {
        self.diagnostic_client
            .get_or_try_init(|| async {
                Ok(match select_backend(&self.config) {
                    Backend::Local => {
                        Arc::new(LocalDiagnostic::new(self.base_settings()))
                            as Arc<dyn DiagnosticApi>
                    }
                    Backend::Remote => {
                        Arc::new(GrpcDiagnostic::from_channel(self.channel().await?))
                    }
                })
            })
            .await
    }

    /// Resolution-engine client for this deployment target.
    ///
    /// The engine-configuration payload flows into this kind's in-process
    /// constructor; see [`FactoryConfig::engine_config_json`].
    pub async fn engine(&self) -> Result<Arc<dyn EngineApi>> {
        self.engine_client
            .get_or_try_init(|| async {
                Ok(match select_backend(&self.config) {
                    Backend::Local => {
                        Arc::new(LocalEngine::new(self.engine_settings())) as Arc<dyn EngineApi>
                    }
                    Backend::Remote => Arc::new(GrpcEngine::from_channel(self.channel().await?)),
                })
            })
            .await
    }

    /// Product-metadata client for this deployment target.
    pub async fn product(&self) -> Result<Arc<dyn ProductApi>> {
        self.product_client
            .get_or_try_init(|| async {
                Ok(match select_backend(&self.config) {
                    Backend::Local => {
                        Arc::new(LocalProduct::new(self.base_settings())) as Arc<dyn ProductApi>
                    }
                    Backend::Remote => Arc::new(GrpcProduct::from_channel(self.channel().await?)),
                })
            })
            .await
    }

    /// Dial attempts made by this instance; stays 0 for in-process use.
    pub fn dial_count(&self) -> u64 {
        self.channel.dial_count()
    }

    async fn channel(&self) -> Result<tonic::transport::Channel> {
        Ok(self.channel.channel().await?)
    }

    fn base_settings(&self) -> SdkSettings {
        SdkSettings {
            module_name: self.config.module_name.clone(),
            config_json: String::new(),
            verbose_logging: self.config.verbose_logging,
        }
    }

    fn engine_settings(&self) -> SdkSettings {
        SdkSettings {
            config_json: self.config.engine_config_json.clone(),
            ..self.base_settings()
        }
    }
}
