//! gRPC client implementation of ConfigManagerApi

use std::any::Any;

use anyhow::Result;
use async_trait::async_trait;
use tonic::transport::Channel;

use matchkit_api::{ConfigId, ConfigManagerApi};
use matchkit_grpc_stubs::pb;
use matchkit_grpc_stubs::ConfigManagerServiceClient;

use crate::rpc_err;

pub struct GrpcConfigManager {
    inner: ConfigManagerServiceClient<Channel>,
}

impl GrpcConfigManager {
    /// Create from an existing channel; the channel stays shared.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: ConfigManagerServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl ConfigManagerApi for GrpcConfigManager {
    async fn add_config(&self, definition: &str, comments: &str) -> Result<ConfigId> {
        let mut client = self.inner.clone();
        let response = client
            .add_config(pb::AddConfigRequest {
                definition: definition.to_string(),
                comments: comments.to_string(),
            })
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().config_id)
    }

    async fn get_config(&self, config_id: ConfigId) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .get_config(pb::GetConfigRequest { config_id })
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().definition)
    }

    async fn get_default_config_id(&self) -> Result<ConfigId> {
        let mut client = self.inner.clone();
        let response = client
            .get_default_config_id(pb::GetDefaultConfigIdRequest {})
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().config_id)
    }

    async fn set_default_config_id(&self, config_id: ConfigId) -> Result<()> {
        let mut client = self.inner.clone();
        client
            .set_default_config_id(pb::SetDefaultConfigIdRequest { config_id })
            .await
            .map_err(rpc_err)?;
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        tracing::debug!("config manager destroy is a no-op over gRPC; server owns teardown");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
