//! gRPC client implementation of ConfigApi

use std::any::Any;

use anyhow::Result;
use async_trait::async_trait;
use tonic::transport::Channel;

use matchkit_api::{ConfigApi, ConfigHandle};
use matchkit_grpc_stubs::pb;
use matchkit_grpc_stubs::ConfigServiceClient;

use crate::rpc_err;

pub struct GrpcConfig {
    inner: ConfigServiceClient<Channel>,
}

impl GrpcConfig {
    /// Create from an existing channel; the channel stays shared.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: ConfigServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl ConfigApi for GrpcConfig {
    async fn create(&self) -> Result<ConfigHandle> {
        let mut client = self.inner.clone();
        let response = client
            .create_config(pb::CreateConfigRequest {})
            .await
            .map_err(rpc_err)?;
        Ok(ConfigHandle(response.into_inner().config_handle))
    }

    async fn add_data_source(&self, handle: ConfigHandle, code: &str) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .add_data_source(pb::AddDataSourceRequest {
                config_handle: handle.0,
                data_source_code: code.to_string(),
            })
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().result)
    }

    async fn list_data_sources(&self, handle: ConfigHandle) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .list_data_sources(pb::ListDataSourcesRequest {
                config_handle: handle.0,
            })
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().result)
    }

    async fn save(&self, handle: ConfigHandle) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .save_config(pb::SaveConfigRequest {
                config_handle: handle.0,
            })
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().definition)
    }

    async fn close(&self, handle: ConfigHandle) -> Result<()> {
        let mut client = self.inner.clone();
        client
            .close_config(pb::CloseConfigRequest {
                config_handle: handle.0,
            })
            .await
            .map_err(rpc_err)?;
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        tracing::debug!("config destroy is a no-op over gRPC; server owns teardown");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
