//! gRPC client implementation of ProductApi

use std::any::Any;

use anyhow::Result;
use async_trait::async_trait;
use tonic::transport::Channel;

use matchkit_api::ProductApi;
use matchkit_grpc_stubs::pb;
use matchkit_grpc_stubs::ProductServiceClient;

use crate::rpc_err;

pub struct GrpcProduct {
    inner: ProductServiceClient<Channel>,
}

impl GrpcProduct {
    /// Create from an existing channel; the channel stays shared.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: ProductServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl ProductApi for GrpcProduct {
    async fn license(&self) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .get_license(pb::GetLicenseRequest {})
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().license)
    }

    async fn version(&self) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .get_version(pb::GetVersionRequest {})
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().version)
    }

    async fn destroy(&self) -> Result<()> {
        tracing::debug!("product destroy is a no-op over gRPC; server owns teardown");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
