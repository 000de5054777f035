//! gRPC client implementation of DiagnosticApi

use std::any::Any;

use anyhow::Result;
use async_trait::async_trait;
use tonic::transport::Channel;

use matchkit_api::DiagnosticApi;
use matchkit_grpc_stubs::pb;
use matchkit_grpc_stubs::DiagnosticServiceClient;

use crate::rpc_err;

pub struct GrpcDiagnostic {
    inner: DiagnosticServiceClient<Channel>,
}

impl GrpcDiagnostic {
    /// Create from an existing channel; the channel stays shared.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: DiagnosticServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl DiagnosticApi for GrpcDiagnostic {
    async fn physical_cores(&self) -> Result<i64> {
        let mut client = self.inner.clone();
        let response = client
            .get_physical_cores(pb::GetPhysicalCoresRequest {})
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().cores)
    }

    async fn logical_cores(&self) -> Result<i64> {
        let mut client = self.inner.clone();
        let response = client
            .get_logical_cores(pb::GetLogicalCoresRequest {})
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().cores)
    }

    async fn destroy(&self) -> Result<()> {
        tracing::debug!("diagnostic destroy is a no-op over gRPC; server owns teardown");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
