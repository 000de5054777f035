//! gRPC client implementation of EngineApi

use std::any::Any;

use anyhow::Result;
use async_trait::async_trait;
use tonic::transport::Channel;

use matchkit_api::EngineApi;
use matchkit_grpc_stubs::pb;
use matchkit_grpc_stubs::EngineServiceClient;

use crate::rpc_err;

pub struct GrpcEngine {
    inner: EngineServiceClient<Channel>,
}

impl GrpcEngine {
    /// Create from an existing channel; the channel stays shared.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: EngineServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl EngineApi for GrpcEngine {
    async fn add_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        definition: &str,
        load_id: &str,
    ) -> Result<()> {
        let mut client = self.inner.clone();
        client
            .add_record(pb::AddRecordRequest {
                data_source_code: data_source_code.to_string(),
                record_id: record_id.to_string(),
                definition: definition.to_string(),
                load_id: load_id.to_string(),
            })
            .await
            .map_err(rpc_err)?;
        Ok(())
    }

    async fn add_record_with_info(
        &self,
        data_source_code: &str,
        record_id: &str,
        definition: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .add_record_with_info(pb::AddRecordWithInfoRequest {
                data_source_code: data_source_code.to_string(),
                record_id: record_id.to_string(),
                definition: definition.to_string(),
                load_id: load_id.to_string(),
                flags,
            })
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().with_info)
    }

    async fn get_entity_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .get_entity_by_record_id(pb::GetEntityByRecordIdRequest {
                data_source_code: data_source_code.to_string(),
                record_id: record_id.to_string(),
            })
            .await
            .map_err(rpc_err)?;
        Ok(response.into_inner().entity)
    }

    async fn purge_repository(&self) -> Result<()> {
        let mut client = self.inner.clone();
        client
            .purge_repository(pb::PurgeRepositoryRequest {})
            .await
            .map_err(rpc_err)?;
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        tracing::debug!("engine destroy is a no-op over gRPC; server owns teardown");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
