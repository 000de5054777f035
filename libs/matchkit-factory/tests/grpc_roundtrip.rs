//! End-to-end test of a remote-configured factory against an in-process
//! gRPC server built from the generated service stubs.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;

use tonic::{Request, Response, Status};

use matchkit_api::{EngineApi as _, ProductApi as _};
use matchkit_factory::{FactoryConfig, SdkFactory};
use matchkit_grpc_stubs::pb;
use matchkit_grpc_stubs::{
    EngineService, EngineServiceServer, ProductService, ProductServiceServer,
};

#[derive(Default)]
struct TestEngineService {
    records: Mutex<HashMap<(String, String), String>>,
}

#[tonic::async_trait]
impl EngineService for TestEngineService {
    async fn add_record(
        &self,
        request: Request<pb::AddRecordRequest>,
    ) -> Result<Response<pb::AddRecordResponse>, Status> {
        let request = request.into_inner();
        self.records.lock().unwrap().insert(
            (request.data_source_code, request.record_id),
            request.definition,
        );
        Ok(Response::new(pb::AddRecordResponse {}))
    }

    async fn add_record_with_info(
        &self,
        request: Request<pb::AddRecordWithInfoRequest>,
    ) -> Result<Response<pb::AddRecordWithInfoResponse>, Status> {
        let request = request.into_inner();
        let with_info = format!(
            r#"{{"DATA_SOURCE":"{}","RECORD_ID":"{}"}}"#,
            request.data_source_code, request.record_id
        );
        self.records.lock().unwrap().insert(
            (request.data_source_code, request.record_id),
            request.definition,
        );
        Ok(Response::new(pb::AddRecordWithInfoResponse { with_info }))
    }

    async fn get_entity_by_record_id(
        &self,
        request: Request<pb::GetEntityByRecordIdRequest>,
    ) -> Result<Response<pb::GetEntityByRecordIdResponse>, Status> {
        let request = request.into_inner();
        let key = (request.data_source_code, request.record_id);
        let records = self.records.lock().unwrap();
        let Some(definition) = records.get(&key) else {
            return Err(Status::not_found(format!("{}/{}", key.0, key.1)));
        };
        Ok(Response::new(pb::GetEntityByRecordIdResponse {
            entity: definition.clone(),
        }))
    }

    async fn purge_repository(
        &self,
        _request: Request<pb::PurgeRepositoryRequest>,
    ) -> Result<Response<pb::PurgeRepositoryResponse>, Status> {
        self.records.lock().unwrap().clear();
        Ok(Response::new(pb::PurgeRepositoryResponse {}))
    }
}

struct TestProductService;

#[tonic::async_trait]
impl ProductService for TestProductService {
    async fn get_license(
        &self,
        _request: Request<pb::GetLicenseRequest>,
    ) -> Result<Response<pb::GetLicenseResponse>, Status> {
        Ok(Response::new(pb::GetLicenseResponse {
            license: r#"{"licenseType":"EVAL"}"#.to_string(),
        }))
    }

    async fn get_version(
        &self,
        _request: Request<pb::GetVersionRequest>,
    ) -> Result<Response<pb::GetVersionResponse>, Status> {
        Ok(Response::new(pb::GetVersionResponse {
            version: r#"{"VERSION":"test"}"#.to_string(),
        }))
    }
}

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let incoming = tokio_stream::wrappers::TcpListenerStream::new(listener);

    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(EngineServiceServer::new(TestEngineService::default()))
            .add_service(ProductServiceServer::new(TestProductService))
            .serve_with_incoming(incoming)
            .await
            .unwrap();
    });

    addr
}

#[tokio::test]
async fn remote_factory_round_trips_through_a_live_server() {
    let addr = spawn_server().await;
    let factory = SdkFactory::new(FactoryConfig {
        grpc_address: addr.to_string(),
        module_name: "grpc-roundtrip".to_string(),
        ..Default::default()
    });

    let engine = factory.engine().await.unwrap();
    let product = factory.product().await.unwrap();
    assert_eq!(factory.dial_count(), 1);

    let with_info = engine
        .add_record_with_info("TEST", "42", r#"{"NAME_LAST":"SEAMAN"}"#, "TEST", 0)
        .await
        .unwrap();
    let with_info: serde_json::Value = serde_json::from_str(&with_info).unwrap();
    assert_eq!(with_info["RECORD_ID"], "42");

    let entity = engine.get_entity_by_record_id("TEST", "42").await.unwrap();
    assert_eq!(entity, r#"{"NAME_LAST":"SEAMAN"}"#);

    engine.purge_repository().await.unwrap();
    assert!(engine.get_entity_by_record_id("TEST", "42").await.is_err());

    let license = product.license().await.unwrap();
    let license: serde_json::Value = serde_json::from_str(&license).unwrap();
    assert_eq!(license["licenseType"], "EVAL");

    // Remote release never reaches the server.
    engine.destroy().await.unwrap();
    product.destroy().await.unwrap();
}
