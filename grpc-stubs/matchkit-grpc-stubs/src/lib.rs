//! Generated gRPC stubs for the matchkit engine services
//!
//! This crate contains only the generated protobuf types and gRPC client/server
//! stubs for the five matchkit services. It does not contain any business logic.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

/// Generated protobuf types for the matchkit.v1 services
pub mod pb {
    tonic::include_proto!("matchkit.v1");
}

// Re-export common types for convenience
pub use pb::config_manager_service_client::ConfigManagerServiceClient;
pub use pb::config_manager_service_server::{ConfigManagerService, ConfigManagerServiceServer};
pub use pb::config_service_client::ConfigServiceClient;
pub use pb::config_service_server::{ConfigService, ConfigServiceServer};
pub use pb::diagnostic_service_client::DiagnosticServiceClient;
pub use pb::diagnostic_service_server::{DiagnosticService, DiagnosticServiceServer};
pub use pb::engine_service_client::EngineServiceClient;
pub use pb::engine_service_server::{EngineService, EngineServiceServer};
pub use pb::product_service_client::ProductServiceClient;
pub use pb::product_service_server::{ProductService, ProductServiceServer};
