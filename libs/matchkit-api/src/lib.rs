//! Capability contracts for the matchkit entity-resolution SDK.
//!
//! Each client kind is a trait implemented identically by the in-process
//! backend (`matchkit-local`) and the gRPC-stub backend (`matchkit-grpc`),
//! so calling code written against these traits is backend-agnostic.
//! Handles are produced by `matchkit-factory`; releasing a handle via its
//! `destroy` operation is the caller's responsibility, never the factory's.

pub mod config;
pub mod config_manager;
pub mod diagnostic;
pub mod engine;
pub mod product;
pub mod types;

pub use config::ConfigApi;
pub use config_manager::ConfigManagerApi;
pub use diagnostic::DiagnosticApi;
pub use engine::EngineApi;
pub use product::ProductApi;
pub use types::{ConfigHandle, ConfigId, SdkSettings};
