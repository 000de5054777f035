//! Abstract factory for matchkit SDK clients.
//!
//! An [`SdkFactory`] hands out the five capability clients
//! ([`matchkit_api::ConfigApi`], [`matchkit_api::ConfigManagerApi`],
//! [`matchkit_api::DiagnosticApi`], [`matchkit_api::EngineApi`],
//! [`matchkit_api::ProductApi`]) without the caller knowing whether each
//! is backed in-process or by gRPC. The backend is picked per client kind
//! from the factory configuration: a non-empty `grpc_address` selects the
//! remote backend, an empty one the in-process backend.
//!
//! Each client is constructed at most once per factory instance, however
//! many tasks race on the accessor; the remote backend shares a single
//! lazily-dialed channel across all five kinds. Factory instances are
//! fully isolated from each other, so one process can drive an in-process
//! and a remote deployment side by side.

mod channel;
mod config;
mod error;
mod factory;
mod slot;

pub use config::{select_backend, Backend, FactoryConfig};
pub use error::FactoryError;
pub use factory::SdkFactory;

// Callers supplying custom dial options get the type from here.
pub use matchkit_grpc::GrpcDialOptions;
