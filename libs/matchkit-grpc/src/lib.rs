//! gRPC-stub backend for the matchkit capability traits.
//!
//! Each client wraps a shared `tonic` channel and translates capability
//! operations into RPC calls on the corresponding matchkit service. The
//! channel is owned by whoever constructed the clients (normally the
//! factory); clients clone the cheap stub handle per call.
//!
//! `destroy` is a client-side no-op for this backend: native teardown is
//! owned by the server the channel points at.

use anyhow::anyhow;

mod config;
mod config_manager;
mod diagnostic;
mod engine;
mod options;
mod product;

pub use config::GrpcConfig;
pub use config_manager::GrpcConfigManager;
pub use diagnostic::GrpcDiagnostic;
pub use engine::GrpcEngine;
pub use options::GrpcDialOptions;
pub use product::GrpcProduct;

pub(crate) fn rpc_err(status: tonic::Status) -> anyhow::Error {
    anyhow!("gRPC call failed: {status}")
}
