//! Factory error type

use thiserror::Error;

/// Errors the factory reports through its accessors.
///
/// Accessors succeed even when the remote endpoint is unreachable (the
/// failure surfaces on first RPC instead); the variants here are limited
/// to configuration the factory cannot act on at all.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("invalid engine endpoint address '{address}'")]
    InvalidEndpoint {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },
}
