//! Dial options for the shared engine channel

use std::time::Duration;

/// Options applied when the factory dials the remote engine.
///
/// The defaults use plaintext transport; TLS setup, when needed, belongs
/// to the caller supplying its own options.
#[derive(Debug, Clone)]
pub struct GrpcDialOptions {
    /// Deadline for establishing the TCP/HTTP2 connection.
    pub connect_timeout: Duration,
    /// Per-RPC deadline applied to every call on the channel.
    pub request_timeout: Duration,
}

impl Default for GrpcDialOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}
