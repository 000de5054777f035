//! Shared engine channel management

use std::sync::atomic::{AtomicU64, Ordering};

use tonic::transport::{Channel, Endpoint};
use tracing::{debug, warn};

use matchkit_grpc::GrpcDialOptions;

use crate::error::FactoryError;
use crate::slot::OnceSlot;

/// Owns the one channel a factory instance dials to its remote engine.
///
/// The first requester dials; everyone after that clones the cached
/// channel. A failed dial is logged and replaced by a lazy channel over
/// the same endpoint, so the requesting client still comes out usable in
/// shape and fails on its first RPC instead. Dials are never retried.
pub(crate) struct ChannelManager {
    address: String,
    options: GrpcDialOptions,
    slot: OnceSlot<Channel>,
    dials: AtomicU64,
}

impl ChannelManager {
    pub(crate) fn new(address: String, options: Option<GrpcDialOptions>) -> Self {
        Self {
            address,
            options: options.unwrap_or_default(),
            slot: OnceSlot::new(),
            dials: AtomicU64::new(0),
        }
    }

    pub(crate) async fn channel(&self) -> Result<Channel, FactoryError> {
        self.slot
            .get_or_try_init(|| async {
                let endpoint = Endpoint::from_shared(normalize_address(&self.address))
                    .map_err(|source| FactoryError::InvalidEndpoint {
                        address: self.address.clone(),
                        source,
                    })?
                    .connect_timeout(self.options.connect_timeout)
                    .timeout(self.options.request_timeout);

                self.dials.fetch_add(1, Ordering::Relaxed);
                match endpoint.connect().await {
                    Ok(channel) => {
                        debug!(address = %self.address, "engine channel connected");
                        Ok(channel)
                    }
                    Err(error) => {
                        warn!(
                            address = %self.address,
                            error = %error,
                            "engine channel dial failed; RPC calls will fail until the endpoint is reachable"
                        );
                        Ok(endpoint.connect_lazy())
                    }
                }
            })
            .await
    }

    /// Number of dial attempts made so far (0 or 1 for a live instance).
    pub(crate) fn dial_count(&self) -> u64 {
        self.dials.load(Ordering::Relaxed)
    }
}

fn normalize_address(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_port_gets_a_scheme() {
        assert_eq!(normalize_address("localhost:8258"), "http://localhost:8258");
        assert_eq!(
            normalize_address("https://engine.example.com:8258"),
            "https://engine.example.com:8258"
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_still_yields_a_channel() {
        let manager = ChannelManager::new("127.0.0.1:1".to_string(), None);
        assert!(manager.channel().await.is_ok());
        assert_eq!(manager.dial_count(), 1);

        // A second request reuses the cached channel without redialing.
        assert!(manager.channel().await.is_ok());
        assert_eq!(manager.dial_count(), 1);
    }

    #[tokio::test]
    async fn malformed_address_is_an_error() {
        let manager = ChannelManager::new("not a uri".to_string(), None);
        let result = manager.channel().await;
        assert!(matches!(
            result,
            Err(FactoryError::InvalidEndpoint { .. })
        ));
    }
}
