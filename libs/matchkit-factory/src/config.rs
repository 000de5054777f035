//! Factory configuration and backend selection

use serde::Deserialize;

use matchkit_grpc::GrpcDialOptions;

/// Configuration an [`crate::SdkFactory`] is built from.
///
/// Fixed for the lifetime of the factory instance that takes it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryConfig {
    /// Address of a remote engine server. Empty means clients run
    /// in-process; this is the only field that influences the choice.
    pub grpc_address: String,
    /// Dial options for the remote channel; defaults apply when absent.
    #[serde(skip)]
    pub grpc_options: Option<GrpcDialOptions>,
    /// Passed through to in-process client initialization.
    pub module_name: String,
    /// Passed through to in-process client initialization.
    pub verbose_logging: i64,
    /// Opaque engine-configuration document handed to the Config and
    /// Engine clients. The factory never interprets it.
    pub engine_config_json: String,
}

/// Which implementation of a capability trait a factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Local,
    Remote,
}

/// Pure backend decision: remote if and only if an address is configured.
pub fn select_backend(config: &FactoryConfig) -> Backend {
    if config.grpc_address.is_empty() {
        Backend::Local
    } else {
        Backend::Remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address_selects_local() {
        assert_eq!(select_backend(&FactoryConfig::default()), Backend::Local);
    }

    #[test]
    fn configured_address_selects_remote() {
        let config = FactoryConfig {
            grpc_address: "localhost:8258".to_string(),
            ..Default::default()
        };
        assert_eq!(select_backend(&config), Backend::Remote);
    }

    #[test]
    fn other_fields_do_not_influence_the_choice() {
        let config = FactoryConfig {
            module_name: "demo".to_string(),
            verbose_logging: 1,
            engine_config_json: "{}".to_string(),
            ..Default::default()
        };
        assert_eq!(select_backend(&config), Backend::Local);
    }
}
