//! Types shared across the capability traits

use serde::Deserialize;

/// Opaque handle to an in-progress configuration being edited through
/// [`crate::ConfigApi`]. Valid only for the client that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigHandle(pub u64);

impl std::fmt::Display for ConfigHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a configuration persisted through [`crate::ConfigManagerApi`].
pub type ConfigId = i64;

/// Initialization payload handed to in-process clients.
///
/// The factory passes these fields through without interpreting them;
/// `config_json` in particular is an opaque engine-configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SdkSettings {
    pub module_name: String,
    pub config_json: String,
    pub verbose_logging: i64,
}
