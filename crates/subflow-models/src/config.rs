//! System configuration snapshot and the config provider seam.
//!
//! Configuration is injected as a capability rather than read from a
//! global, so the gate can be exercised with fake allowlists in tests.

use serde::{Deserialize, Serialize};

use crate::provider::Provider;

/// Defaults applied to spawned sub-agent sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnDefaults {
    /// Model refs a spawn request may select as an override. `None` or
    /// empty means any model is allowed.
    #[serde(default)]
    pub allowed_models: Option<Vec<String>>,

    /// Default model ref used when a request carries no override.
    #[serde(default)]
    pub model: Option<String>,
}

/// Process-wide configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Provider assumed for unqualified model refs.
    #[serde(default = "default_provider")]
    pub default_provider: Provider,

    #[serde(default)]
    pub agents: SpawnDefaults,
}

fn default_provider() -> Provider {
    Provider::Anthropic
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            agents: SpawnDefaults::default(),
        }
    }
}

/// Provider of the current configuration snapshot. Synchronous: reads a
/// snapshot of already-loaded state, never blocks on I/O.
pub trait ConfigProvider: Send + Sync {
    fn load_config(&self) -> SystemConfig;
}

/// Config provider that always serves a fixed snapshot.
pub struct StaticConfigProvider {
    config: SystemConfig,
}

impl StaticConfigProvider {
    pub fn new(config: SystemConfig) -> Self {
        Self { config }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn load_config(&self) -> SystemConfig {
        self.config.clone()
    }
}
