//! Allowed-model policy built from configuration and the catalog.

use std::collections::BTreeSet;

use tracing::warn;

use crate::catalog::ModelCatalog;
use crate::config::SystemConfig;
use crate::model_ref::{model_key, parse_model_ref};
use crate::provider::Provider;

/// The set of models a spawn request may select.
///
/// Recomputed per request from the current config snapshot; never cached by
/// the gate. `BTreeSet` keeps key iteration sorted so diagnostics are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedModelSet {
    /// No restriction configured.
    Any,
    /// Only these canonical model keys are allowed.
    Keys(BTreeSet<String>),
}

impl AllowedModelSet {
    pub fn allows_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn contains(&self, key: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Keys(keys) => keys.contains(key),
        }
    }

    /// Allowed keys joined for diagnostics, in sorted order.
    pub fn join(&self, separator: &str) -> String {
        match self {
            Self::Any => String::new(),
            Self::Keys(keys) => keys
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(separator),
        }
    }
}

/// Build the allowed-model set from configuration and the catalog.
///
/// Each configured entry is either a bare provider name, which expands to
/// every catalog model of that provider, or a model ref contributing its
/// canonical key. Entries that parse as neither are skipped with a warning
/// rather than failing the request.
pub fn build_allowed_model_set(
    config: &SystemConfig,
    catalog: &ModelCatalog,
    default_provider: Provider,
) -> AllowedModelSet {
    let entries = match config.agents.allowed_models.as_deref() {
        Some(entries) => entries,
        None => return AllowedModelSet::Any,
    };

    let configured: Vec<&str> = entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .collect();
    if configured.is_empty() {
        return AllowedModelSet::Any;
    }

    let mut keys = BTreeSet::new();
    for entry in configured {
        // Provider-only entries allow the provider's whole catalog.
        if !entry.contains(['/', ':'])
            && let Some(provider) = Provider::parse(entry)
        {
            for model in catalog.models_for(provider) {
                keys.insert(model_key(provider, model.id));
            }
            continue;
        }

        match parse_model_ref(entry, default_provider) {
            Some(model_ref) => {
                keys.insert(model_key(model_ref.provider, &model_ref.model));
            }
            None => {
                warn!(entry, "skipping unparseable allowed_models entry");
            }
        }
    }

    AllowedModelSet::Keys(keys)
}
