//! Model catalog: the set of known models and providers.
//!
//! The catalog is an external collaborator from the gate's point of view;
//! tools depend on the async [`ModelCatalogProvider`] seam. The default
//! implementation serves the built-in model table.

use async_trait::async_trait;

use crate::provider::Provider;
use subflow_traits::error::Result;

/// A known model in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelEntry {
    pub provider: Provider,
    pub id: &'static str,
    pub name: &'static str,
}

/// Built-in model table - single source of truth for shipped models.
const BUILTIN_MODELS: &[ModelEntry] = &[
    // OpenAI
    ModelEntry {
        provider: Provider::OpenAI,
        id: "gpt-5",
        name: "GPT-5",
    },
    ModelEntry {
        provider: Provider::OpenAI,
        id: "gpt-5-mini",
        name: "GPT-5 Mini",
    },
    ModelEntry {
        provider: Provider::OpenAI,
        id: "gpt-5-nano",
        name: "GPT-5 Nano",
    },
    ModelEntry {
        provider: Provider::OpenAI,
        id: "o3",
        name: "O3",
    },
    ModelEntry {
        provider: Provider::OpenAI,
        id: "o4-mini",
        name: "O4 Mini",
    },
    // Anthropic
    ModelEntry {
        provider: Provider::Anthropic,
        id: "claude-opus-4-1",
        name: "Claude Opus 4.1",
    },
    ModelEntry {
        provider: Provider::Anthropic,
        id: "claude-sonnet-4-5",
        name: "Claude Sonnet 4.5",
    },
    ModelEntry {
        provider: Provider::Anthropic,
        id: "claude-haiku-4-5",
        name: "Claude Haiku 4.5",
    },
    // DeepSeek
    ModelEntry {
        provider: Provider::DeepSeek,
        id: "deepseek-chat",
        name: "DeepSeek Chat",
    },
    ModelEntry {
        provider: Provider::DeepSeek,
        id: "deepseek-reasoner",
        name: "DeepSeek Reasoner",
    },
    // Google
    ModelEntry {
        provider: Provider::Google,
        id: "gemini-2.5-pro",
        name: "Gemini 2.5 Pro",
    },
    ModelEntry {
        provider: Provider::Google,
        id: "gemini-2.5-flash",
        name: "Gemini 2.5 Flash",
    },
];

/// Trim and lowercase for catalog lookups and model keys.
pub fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// The set of known models, queryable by id or provider.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    entries: Vec<ModelEntry>,
}

impl ModelCatalog {
    /// Catalog of the built-in model table.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_MODELS.to_vec(),
        }
    }

    pub fn from_entries(entries: Vec<ModelEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    /// Find an entry by model id, normalized.
    pub fn find_model(&self, id: &str) -> Option<&ModelEntry> {
        let id = normalize(id);
        self.entries
            .iter()
            .find(|entry| normalize(entry.id) == id)
    }

    /// All model ids belonging to a provider.
    pub fn models_for(&self, provider: Provider) -> impl Iterator<Item = &ModelEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.provider == provider)
    }
}

/// Whether a bare model id is in the built-in table.
///
/// Used by model-ref parsing, which runs before any catalog load and must
/// not depend on per-request catalog state.
pub fn is_builtin_model(id: &str) -> bool {
    let id = normalize(id);
    BUILTIN_MODELS.iter().any(|entry| normalize(entry.id) == id)
}

/// Provider of the current model catalog. May suspend (the catalog can be
/// backed by a remote index); implementations decide caching.
#[async_trait]
pub trait ModelCatalogProvider: Send + Sync {
    async fn load_catalog(&self) -> Result<ModelCatalog>;
}

/// Catalog provider that always serves a fixed catalog.
pub struct StaticModelCatalogProvider {
    catalog: ModelCatalog,
}

impl StaticModelCatalogProvider {
    pub fn new(catalog: ModelCatalog) -> Self {
        Self { catalog }
    }

    pub fn builtin() -> Self {
        Self::new(ModelCatalog::builtin())
    }
}

#[async_trait]
impl ModelCatalogProvider for StaticModelCatalogProvider {
    async fn load_catalog(&self) -> Result<ModelCatalog> {
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = ModelCatalog::builtin();
        let entry = catalog.find_model("claude-sonnet-4-5").unwrap();
        assert_eq!(entry.provider, Provider::Anthropic);
        assert_eq!(entry.name, "Claude Sonnet 4.5");
    }

    #[test]
    fn test_find_model_normalizes() {
        let catalog = ModelCatalog::builtin();
        assert!(catalog.find_model("  GPT-5  ").is_some());
        assert!(catalog.find_model("gpt-unknown").is_none());
    }

    #[test]
    fn test_models_for_provider() {
        let catalog = ModelCatalog::builtin();
        let anthropic: Vec<_> = catalog.models_for(Provider::Anthropic).collect();
        assert_eq!(anthropic.len(), 3);
        assert!(anthropic.iter().all(|e| e.provider == Provider::Anthropic));
    }

    #[test]
    fn test_is_builtin_model() {
        assert!(is_builtin_model("deepseek-chat"));
        assert!(is_builtin_model("O4-MINI"));
        assert!(!is_builtin_model("gpt-unknown"));
    }

    #[tokio::test]
    async fn test_static_provider_serves_catalog() {
        let provider = StaticModelCatalogProvider::builtin();
        let catalog = provider.load_catalog().await.unwrap();
        assert!(!catalog.entries().is_empty());
    }
}
