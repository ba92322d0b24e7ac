//! Model provider identifiers.

use serde::{Deserialize, Serialize};

/// AI model provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    Anthropic,
    DeepSeek,
    Google,
}

impl Provider {
    /// Canonical lowercase provider id, used in model keys and refs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
            Self::DeepSeek => "deepseek",
            Self::Google => "google",
        }
    }

    /// Parse a provider selector, tolerating common aliases.
    ///
    /// Normalization keeps ASCII alphanumerics only, so `open-ai` and
    /// `OpenAI` both resolve.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "openai" | "gpt" => Some(Self::OpenAI),
            "anthropic" | "claude" => Some(Self::Anthropic),
            "deepseek" => Some(Self::DeepSeek),
            "google" | "gemini" => Some(Self::Google),
            _ => None,
        }
    }

    /// All supported providers.
    pub fn all() -> &'static [Provider] {
        &[Self::OpenAI, Self::Anthropic, Self::DeepSeek, Self::Google]
    }
}
