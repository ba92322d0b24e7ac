//! Model reference parsing and canonical model keys.

use crate::catalog::{is_builtin_model, normalize};
use crate::provider::Provider;

/// A parsed `(provider, model)` pair from a free-form override string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    pub provider: Provider,
    pub model: String,
}

/// Canonical key for a `(provider, model)` pair.
///
/// Used both for allowlist membership and diagnostics, so it must stay
/// stable: lowercase `provider/model`.
pub fn model_key(provider: Provider, model: &str) -> String {
    format!("{}/{}", provider.as_str(), normalize(model))
}

/// Parse a free-form model override into a [`ModelRef`].
///
/// Accepted forms:
/// - `provider/model` or `provider:model`, where the provider segment names
///   a known provider (aliases accepted);
/// - a bare model id from the built-in table, resolved against
///   `default_provider`.
///
/// Anything else (unknown provider segment, empty model segment, bare name
/// not in the table) fails to parse.
pub fn parse_model_ref(raw: &str, default_provider: Provider) -> Option<ModelRef> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for separator in ['/', ':'] {
        let Some((provider_raw, model_raw)) = raw.split_once(separator) else {
            continue;
        };
        let model = model_raw.trim();
        if model.is_empty() {
            return None;
        }
        let provider = Provider::parse(provider_raw)?;
        return Some(ModelRef {
            provider,
            model: model.to_string(),
        });
    }

    if is_builtin_model(raw) {
        return Some(ModelRef {
            provider: default_provider,
            model: raw.to_string(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified_ref() {
        let parsed = parse_model_ref("anthropic/claude-sonnet-4-5", Provider::OpenAI).unwrap();
        assert_eq!(parsed.provider, Provider::Anthropic);
        assert_eq!(parsed.model, "claude-sonnet-4-5");
    }

    #[test]
    fn test_parse_colon_separator_and_alias() {
        let parsed = parse_model_ref("gpt:gpt-5-mini", Provider::Anthropic).unwrap();
        assert_eq!(parsed.provider, Provider::OpenAI);
        assert_eq!(parsed.model, "gpt-5-mini");
    }

    #[test]
    fn test_parse_bare_known_model_uses_default_provider() {
        let parsed = parse_model_ref("claude-haiku-4-5", Provider::Anthropic).unwrap();
        assert_eq!(parsed.provider, Provider::Anthropic);
        assert_eq!(parsed.model, "claude-haiku-4-5");
    }

    #[test]
    fn test_parse_bare_unknown_model_fails() {
        assert_eq!(parse_model_ref("gpt-unknown", Provider::Anthropic), None);
    }

    #[test]
    fn test_parse_unknown_provider_fails() {
        assert_eq!(
            parse_model_ref("acme/some-model", Provider::Anthropic),
            None
        );
    }

    #[test]
    fn test_parse_empty_segments_fail() {
        assert_eq!(parse_model_ref("", Provider::Anthropic), None);
        assert_eq!(parse_model_ref("   ", Provider::Anthropic), None);
        assert_eq!(parse_model_ref("openai/", Provider::Anthropic), None);
        assert_eq!(parse_model_ref("openai/  ", Provider::Anthropic), None);
    }

    #[test]
    fn test_model_key_is_lowercase() {
        assert_eq!(
            model_key(Provider::Anthropic, " Claude-Sonnet-4-5 "),
            "anthropic/claude-sonnet-4-5"
        );
        assert_eq!(model_key(Provider::OpenAI, "gpt-5"), "openai/gpt-5");
    }
}
