//! Spawn tool - admission gate in front of sub-agent session creation.
//!
//! Normalizes raw parameters, resolves the legacy timeout alias, enforces
//! the configured model allowlist, and forwards a canonical request to the
//! spawning service. Validation failures come back as structured error
//! outputs; spawning-service errors pass through unclassified.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

use crate::{Result, Tool, ToolOutput};
use subflow_models::{
    ConfigProvider, ModelCatalogProvider, build_allowed_model_set, model_key, parse_model_ref,
};
use subflow_traits::spawn::{
    CleanupPolicy, RequesterContext, SessionSpawner, SpawnMode, SpawnRequest,
};

pub struct SpawnTool {
    config: Arc<dyn ConfigProvider>,
    catalog: Arc<dyn ModelCatalogProvider>,
    spawner: Arc<dyn SessionSpawner>,
    context: RequesterContext,
}

impl SpawnTool {
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        catalog: Arc<dyn ModelCatalogProvider>,
        spawner: Arc<dyn SessionSpawner>,
        context: RequesterContext,
    ) -> Self {
        Self {
            config,
            catalog,
            spawner,
            context,
        }
    }
}

/// Optional string parameter, passed through verbatim if present and
/// non-empty.
fn opt_string(input: &Value, key: &str) -> Option<String> {
    input
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Label parameter: trimmed, empty-after-trim treated as absent.
fn opt_label(input: &Value) -> Option<String> {
    input
        .get("label")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Floor and clamp a numeric timeout at zero. Non-finite values are
/// discarded, leaving the field absent.
fn clamp_timeout_seconds(raw: f64) -> Option<u64> {
    if !raw.is_finite() {
        return None;
    }
    Some(raw.max(0.0).floor() as u64)
}

/// Resolve the run timeout, preferring `run_timeout_seconds` over the
/// deprecated `timeout_seconds` alias. Both names are supported
/// indefinitely; older callers only know the old one.
fn resolve_run_timeout(input: &Value) -> Option<u64> {
    let raw = input
        .get("run_timeout_seconds")
        .and_then(Value::as_f64)
        .or_else(|| input.get("timeout_seconds").and_then(Value::as_f64))?;
    clamp_timeout_seconds(raw)
}

#[async_trait]
impl Tool for SpawnTool {
    fn name(&self) -> &str {
        "spawn"
    }

    fn description(&self) -> &str {
        "Spawn a sub-agent session to work on a task. The sub-agent runs independently and a completion message is routed back to this session when it finishes."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "task": {
                    "type": "string",
                    "description": "Task description for the sub-agent"
                },
                "label": {
                    "type": "string",
                    "description": "Optional human-readable label for the session"
                },
                "agent_id": {
                    "type": "string",
                    "description": "Agent definition to run, when not the default"
                },
                "model": {
                    "type": "string",
                    "description": "Model override (e.g. anthropic/claude-sonnet-4-5). Must be in the configured allowlist."
                },
                "thinking": {
                    "type": "string",
                    "description": "Thinking-level override for the sub-agent"
                },
                "run_timeout_seconds": {
                    "type": "number",
                    "minimum": 0,
                    "description": "Wall-clock budget for the run, in seconds"
                },
                "timeout_seconds": {
                    "type": "number",
                    "minimum": 0,
                    "description": "Deprecated alias for run_timeout_seconds"
                },
                "thread": {
                    "type": "boolean",
                    "default": false,
                    "description": "Spawn into a conversation thread"
                },
                "mode": {
                    "type": "string",
                    "enum": ["run", "session"],
                    "description": "Execution mode for the spawned session"
                },
                "cleanup": {
                    "type": "string",
                    "enum": ["delete", "keep"],
                    "default": "keep",
                    "description": "Whether to delete the session after completion"
                }
            },
            "required": ["task"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput> {
        let task = match input.get("task").and_then(Value::as_str) {
            Some(task) if !task.trim().is_empty() => task.to_string(),
            _ => return Ok(ToolOutput::error("missing required field: task")),
        };

        let model = opt_string(&input, "model");

        // Allowlist enforcement only runs when an override is present; an
        // absent model means no config or catalog load at all.
        if let Some(raw_model) = model.as_deref() {
            let config = self.config.load_config();
            let catalog = self.catalog.load_catalog().await?;
            let allowed = build_allowed_model_set(&config, &catalog, config.default_provider);

            if !allowed.allows_any() {
                let Some(model_ref) = parse_model_ref(raw_model, config.default_provider) else {
                    return Ok(ToolOutput::error(format!("invalid model ref: {raw_model}")));
                };
                let key = model_key(model_ref.provider, &model_ref.model);
                if !allowed.contains(&key) {
                    return Ok(ToolOutput::error(format!(
                        "model not allowed: {key}. Allowed models: {}",
                        allowed.join(", ")
                    )));
                }
            }
        }

        let request = SpawnRequest {
            task,
            label: opt_label(&input),
            agent_id: opt_string(&input, "agent_id"),
            model,
            thinking: opt_string(&input, "thinking"),
            run_timeout_seconds: resolve_run_timeout(&input),
            thread: input
                .get("thread")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            mode: input
                .get("mode")
                .and_then(Value::as_str)
                .and_then(SpawnMode::parse),
            cleanup: CleanupPolicy::parse(input.get("cleanup").and_then(Value::as_str)),
            expects_completion_message: true,
        };

        debug!(
            task = %request.task,
            agent_id = request.agent_id.as_deref(),
            model = request.model.as_deref(),
            "forwarding spawn request"
        );

        // The spawning service owns everything past this point; its payload
        // is returned unmodified and its errors are not reclassified.
        let payload = self.spawner.spawn(request, self.context.clone()).await?;
        Ok(ToolOutput::success(payload))
    }
}
