//! Spawn request payloads and the spawning-service seam.
//!
//! The spawning service implementation (session creation, lifecycle,
//! completion-message delivery) lives outside this workspace; tools depend
//! on the [`SessionSpawner`] trait only.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Execution mode requested for a spawned sub-agent session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnMode {
    Run,
    Session,
}

impl SpawnMode {
    /// Parse a raw mode value. Anything other than exactly `"run"` or
    /// `"session"` is treated as absent rather than rejected, so stale
    /// callers sending unknown modes keep working.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "run" => Some(Self::Run),
            "session" => Some(Self::Session),
            _ => None,
        }
    }
}

/// What happens to the sub-agent session once it completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupPolicy {
    Delete,
    #[default]
    Keep,
}

impl CleanupPolicy {
    /// Parse a raw cleanup value. Only exactly `"delete"` selects deletion;
    /// everything else (including absent) keeps the session.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("delete") => Self::Delete,
            _ => Self::Keep,
        }
    }
}

/// Canonical spawn request forwarded to the spawning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    /// Task description for the sub-agent.
    pub task: String,

    /// Optional human-readable label for the session.
    pub label: Option<String>,

    /// Agent definition to run, when not the default.
    pub agent_id: Option<String>,

    /// Model override. Already validated against the allowlist by the
    /// time a request reaches the spawning service.
    pub model: Option<String>,

    /// Thinking-level override.
    pub thinking: Option<String>,

    /// Wall-clock budget for the sub-agent run, in seconds. Enforced by
    /// the spawning service, not the gate.
    pub run_timeout_seconds: Option<u64>,

    /// Whether to spawn into a conversation thread.
    pub thread: bool,

    /// Requested execution mode.
    pub mode: Option<SpawnMode>,

    /// Session cleanup policy after completion.
    pub cleanup: CleanupPolicy,

    /// Whether the requester expects a completion message routed back.
    pub expects_completion_message: bool,
}

/// Identifies the originating session, channel, thread, and group so that
/// completion messages can be routed back to the requester.
///
/// Opaque to the gate; forwarded to the spawning service unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequesterContext {
    pub session_id: String,
    pub channel: Option<String>,
    pub thread_id: Option<String>,
    pub group_id: Option<String>,
}

impl RequesterContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            channel: None,
            thread_id: None,
            group_id: None,
        }
    }
}

/// The external spawning service.
///
/// Owns session lifecycle, timeout enforcement, and completion-message
/// delivery. The gate forwards validated requests here and passes the
/// returned payload through unmodified; spawner errors are not reclassified.
#[async_trait]
pub trait SessionSpawner: Send + Sync {
    async fn spawn(&self, request: SpawnRequest, context: RequesterContext) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_mode_parse() {
        assert_eq!(SpawnMode::parse("run"), Some(SpawnMode::Run));
        assert_eq!(SpawnMode::parse("session"), Some(SpawnMode::Session));
        assert_eq!(SpawnMode::parse("loop"), None);
        assert_eq!(SpawnMode::parse("Run"), None);
        assert_eq!(SpawnMode::parse(""), None);
    }

    #[test]
    fn test_cleanup_policy_parse() {
        assert_eq!(CleanupPolicy::parse(Some("delete")), CleanupPolicy::Delete);
        assert_eq!(CleanupPolicy::parse(Some("keep")), CleanupPolicy::Keep);
        assert_eq!(CleanupPolicy::parse(Some("purge")), CleanupPolicy::Keep);
        assert_eq!(CleanupPolicy::parse(None), CleanupPolicy::Keep);
    }

    #[test]
    fn test_spawn_request_serialization() {
        let request = SpawnRequest {
            task: "summarize doc".to_string(),
            label: Some("summary".to_string()),
            agent_id: None,
            model: None,
            thinking: None,
            run_timeout_seconds: Some(45),
            thread: false,
            mode: Some(SpawnMode::Session),
            cleanup: CleanupPolicy::Delete,
            expects_completion_message: true,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("summarize doc"));
        assert!(json.contains("\"mode\":\"session\""));
        assert!(json.contains("\"cleanup\":\"delete\""));

        let parsed: SpawnRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_requester_context_defaults() {
        let ctx = RequesterContext::new("session-1");
        assert_eq!(ctx.session_id, "session-1");
        assert!(ctx.channel.is_none());
        assert!(ctx.thread_id.is_none());
        assert!(ctx.group_id.is_none());
    }
}
