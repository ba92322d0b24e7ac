//! Subflow Traits - Shared trait definitions and core abstractions.
//!
//! This crate provides the shared interfaces used across the Subflow
//! workspace:
//! - Tool trait, ToolOutput, ToolError
//! - Spawn request payloads (SpawnRequest, RequesterContext)
//! - The SessionSpawner seam to the spawning service

pub mod error;
pub mod spawn;
pub mod tool;

// ── Top-level re-exports ─────────────────────────────────────────────

// Error types
pub use error::{Result, ToolError};

// Tool trait and core types
pub use tool::{Tool, ToolOutput, ToolSchema};

// Spawn payloads and the spawning-service seam
pub use spawn::{CleanupPolicy, RequesterContext, SessionSpawner, SpawnMode, SpawnRequest};
