//! Agent tool implementations for Subflow.
//!
//! Core abstractions (Tool trait, ToolError, spawn payloads) are defined in
//! `subflow-traits` and re-exported here for convenience.

pub mod impls;

// Re-export core types from subflow-traits at crate root
pub use subflow_traits::error::{Result, ToolError};
pub use subflow_traits::tool::{Tool, ToolOutput, ToolSchema};

// Re-export tool implementations
pub use impls::SpawnTool;
