//! Built-in tool implementations.

pub mod spawn;

pub use spawn::SpawnTool;
