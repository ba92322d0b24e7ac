//! Subflow Models - Model, catalog, and allowlist primitives.
//!
//! This crate provides the policy side of sub-agent spawning:
//! - `Provider` and the built-in model table
//! - `ModelCatalog` plus the async `ModelCatalogProvider` seam
//! - `SystemConfig` plus the sync `ConfigProvider` seam
//! - `ModelRef` parsing and canonical model keys
//! - `AllowedModelSet` construction from config + catalog

pub mod allowlist;
pub mod catalog;
pub mod config;
pub mod model_ref;
pub mod provider;

pub use allowlist::{AllowedModelSet, build_allowed_model_set};
pub use catalog::{
    ModelCatalog, ModelCatalogProvider, ModelEntry, StaticModelCatalogProvider, is_builtin_model,
    normalize,
};
pub use config::{ConfigProvider, SpawnDefaults, StaticConfigProvider, SystemConfig};
pub use model_ref::{ModelRef, model_key, parse_model_ref};
pub use provider::Provider;
