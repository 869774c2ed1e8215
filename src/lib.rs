//! gardenctl - Garden cluster registry and target resolution
//!
//! This crate maintains the local list of known Garden clusters, resolves
//! names and aliases to gardens, and decomposes free-form target strings
//! using the configured match patterns.

pub mod config;
pub mod kubeconfig;
pub mod metadata;
pub mod paths;

pub use config::{Config, ConfigError, Garden, GardenRegistry, GardenUpdate};
pub use gardenctl_matcher::{match_pattern, MatchError, PatternKey, PatternMatch};
