//! gardenctl configuration
//!
//! The configuration document lists the known Garden clusters and the target
//! match patterns. It is persisted as YAML (by default at
//! `~/.garden/gardenctl-v2.yaml`):
//!
//! ```yaml
//! gardens:
//!   - name: landscape-dev
//!     identity: landscape-dev
//!     context: ""
//!     kubeconfig: /home/user/.kube/landscape-dev.yaml
//!     aliases: [dev]
//! matchPatterns:
//!   - ^((?P<garden>[^/]+)/)?shoot--(?P<project>.+)--(?P<shoot>.+)$
//! ```

mod error;
mod ordered;
mod registry;
mod store;

pub use error::ConfigError;
pub use ordered::{dedup_ordered, split_lines, OrderedSet};
pub use registry::{
    GardenRegistry, GardenUpdate, METADATA_ALIASES, METADATA_IDENTITY, METADATA_MATCH_PATTERNS,
};
pub use store::{load, load_from_file, save, save_to_file};

use std::path::Path;

use gardenctl_matcher::PatternMatch;
use serde::{Deserialize, Serialize};

/// The gardenctl configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Known Garden clusters, in load order
    #[serde(default)]
    pub gardens: Vec<Garden>,

    /// Regex patterns for custom target input formats, evaluated in order.
    /// Supported named groups: garden, project, namespace, shoot
    #[serde(default)]
    pub match_patterns: Vec<String>,
}

/// A single Garden cluster entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garden {
    /// Unique identifier used to target this Garden
    pub name: String,

    /// Cluster identity of the Garden. Not meant to be edited by hand
    #[serde(default)]
    pub identity: String,

    /// Overrides the kubeconfig's current-context when set
    #[serde(default)]
    pub context: String,

    /// Path to the kubeconfig of the Garden cluster
    #[serde(default)]
    pub kubeconfig: String,

    /// Alternative names that can be used to target this Garden
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Config {
    /// Load the configuration from a file; a missing file yields an empty config
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        store::load_from_file(path)
    }

    /// Overwrite `path` with this configuration
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        store::save_to_file(path, self)
    }

    /// Get a garden by its exact name
    pub fn garden(&self, name: &str) -> Option<&Garden> {
        self.gardens.iter().find(|g| g.name == name)
    }

    pub(crate) fn garden_mut(&mut self, name: &str) -> Option<&mut Garden> {
        self.gardens.iter_mut().find(|g| g.name == name)
    }

    /// Match a target string against the configured patterns
    pub fn match_pattern(&self, value: &str) -> Result<PatternMatch, ConfigError> {
        Ok(gardenctl_matcher::match_pattern(&self.match_patterns, value)?)
    }

    pub fn is_empty(&self) -> bool {
        self.gardens.is_empty() && self.match_patterns.is_empty()
    }
}

impl Garden {
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            gardens: vec![
                Garden {
                    name: "landscape-dev".to_string(),
                    identity: "landscape-dev".to_string(),
                    context: String::new(),
                    kubeconfig: "/kube/dev.yaml".to_string(),
                    aliases: vec!["dev".to_string()],
                },
                Garden {
                    name: "landscape-live".to_string(),
                    aliases: vec!["live".to_string(), "prod".to_string()],
                    ..Default::default()
                },
            ],
            match_patterns: vec!["^(?P<garden>[^/]+)/(?P<shoot>[^/]+)$".to_string()],
        }
    }

    #[test]
    fn test_garden_by_name() {
        let config = sample();
        assert_eq!(config.garden("landscape-live").map(|g| g.aliases.len()), Some(2));
        // aliases are not names
        assert!(config.garden("dev").is_none());
    }

    #[test]
    fn test_has_alias() {
        let config = sample();
        let live = config.garden("landscape-live").unwrap();
        assert!(live.has_alias("prod"));
        assert!(!live.has_alias("Prod"));
    }

    #[test]
    fn test_match_pattern_uses_configured_patterns() {
        let config = sample();
        let found = config.match_pattern("dev/api").unwrap();
        assert_eq!(found.garden.as_deref(), Some("dev"));
        assert_eq!(found.shoot.as_deref(), Some("api"));

        let result = config.match_pattern("no-slash");
        assert!(matches!(result, Err(ConfigError::Match(_))));
    }

    #[test]
    fn test_yaml_field_names() {
        let yaml = serde_yaml::to_string(&sample()).unwrap();
        assert!(yaml.contains("gardens:"));
        assert!(yaml.contains("matchPatterns:"));
        assert!(yaml.contains("kubeconfig: /kube/dev.yaml"));
        assert!(yaml.contains("identity: landscape-dev"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let yaml = r#"
gardens:
  - name: minimal
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let garden = &config.gardens[0];
        assert_eq!(garden.name, "minimal");
        assert!(garden.identity.is_empty());
        assert!(garden.context.is_empty());
        assert!(garden.kubeconfig.is_empty());
        assert!(garden.aliases.is_empty());
        assert!(config.match_patterns.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Config::default().is_empty());
        assert!(!sample().is_empty());
    }
}
