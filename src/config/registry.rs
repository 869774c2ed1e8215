//! Garden registry
//!
//! Owns the in-memory configuration and implements the lookup and mutation
//! operations behind `gardenctl config`. Every mutation rewrites the whole
//! document at the given destination. A failed save leaves the in-memory
//! document mutated, so callers must treat the operation as failed.

use std::collections::BTreeMap;
use std::path::Path;

use super::ordered::{dedup_ordered, split_lines};
use super::{store, Config, ConfigError, Garden};

/// Newline-separated aliases of the garden being added.
pub const METADATA_ALIASES: &str = "aliases";

/// Cluster identity of the garden being added.
pub const METADATA_IDENTITY: &str = "identity";

/// Newline-separated match patterns merged into the global list.
pub const METADATA_MATCH_PATTERNS: &str = "global.matchPatterns";

/// Fields to change in [`GardenRegistry::set_garden`].
///
/// `None` leaves the current value alone, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GardenUpdate {
    pub kubeconfig: Option<String>,
    pub context: Option<String>,
    pub identity: Option<String>,
    pub aliases: Option<Vec<String>>,
}

impl GardenUpdate {
    fn apply(self, garden: &mut Garden) {
        if let Some(kubeconfig) = self.kubeconfig {
            garden.kubeconfig = kubeconfig;
        }
        if let Some(context) = self.context {
            garden.context = context;
        }
        if let Some(identity) = self.identity {
            garden.identity = identity;
        }
        if let Some(aliases) = self.aliases {
            garden.aliases = aliases;
        }
    }
}

/// The set of known gardens plus the global match patterns
#[derive(Debug, Clone, Default)]
pub struct GardenRegistry {
    config: Config,
}

impl GardenRegistry {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the registry from a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        store::load_from_file(path).map(Self::new)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a garden name or alias to the garden's unique name.
    ///
    /// Exact name matches take precedence over aliases; within each kind the
    /// first garden in document order wins.
    pub fn resolve_name(&self, name_or_alias: &str) -> Result<&str, ConfigError> {
        let gardens = &self.config.gardens;
        gardens
            .iter()
            .find(|g| g.name == name_or_alias)
            .or_else(|| gardens.iter().find(|g| g.has_alias(name_or_alias)))
            .map(|g| g.name.as_str())
            .ok_or_else(|| ConfigError::NotFound(name_or_alias.to_string()))
    }

    /// Register a new garden and persist the configuration.
    ///
    /// `metadata` is the cluster's published settings. Only the
    /// [`METADATA_ALIASES`], [`METADATA_IDENTITY`] and
    /// [`METADATA_MATCH_PATTERNS`] keys are read; anything else is ignored.
    pub fn add_garden(
        &mut self,
        name: &str,
        kubeconfig: &str,
        context: &str,
        metadata: &BTreeMap<String, String>,
        destination: &Path,
    ) -> Result<(), ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::Validation("garden name is required".to_string()));
        }
        if self.config.garden(name).is_some() {
            return Err(ConfigError::DuplicateName(name.to_string()));
        }

        let lines = |key: &str| metadata.get(key).map(|v| split_lines(v)).unwrap_or_default();

        let garden = Garden {
            name: name.to_string(),
            identity: metadata.get(METADATA_IDENTITY).cloned().unwrap_or_default(),
            context: context.to_string(),
            kubeconfig: kubeconfig.to_string(),
            aliases: dedup_ordered(lines(METADATA_ALIASES)),
        };
        self.config.gardens.push(garden);

        let patterns = std::mem::take(&mut self.config.match_patterns);
        self.config.match_patterns = dedup_ordered(patterns.into_iter().chain(lines(METADATA_MATCH_PATTERNS)));

        tracing::debug!(
            garden = name,
            patterns = self.config.match_patterns.len(),
            "added garden"
        );

        store::save_to_file(destination, &self.config)
    }

    /// Create or update a garden by name and persist the configuration.
    ///
    /// Existing gardens only change the fields set in `update`. A new garden
    /// takes the set fields and leaves the rest empty.
    pub fn set_garden(&mut self, name: &str, update: GardenUpdate, destination: &Path) -> Result<(), ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::Validation("garden name is required".to_string()));
        }

        match self.config.garden_mut(name) {
            Some(garden) => {
                update.apply(garden);
                tracing::debug!(garden = name, "updated garden");
            }
            None => {
                let mut garden = Garden {
                    name: name.to_string(),
                    ..Default::default()
                };
                update.apply(&mut garden);
                self.config.gardens.push(garden);
                tracing::debug!(garden = name, "created garden");
            }
        }

        store::save_to_file(destination, &self.config)
    }
}
