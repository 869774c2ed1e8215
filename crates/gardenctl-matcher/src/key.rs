//! Recognized capture group names.

use std::fmt;

/// A named capture group that maps onto a field of [`crate::PatternMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKey {
    /// Identifies a Garden by name or alias.
    Garden,
    /// Identifies a Project.
    Project,
    /// Identifies a Project by the namespace it refers to.
    Namespace,
    /// Identifies a Shoot.
    Shoot,
}

impl PatternKey {
    pub const ALL: [PatternKey; 4] = [Self::Garden, Self::Project, Self::Namespace, Self::Shoot];

    /// The capture group name for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Garden => "garden",
            Self::Project => "project",
            Self::Namespace => "namespace",
            Self::Shoot => "shoot",
        }
    }

    /// Map a capture group name to a key. Names are case-sensitive.
    pub fn from_group_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
