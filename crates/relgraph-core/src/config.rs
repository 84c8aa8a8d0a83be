//! Graph configuration for relgraph
//!
//! Configuration is read from a TOML file. Every field has a default, so an
//! empty or missing file yields `GraphConfig::default()`.
//!
//! ```toml
//! strict_endpoints = true
//! order = "numeric-label"
//! traversal = "recursive-dfs"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::TraversalKind;
use crate::order::LabelOrder;

/// Environment variable naming the default config file
pub const CONFIG_PATH_ENV_VAR: &str = "RELGRAPH_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "relgraph.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Reject edges whose endpoints are not in the vertex set
    pub strict_endpoints: bool,
    /// Order used for label-like vertices
    pub order: LabelOrder,
    /// Traversal run by `Graph::traverse_default`
    pub traversal: TraversalKind,
}

impl GraphConfig {
    /// Path of the default config file, honouring `RELGRAPH_CONFIG`
    pub fn default_path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from the default path
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
