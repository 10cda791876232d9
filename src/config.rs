//! New-item defaults with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/formtree/formtree.toml`
//! 3. Environment variables: `FORMTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{SessionError, SessionResult};
use crate::domain::{ComputeRule, DEFAULT_CONTENT};

/// Defaults applied to freshly created items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDefaults {
    /// Markdown content for newly created items
    pub content: String,
    /// Aggregation rule for newly created computed items
    pub rule: ComputeRule,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            content: DEFAULT_CONTENT.to_string(),
            rule: ComputeRule::All,
        }
    }
}

impl ItemDefaults {
    /// Load defaults from the global config file and environment.
    pub fn load() -> SessionResult<Self> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load defaults with an explicit global config path (testable entry).
    pub fn load_from(global_path: Option<&Path>) -> SessionResult<Self> {
        let mut builder = Config::builder()
            .set_default("content", DEFAULT_CONTENT)
            .map_err(config_err)?
            .set_default("rule", "All")
            .map_err(config_err)?;

        if let Some(path) = global_path {
            if path.exists() {
                debug!("loading global config: {}", path.display());
                builder = builder.add_source(File::from(path.to_path_buf()).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("FORMTREE"));

        builder
            .build()
            .map_err(config_err)?
            .try_deserialize()
            .map_err(config_err)
    }
}

/// Global config file path, `$XDG_CONFIG_HOME/formtree/formtree.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "formtree")
        .map(|dirs| dirs.config_dir().join("formtree.toml"))
}

fn config_err(e: ConfigError) -> SessionError {
    SessionError::Config {
        message: e.to_string(),
    }
}
