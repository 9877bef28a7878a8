//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nstree/nstree.toml`
//! 3. Local config: `<dir>/.nstree.toml` (working directory by default)
//! 4. Environment variables: `NSTREE_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ListStyle};
use crate::domain::CollisionPolicy;

/// Name of the local config file.
pub const LOCAL_CONFIG_FILE: &str = ".nstree.toml";

/// Unified configuration for nstree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// What CREATE and MOVE do when the target name exists (default: replace)
    pub on_collision: CollisionPolicy,
    /// How LIST renders the tree (default: indent)
    pub list_style: ListStyle,
    /// Treat any failed command as a failed run (default: false)
    pub strict: bool,
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub on_collision: Option<CollisionPolicy>,
    pub list_style: Option<ListStyle>,
    pub strict: Option<bool>,
}

/// Get the XDG config directory for nstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nstree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            on_collision: overlay.on_collision.unwrap_or(self.on_collision),
            list_style: overlay.list_style.unwrap_or(self.list_style),
            strict: overlay.strict.unwrap_or(self.strict),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory holding `.nstree.toml`; `None` skips the local layer
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/nstree/nstree.toml`
    /// 3. Local config: `<local_dir>/.nstree.toml`
    /// 4. Environment variables: `NSTREE_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply NSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let env = Environment::with_prefix("NSTREE")
            .prefix_separator("_")
            .separator("__");
        let builder = Config::builder().add_source(env);
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("on_collision") {
            settings.on_collision = parse_value("NSTREE_ON_COLLISION", &val)?;
        }
        if let Ok(val) = config.get_string("list_style") {
            settings.list_style = parse_value("NSTREE_LIST_STYLE", &val)?;
        }
        if let Ok(val) = config.get_bool("strict") {
            settings.strict = val;
        }

        Ok(settings)
    }

    /// Load ONLY a single config file on top of the compiled defaults.
    ///
    /// Used by `config show --file` to inspect one layer in isolation.
    pub fn load_file_only(path: &Path) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let config = Config::builder()
            .set_default("on_collision", defaults.on_collision.to_string())
            .map_err(config_err)?
            .set_default("list_style", defaults.list_style.to_string())
            .map_err(config_err)?
            .set_default("strict", defaults.strict)
            .map_err(config_err)?
            .add_source(File::from(path).required(true))
            .build()
            .map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# nstree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/nstree/nstree.toml
#   Local:  ./.nstree.toml
#   Env:    NSTREE_* environment variables
#   Flags:  --on-collision, --style, --strict

# What CREATE and MOVE do when the target name already exists:
#   "replace" discards the existing subtree, "reject" fails the command
# on_collision = "replace"

# How LIST renders the tree: "indent" or "tree"
# list_style = "indent"

# Exit non-zero when any command in a batch failed
# strict = false
"#
        .to_string()
    }
}

fn parse_value<T: FromStr<Err = String>>(var: &str, val: &str) -> Result<T, ApplicationError> {
    val.parse().map_err(|e| ApplicationError::Config {
        message: format!("{var}: {e}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
