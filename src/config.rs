//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/arbor/arbor.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `ARBOR_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Where emitted lines go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Plain lines on stdout
    #[default]
    Stdout,
    /// INFO events through the tracing subscriber
    Log,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Stdout => write!(f, "stdout"),
            SinkKind::Log => write!(f, "log"),
        }
    }
}

/// Unified configuration for arbor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Leaf labels of the demo tree, in order
    pub labels: Vec<String>,
    /// Output sink for the action
    pub sink: SinkKind,
    /// Wait for Enter after the action
    pub pause: bool,
    /// Blueprint file replacing the demo tree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            labels: vec!["L1".into(), "L2".into(), "L3".into()],
            sink: SinkKind::Stdout,
            pause: true,
            tree_file: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub labels: Option<Vec<String>>,
    pub sink: Option<SinkKind>,
    pub pause: Option<bool>,
    pub tree_file: Option<PathBuf>,
}

/// Get the XDG config directory for arbor.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "arbor").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("arbor.toml"))
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
    /// Overlay wins wherever it specifies a value. Relative `tree_file` paths
    /// resolve against `base`, the directory of the file they came from.
    fn merge_with(&self, overlay: &RawSettings, base: Option<&Path>) -> Self {
        let tree_file = overlay
            .tree_file
            .as_ref()
            .map(|p| match base {
                Some(dir) if p.is_relative() => dir.join(p),
                _ => p.clone(),
            })
            .or_else(|| self.tree_file.clone());
        Self {
            labels: overlay.labels.clone().unwrap_or_else(|| self.labels.clone()),
            sink: overlay.sink.unwrap_or(self.sink),
            pause: overlay.pause.unwrap_or(self.pause),
            tree_file,
        }
    }

    fn merge_file(&self, path: &Path) -> Result<Self, ApplicationError> {
        let raw = load_raw_settings(path)?;
        Ok(self.merge_with(&raw, path.parent()))
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), config_file)
    }

    /// [`load`](Self::load) with the global config location given explicitly.
    /// A missing global file is skipped.
    pub fn load_from(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_file {
            if global_path.exists() {
                current = current.merge_file(global_path)?;
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            current = current.merge_file(path)?;
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply ARBOR_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ARBOR")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("labels")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get::<Vec<String>>("labels"), "ARBOR_LABELS")? {
            settings.labels = val;
        }
        if let Some(val) = env_value(config.get_string("sink"), "ARBOR_SINK")? {
            settings.sink = SinkKind::from_str(&val, true).map_err(|e| ApplicationError::Config {
                message: format!("ARBOR_SINK: {e}"),
            })?;
        }
        if let Some(val) = env_value(config.get_bool("pause"), "ARBOR_PAUSE")? {
            settings.pause = val;
        }
        if let Some(val) = env_value(config.get_string("tree_file"), "ARBOR_TREE_FILE")? {
            settings.tree_file = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# arbor configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/arbor/arbor.toml
#   File:   arbor --config <file>
#   Env:    ARBOR_* environment variables (ARBOR_LABELS=a,b,c)

# Leaf labels of the demo tree
# labels = ["L1", "L2", "L3"]

# Output sink: "stdout" or "log"
# sink = "stdout"

# Wait for Enter after the action
# pause = true

# Blueprint file replacing the demo tree (relative to this file)
# tree_file = "tree.toml"
"#
        .to_string()
    }
}

/// Unset variables yield `None`; values of the wrong type are errors.
fn env_value<T>(
    result: Result<T, ConfigError>,
    var: &str,
) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{var}: {e}"),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
