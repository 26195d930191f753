//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/glyph/config.toml` (XDG) or platform config dir
//! 2. Project config: `.glyph.toml`
//! 3. Environment variables: `GLYPH_*`, nested keys separated by `__`
//!
//! Every key has a default, so Glyph runs without any config file.
//!
//! ```toml
//! [workspace]
//! marker = ".assistant"
//! summary_file = "_summary.md"
//!
//! [graph]
//! csv_file = "reference_graph.csv"
//! diagram_file = "reference_graph.md"
//! direction = "LR"
//! ```
//!
//! Environment example: `GLYPH_WORKSPACE__MARKER=.docs`.

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Layout of the documentation workspace inside a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Marker directory name; its presence means the workspace is initialized.
    pub marker: String,
    /// Index file excluded as a scan source (it lists every design log).
    pub summary_file: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            marker: ".assistant".to_string(),
            summary_file: "_summary.md".to_string(),
        }
    }
}

/// Output settings for the reference graph artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edge list file name, written inside the marker directory.
    pub csv_file: String,
    /// Diagram document file name, written inside the marker directory.
    pub diagram_file: String,
    /// Mermaid flowchart direction (LR, TD, ...).
    pub direction: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            csv_file: "reference_graph.csv".to_string(),
            diagram_file: "reference_graph.md".to_string(),
            direction: "LR".to_string(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// The full provider stack used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            // User config (lowest priority file)
            .merge(Toml::file(Self::user_config_path()))
            // Project config
            .merge(Toml::file(".glyph.toml"))
            // Environment variables (highest priority)
            .merge(Env::prefixed("GLYPH_").split("__"))
    }

    /// User config path: ~/.config/glyph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("glyph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("glyph").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_without_any_source() {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .unwrap();
        assert_eq!(config.workspace.marker, ".assistant");
        assert_eq!(config.workspace.summary_file, "_summary.md");
        assert_eq!(config.graph.csv_file, "reference_graph.csv");
        assert_eq!(config.graph.diagram_file, "reference_graph.md");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("[graph]\ndirection = \"TD\"\n"))
            .extract()
            .unwrap();
        assert_eq!(config.graph.direction, "TD");
        assert_eq!(config.graph.csv_file, "reference_graph.csv");
        assert_eq!(config.workspace.marker, ".assistant");
    }

    #[test]
    #[serial]
    fn test_env_overrides_nested_key() {
        std::env::set_var("GLYPH_WORKSPACE__MARKER", ".docs");
        let config = Config::load();
        std::env::remove_var("GLYPH_WORKSPACE__MARKER");

        let config = config.unwrap();
        assert_eq!(config.workspace.marker, ".docs");
        assert_eq!(config.workspace.summary_file, "_summary.md");
    }
}
