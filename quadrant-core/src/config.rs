use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::mapper::{parse_quadrant, DEFAULT_JITTER};
use crate::models::Quadrant;
use crate::sizing::DotSizes;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "QUADRANT_CONFIG";

/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "quadrant.yaml";

/// How finely the grid is subdivided when drawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GridLayout {
    #[default]
    #[serde(rename = "2x2")]
    TwoByTwo,
    #[serde(rename = "4x4")]
    FourByFour,
}

impl GridLayout {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "2x2" | "2" => Some(GridLayout::TwoByTwo),
            "4x4" | "4" => Some(GridLayout::FourByFour),
            _ => None,
        }
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridLayout::TwoByTwo => write!(f, "2x2"),
            GridLayout::FourByFour => write!(f, "4x4"),
        }
    }
}

/// Display settings for the grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub title: String,

    pub layout: GridLayout,

    /// Half-width of the jitter range applied to new projects
    pub jitter: f64,

    pub dot_sizes: DotSizes,

    pub x_axis_title: String,

    pub y_axis_title: String,

    /// Draw the diagonal reference arrow
    pub show_diagonal: bool,

    /// Label overrides keyed by quadrant name (e.g. `onshore_ai`)
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub quadrant_labels: HashMap<String, String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            title: String::from("2x2 Process Maturity Grid"),
            layout: GridLayout::TwoByTwo,
            jitter: DEFAULT_JITTER,
            dot_sizes: DotSizes::default(),
            x_axis_title: String::from("Process Maturity →"),
            y_axis_title: String::from("Complexity Handled →"),
            show_diagonal: true,
            quadrant_labels: HashMap::new(),
        }
    }
}

impl GridConfig {
    /// Loads and validates a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: GridConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Loads the first config found, or the defaults when there is none.
    ///
    /// Lookup order: `$QUADRANT_CONFIG`, `./quadrant.yaml`, then
    /// `<config dir>/quadrant/config.yaml`.
    pub fn discover() -> Result<(Self, Option<PathBuf>)> {
        let explicit = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let cwd = env::current_dir().context("Failed to read the current directory")?;

        match resolve_config_path(explicit, &cwd, get_config_path()) {
            Some(path) => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            None => {
                debug!("No config file found, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..0.25).contains(&self.jitter) {
            return Err(ConfigError::InvalidJitter(self.jitter));
        }
        self.dot_sizes.validate()?;
        let mut labelled = HashSet::new();
        for key in self.quadrant_labels.keys() {
            let quadrant =
                parse_quadrant(key).ok_or_else(|| ConfigError::UnknownQuadrant(key.clone()))?;
            if !labelled.insert(quadrant) {
                return Err(ConfigError::DuplicateQuadrant(quadrant));
            }
        }
        Ok(())
    }

    /// Label drawn inside a quadrant, honouring overrides
    pub fn quadrant_label(&self, quadrant: Quadrant) -> String {
        self.quadrant_labels
            .iter()
            .find(|(key, _)| parse_quadrant(key) == Some(quadrant))
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| quadrant.to_string())
    }
}

/// Picks the config file to load, if any.
///
/// An explicit path always wins, even when it does not exist, so a typo in
/// `$QUADRANT_CONFIG` is reported instead of silently ignored.
pub fn resolve_config_path(
    explicit: Option<PathBuf>,
    cwd: &Path,
    user: Option<PathBuf>,
) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    user.filter(|path| path.exists())
}

/// Per-user config file path
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quadrant").join("config.yaml"))
}
