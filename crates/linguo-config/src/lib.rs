use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use linguo_core::patcher::{DEFAULT_INDENT, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};

use self::target::{TargetConfig, default_targets};

pub mod target;

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_bundle_dir() -> PathBuf {
    PathBuf::from("src/i18n/pages/poem-generate")
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to open config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Top-level object holding the page strings, empty for the bundle root
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_bundle_dir")]
    pub bundle_dir: PathBuf,
    /// Spaces per indentation level in written files
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Processed in order
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            bundle_dir: default_bundle_dir(),
            indent: default_indent(),
            targets: default_targets(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides
    pub fn new() -> Self {
        Self::default().apply_env()
    }

    /// Load a JSON config file as written, without environment overrides
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Override fields from `LINGUO_*` variables found through `lookup`
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(namespace) = lookup("LINGUO_NAMESPACE") {
            self.namespace = namespace;
        }

        if let Some(bundle_dir) = lookup("LINGUO_BUNDLE_DIR") {
            self.bundle_dir = PathBuf::from(bundle_dir);
        }

        match lookup("LINGUO_INDENT").map(|v| v.parse::<usize>()) {
            Some(Ok(indent)) => self.indent = indent,
            Some(Err(e)) => tracing::warn!("Ignoring invalid LINGUO_INDENT: {e}"),
            None => {}
        }

        self
    }

    /// Target files with their paths resolved against `bundle_dir`
    pub fn resolved_targets(&self) -> Vec<(PathBuf, linguo_core::Language)> {
        self.targets
            .iter()
            .map(|target| (target.resolve(&self.bundle_dir), target.language))
            .collect()
    }
}
