use std::path::{Path, PathBuf};

use linguo_core::Language;
use serde::{Deserialize, Serialize};

/// A bundle file and the language its values are written in
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub language: Language,
    /// Relative paths are resolved against `Config::bundle_dir`
    pub file: PathBuf,
}

impl TargetConfig {
    pub fn new(language: Language, file: impl Into<PathBuf>) -> Self {
        Self {
            language,
            file: file.into(),
        }
    }

    pub fn resolve(&self, bundle_dir: &Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            bundle_dir.join(&self.file)
        }
    }
}

pub fn default_targets() -> Vec<TargetConfig> {
    vec![
        TargetConfig::new(Language::Zh, "zh.json"),
        TargetConfig::new(Language::En, "en.json"),
    ]
}
