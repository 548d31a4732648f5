use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use linguo_config::Config;
use linguo_config::target::TargetConfig;
use linguo_core::Language;

#[derive(Debug, Parser)]
#[command(
    name = "linguo",
    version,
    about = "Insert missing translation keys into localization bundles"
)]
pub struct Cli {
    /// JSON config file (defaults and LINGUO_* env vars otherwise)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory that relative target files are resolved against
    #[arg(long, value_name = "DIR")]
    pub bundle_dir: Option<PathBuf>,

    /// Bundle to patch, repeatable; replaces the configured targets
    #[arg(long = "target", value_name = "LANG=FILE", value_parser = parse_target)]
    pub targets: Vec<TargetConfig>,

    /// Report missing keys without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_target(s: &str) -> Result<TargetConfig, String> {
    let (lang, file) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LANG=FILE, got `{s}`"))?;
    if file.is_empty() {
        return Err(format!("missing file for `{lang}`"));
    }
    let language: Language = lang.parse().map_err(|e| format!("{e}"))?;
    Ok(TargetConfig::new(language, file))
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        self.load_config_with(|key| env::var(key).ok())
    }

    /// Config file (or defaults), then `LINGUO_*` overrides from `lookup`, then flags
    pub fn load_config_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::default(),
        };
        let mut config = config.apply_overrides(lookup);

        if let Some(bundle_dir) = &self.bundle_dir {
            config.bundle_dir = bundle_dir.clone();
        }

        if !self.targets.is_empty() {
            config.targets = self.targets.clone();
        }

        Ok(config)
    }
}
