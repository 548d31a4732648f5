use std::path::PathBuf;

use clap::Parser;
use linguo_config::target::TargetConfig;
use linguo_core::Language;

use crate::cli::Cli;

#[test]
fn no_arguments_uses_default_targets() {
    let cli = Cli::try_parse_from(["linguo"]).unwrap();
    assert!(!cli.dry_run);
    assert!(cli.targets.is_empty());

    let config = cli.load_config_with(|_| None).unwrap();
    let languages: Vec<Language> = config.targets.iter().map(|t| t.language).collect();
    assert_eq!(languages, vec![Language::Zh, Language::En]);
}

#[test]
fn targets_replace_configured_ones() {
    let cli = Cli::try_parse_from([
        "linguo",
        "--bundle-dir",
        "locales",
        "--target",
        "ja=ja.json",
        "--target",
        "DE=de.json",
        "--dry-run",
    ])
    .unwrap();

    assert!(cli.dry_run);
    let config = cli.load_config_with(|_| None).unwrap();
    assert_eq!(config.bundle_dir, PathBuf::from("locales"));
    assert_eq!(
        config.targets,
        vec![
            TargetConfig::new(Language::Ja, "ja.json"),
            TargetConfig::new(Language::De, "de.json"),
        ]
    );
}

#[test]
fn malformed_target_is_rejected() {
    for target in ["zh.json", "zh=", "fr=fr.json"] {
        let parsed = Cli::try_parse_from(["linguo", "--target", target]);
        assert!(parsed.is_err(), "accepted --target {target}");
    }
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linguo.json");
    std::fs::write(&path, r#"{ "namespace": "home", "indent": 4 }"#).unwrap();

    let args = ["linguo", "--config", path.to_str().unwrap()];
    let cli = Cli::try_parse_from(args).unwrap();
    let config = cli.load_config_with(|_| None).unwrap();

    assert_eq!(config.namespace, "home");
    assert_eq!(config.indent, 4);
    assert_eq!(config.targets.len(), 2);
}

#[test]
fn env_overrides_file_and_flags_override_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linguo.json");
    std::fs::write(&path, r#"{ "namespace": "home" }"#).unwrap();

    let args = [
        "linguo",
        "--config",
        path.to_str().unwrap(),
        "--bundle-dir",
        "flag-dir",
    ];
    let cli = Cli::try_parse_from(args).unwrap();
    let config = cli
        .load_config_with(|key| match key {
            "LINGUO_NAMESPACE" => Some("from-env".to_string()),
            "LINGUO_BUNDLE_DIR" => Some("env-dir".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.namespace, "from-env");
    assert_eq!(config.bundle_dir, PathBuf::from("flag-dir"));
}
