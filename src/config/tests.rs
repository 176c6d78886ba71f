// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigLoader, DEFAULT_BASE_URL, DEFAULT_MODEL, Settings};
use crate::error::{ConfigError, GitmeupError};
use std::io::Write;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.model.name, DEFAULT_MODEL);
    assert_eq!(settings.model.base_url, DEFAULT_BASE_URL);
    assert!(settings.model.api_key.is_none());
    assert_eq!(settings.git.program, "git");
    assert!(settings.git.extra_excludes.is_empty());
    assert_eq!(settings.invocation_prefix(), "git ");
}

#[test]
fn test_empty_sources_build_defaults() {
    let settings = ConfigLoader::new().build().expect("defaults should load");
    assert_eq!(settings.model.name, DEFAULT_MODEL);
    assert_eq!(settings.git.program, "git");
}

#[test]
fn test_parse_toml_sections() {
    let settings = Settings::parse(
        r#"
[model]
name = "gpt-4.1"
base_url = "http://localhost:8080/v1"

[git]
program = "/usr/local/bin/git"
extra_excludes = ["*.lock", "*.min.js"]
"#,
    )
    .expect("valid config");

    assert_eq!(settings.model.name, "gpt-4.1");
    assert_eq!(settings.model.base_url, "http://localhost:8080/v1");
    assert_eq!(settings.git.program, "/usr/local/bin/git");
    assert_eq!(settings.git.extra_excludes, vec!["*.lock", "*.min.js"]);
    assert_eq!(settings.invocation_prefix(), "/usr/local/bin/git ");
}

#[test]
fn test_unknown_key_is_rejected() {
    let result = Settings::parse("[model]\nflavour = \"vanilla\"\n");
    assert!(result.is_err(), "unknown keys should be rejected");
}

#[test]
fn test_overrides_beat_files() {
    let settings = Settings::builder()
        .add_toml_str("[model]\nname = \"from-file\"\n")
        .set("model.name", "from-cli")
        .expect("override")
        .set_opt("model.api_key", Some("sk-test"))
        .expect("override")
        .set_opt::<String>("model.base_url", None)
        .expect("no-op")
        .build()
        .expect("valid config");

    assert_eq!(settings.model.name, "from-cli");
    assert_eq!(settings.api_key().expect("key present"), "sk-test");
    assert_eq!(settings.model.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_toml_files_layer_in_order() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");
    std::fs::File::create(&first)
        .and_then(|mut f| f.write_all(b"[model]\nname = \"first\"\nbase_url = \"http://first\"\n"))
        .expect("write first");
    std::fs::File::create(&second)
        .and_then(|mut f| f.write_all(b"[model]\nname = \"second\"\n"))
        .expect("write second");

    let loader = Settings::builder()
        .add_toml_file_optional(dir.path().join("missing.toml"))
        .add_toml_file(&first)
        .add_toml_file(&second);
    let sources = loader.format_loaded_files();
    assert_eq!(sources.len(), 2);
    assert!(sources[0].starts_with("1. [file] "));

    let settings = loader.build().expect("valid config");
    assert_eq!(settings.model.name, "second");
    assert_eq!(settings.model.base_url, "http://first");
}

#[test]
fn test_required_file_missing_is_error() {
    let result = Settings::builder()
        .add_toml_file("/definitely/not/here/gitmeup.toml")
        .build();
    assert!(matches!(result, Err(GitmeupError::Config(_))));
}

#[test]
fn test_validate_rejects_bad_program() {
    for program in ["", "git --no-pager"] {
        let mut settings = Settings::default();
        settings.git.program = program.to_string();
        let err = settings.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "program"),
            "{program:?}: {err}"
        );
    }
}

#[test]
fn test_validate_rejects_empty_model() {
    let result = Settings::parse("[model]\nname = \"  \"\n");
    assert!(result.is_err());
}

#[test]
fn test_api_key_missing_or_blank() {
    let mut settings = Settings::default();
    assert!(matches!(
        settings.api_key(),
        Err(ConfigError::MissingKey { .. })
    ));

    settings.model.api_key = Some("   ".to_string());
    assert!(settings.api_key().is_err());

    settings.model.api_key = Some(" sk-abc ".to_string());
    assert_eq!(settings.api_key().expect("present"), "sk-abc");
}

#[test]
fn test_debug_hides_api_key() {
    let mut settings = Settings::default();
    settings.model.api_key = Some("sk-secret".to_string());
    let debug = format!("{settings:?}");
    assert!(!debug.contains("sk-secret"));
    assert!(debug.contains("[hidden]"));
}
