// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::logging::LogLevel;
use clap::{CommandFactory, Parser};

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_explicit_options() {
    let cli = Cli::try_parse_from([
        "gitmeup",
        "--model",
        "gpt-4.1",
        "--apply",
        "--api-key",
        "sk-test",
        "--base-url",
        "http://localhost:8080/v1",
    ])
    .expect("valid arguments");

    assert_eq!(cli.model.as_deref(), Some("gpt-4.1"));
    assert!(cli.apply);
    assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080/v1"));
}

#[test]
fn test_apply_is_off_by_default() {
    let cli = Cli::try_parse_from(["gitmeup"]).expect("no arguments needed");
    assert!(!cli.apply);
    assert!(cli.global.configs.is_empty());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "gitmeup",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-l",
        "4",
        "--log-file",
        "gitmeup.log",
        "--file-log-level",
        "3",
    ])
    .expect("valid arguments");

    assert_eq!(
        cli.global.configs,
        [std::path::PathBuf::from("a.toml"), std::path::PathBuf::from("b.toml")]
    );
    let log = cli.global.log_config();
    assert_eq!(log.console_level(), LogLevel::DEBUG);
    assert_eq!(log.file_level(), LogLevel::INFO);
    assert_eq!(log.log_file(), Some(std::path::Path::new("gitmeup.log")));
}

#[test]
fn test_log_levels_default_to_warn_and_trace() {
    let cli = Cli::try_parse_from(["gitmeup"]).expect("no arguments needed");
    let log = cli.global.log_config();
    assert_eq!(log.console_level(), LogLevel::WARN);
    assert_eq!(log.file_level(), LogLevel::TRACE);
    assert!(log.log_file().is_none());
}

#[test]
fn test_log_level_out_of_range_is_rejected() {
    assert!(Cli::try_parse_from(["gitmeup", "-l", "6"]).is_err());
    assert!(Cli::try_parse_from(["gitmeup", "--file-log-level", "9"]).is_err());
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["gitmeup", "push"]).is_err());
}

#[test]
fn test_settings_layer_cli_over_config_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("extra.toml");
    std::fs::write(
        &path,
        "[model]\nname = \"from-file\"\nbase_url = \"http://file/v1\"\n\n[git]\nextra_excludes = [\"*.lock\"]\n",
    )
    .expect("write config");

    let config_arg = path.to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "gitmeup",
        "--config",
        config_arg.as_str(),
        "--model",
        "from-cli",
        "--base-url",
        "http://cli/v1",
        "--api-key",
        "sk-cli",
    ])
    .expect("valid arguments");

    let settings = cli.settings().expect("settings load");
    assert_eq!(settings.model.name, "from-cli");
    assert_eq!(settings.model.base_url, "http://cli/v1");
    assert_eq!(settings.api_key().expect("key present"), "sk-cli");
    assert_eq!(settings.git.extra_excludes, ["*.lock"]);
}

#[test]
fn test_missing_config_file_fails_settings() {
    let cli = Cli::try_parse_from(["gitmeup", "-c", "/definitely/not/here.toml"])
        .expect("valid arguments");
    assert!(cli.settings().is_err());
}
