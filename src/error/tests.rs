// gitmeup: Conventional Commits from the working tree
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    ConfigError, FormatError, GitError, GitmeupError, GitmeupResult, ProcessError, exit_code_of,
};

fn non_zero(code: i32) -> GitmeupError {
    ProcessError::NonZeroExit {
        command: "git commit -m wip".to_string(),
        code,
        stderr: "nothing added to commit".to_string(),
    }
    .into()
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "model".to_string(),
        key: "api_key".to_string(),
        hint: "set OPENAI_API_KEY".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'api_key' in section '[model]': set OPENAI_API_KEY"
    );
}

#[test]
fn test_non_zero_exit_display_carries_stderr() {
    insta::assert_snapshot!(
        non_zero(128).to_string(),
        @r"
    process error: Error running git commit -m wip:
    nothing added to commit
    "
    );
}

#[test]
fn test_exit_code_passes_child_code_through() {
    assert_eq!(non_zero(2).exit_code(), 2);
    assert_eq!(non_zero(128).exit_code(), 128);
}

#[test]
fn test_exit_code_clamps_out_of_range_codes() {
    assert_eq!(non_zero(-1).exit_code(), 1);
    assert_eq!(non_zero(0).exit_code(), 1);
    assert_eq!(non_zero(300).exit_code(), 1);
}

#[test]
fn test_exit_code_is_one_for_environment_and_format_errors() {
    let errors: Vec<GitmeupError> = vec![
        GitError::NotARepository.into(),
        FormatError::NoCommandBlock {
            raw: String::new(),
        }
        .into(),
        ConfigError::ParseError {
            message: "bad".to_string(),
        }
        .into(),
        ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        }
        .into(),
    ];
    for err in errors {
        assert_eq!(err.exit_code(), 1, "{err}");
    }
}

#[test]
fn test_exit_code_of_anyhow_looks_through_context() {
    let err = anyhow::Error::new(non_zero(3)).context("while applying commands");
    assert_eq!(exit_code_of(&err), 3);

    let plain = anyhow::anyhow!("something else");
    assert_eq!(exit_code_of(&plain), 1);
}

#[test]
fn test_gitmeup_error_size() {
    let size = std::mem::size_of::<GitmeupError>();
    assert!(size <= 24, "GitmeupError is {size} bytes, expected <= 24");
}

#[test]
fn test_gitmeup_result_size() {
    let size = std::mem::size_of::<GitmeupResult<()>>();
    assert!(size <= 24, "GitmeupResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_aborted_reports_and_passes_code() {
    let err: GitmeupError = ProcessError::Aborted {
        command: "git commit -m \"feat: x\"".to_string(),
        code: 1,
    }
    .into();
    insta::assert_snapshot!(err.message(), @"Command failed with exit code 1. Aborting.");
    assert_eq!(err.exit_code(), 1);

    let err: GitmeupError = ProcessError::Aborted {
        command: "git add a".to_string(),
        code: 128,
    }
    .into();
    assert_eq!(err.exit_code(), 128);
}

#[test]
fn test_message_drops_category_prefix() {
    let err: GitmeupError = GitError::NotARepository.into();
    assert_eq!(err.to_string(), "git error: gitmeup must be run inside a git repository.");
    assert_eq!(err.message(), "gitmeup must be run inside a git repository.");

    let err: GitmeupError = FormatError::NoCommandBlock {
        raw: "nope".to_string(),
    }
    .into();
    assert_eq!(
        err.message(),
        "gitmeup: failed to extract bash command block from model output."
    );
}

#[test]
fn test_message_for_missing_key_is_the_hint() {
    let err: GitmeupError = ConfigError::MissingKey {
        section: "model".to_string(),
        key: "api_key".to_string(),
        hint: "Missing OpenAI API key. Set OPENAI_API_KEY or use --api-key.".to_string(),
    }
    .into();
    assert_eq!(
        err.message(),
        "Missing OpenAI API key. Set OPENAI_API_KEY or use --api-key."
    );
}
