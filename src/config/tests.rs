// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::logging::LogLevel;
use crate::pipeline::DEFAULT_COMMIT_MESSAGE;

#[test]
fn defaults_are_usable() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.tools.sed, "sed");
    assert_eq!(config.commit.message, DEFAULT_COMMIT_MESSAGE);
    assert_eq!(config.commit.identity().name, "gitops");
    assert!(config.validate().is_ok());
}

#[test]
fn parse_toml_overrides_defaults() {
    let config = Config::parse(
        r#"
        [global]
        output_log_level = 4

        [commit]
        message = "Sync managed manifests"
        author_name = "Deploy Bot"
        author_email = "deploy@example.com"

        [tools]
        sed = "/usr/bin/sed"
        "#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.commit.message, "Sync managed manifests");
    assert_eq!(config.commit.identity().email, "deploy@example.com");
    assert_eq!(config.tools.sed, "/usr/bin/sed");
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = Config::parse("[commit]\nauthor_name = \"Bot\"\n").unwrap();
    assert_eq!(config.commit.author_name, "Bot");
    assert_eq!(config.commit.author_email, "gitops@localhost");
    assert_eq!(config.tools.sed, "sed");
}

#[test]
fn out_of_range_log_level_is_rejected() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err());
}

#[test]
fn unknown_fields_are_rejected() {
    let result = Config::parse("[global]\nno_such_option = true\n");
    assert!(result.is_err());
}

#[test]
fn empty_sed_binary_is_rejected() {
    let result = Config::parse("[tools]\nsed = \"\"\n");
    assert!(result.is_err());
}

#[test]
fn layered_sources_apply_in_order() {
    let config = Config::builder()
        .add_toml_str("[commit]\nmessage = \"first\"\n")
        .add_toml_str("[commit]\nmessage = \"second\"\n")
        .build()
        .unwrap();
    assert_eq!(config.commit.message, "second");
}
