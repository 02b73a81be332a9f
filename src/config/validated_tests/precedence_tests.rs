//! Tests for CLI over TOML precedence.

use std::path::PathBuf;

use super::*;

const FULL_TOML: &str = r#"
    [webhook]
    url = "https://toml.example.com/hook"

    [auth]
    type = "basic"
    username = "toml-user"
    password = "toml-pass"

    [output]
    dir = "toml-downloads"
"#;

#[test]
fn cli_url_overrides_toml() {
    let cli = cli(&["--url", "https://cli.example.com/hook"]);
    let toml = toml(FULL_TOML);

    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
    assert_eq!(config.url.as_str(), "https://cli.example.com/hook");
}

#[test]
fn toml_values_used_without_cli() {
    let cli = cli(&[]);
    let toml = toml(FULL_TOML);

    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
    assert_eq!(config.url.as_str(), "https://toml.example.com/hook");
    assert_eq!(config.auth, AuthConfig::basic("toml-user", "toml-pass"));
    assert_eq!(config.output_dir, PathBuf::from("toml-downloads"));
}

#[test]
fn cli_output_dir_overrides_toml() {
    let cli = cli(&["-o", "cli-downloads"]);
    let toml = toml(FULL_TOML);

    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
    assert_eq!(config.output_dir, PathBuf::from("cli-downloads"));
}

#[test]
fn cli_auth_scheme_overrides_toml() {
    let cli = cli(&["--auth", "none"]);
    let toml = toml(FULL_TOML);

    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
    assert_eq!(config.auth, AuthConfig::None);
}

#[test]
fn cli_credential_overrides_single_toml_field() {
    let cli = cli(&["--password", "cli-pass"]);
    let toml = toml(FULL_TOML);

    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
    assert_eq!(config.auth, AuthConfig::basic("toml-user", "cli-pass"));
}

#[test]
fn init_command_uses_toml_output_dir() {
    let cli = Cli::parse_from_iter(["hookchat", "init"]);
    let toml = toml(FULL_TOML);

    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();
    assert_eq!(config.output_dir, PathBuf::from("toml-downloads"));
}
