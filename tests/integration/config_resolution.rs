//! Integration tests for configuration resolution

use super::test_utils::TestEnv;
use template_cli::config::{FlagOverrides, SANDBOX_BASE_URL};
use template_cli::error::ConfigError;

#[test]
fn test_user_profile_file_is_loaded() {
    let env = TestEnv::new();
    let path = env.write_user_file("default.yaml", "account: 1010\naccess-token: file-token\n");

    let loaded = env.loader().load(&FlagOverrides::default()).unwrap();
    assert_eq!(loaded.file(), Some(path.as_path()));
    assert_eq!(loaded.config().account(), Some("1010"));
    assert_eq!(loaded.config().access_token(), Some("file-token"));
}

#[test]
fn test_system_file_used_when_user_file_missing() {
    let env = TestEnv::new();
    let path = env.write_system_file("default.toml", "sandbox = true\n");

    let loaded = env.loader().load(&FlagOverrides::default()).unwrap();
    assert_eq!(loaded.file(), Some(path.as_path()));
    assert!(loaded.config().sandbox());
    assert_eq!(loaded.config().api_base_url(), SANDBOX_BASE_URL);
}

#[test]
fn test_profile_selects_file() {
    let env = TestEnv::new().with_env("TEMPLATE_PROFILE", "work");
    env.write_user_file("default.json", r#"{"account": "1"}"#);
    env.write_user_file("work.json", r#"{"account": "2"}"#);

    let loaded = env.loader().load(&FlagOverrides::default()).unwrap();
    assert_eq!(loaded.config().profile(), "work");
    assert_eq!(loaded.config().account(), Some("2"));
}

#[test]
fn test_explicit_file_precedence_flag_over_env() {
    let env = TestEnv::new();
    let from_env = env.write_user_file("env.yaml", "account: 1\n");
    let from_flag = env.write_user_file("flag.yaml", "account: 2\n");
    let env = env.with_env("TEMPLATE_CONFIG_FILE", from_env.to_str().unwrap());

    let loaded = env.loader().load(&FlagOverrides::default()).unwrap();
    assert_eq!(loaded.config().account(), Some("1"));

    let flags = FlagOverrides {
        config_file: Some(from_flag),
        ..Default::default()
    };
    let loaded = env.loader().load(&flags).unwrap();
    assert_eq!(loaded.config().account(), Some("2"));
}

#[test]
fn test_environment_overrides_file_and_flag_overrides_environment() {
    let env = TestEnv::new()
        .with_env("TEMPLATE_BASE_URL", "http://env")
        .with_env("TEMPLATE_ACCESS_TOKEN", "env-token");
    env.write_user_file("default.yaml", "base-url: http://file\naccess-token: file-token\n");

    let loaded = env.loader().load(&FlagOverrides::default()).unwrap();
    assert_eq!(loaded.config().base_url(), Some("http://env"));

    let flags = FlagOverrides {
        access_token: Some("flag-token".to_string()),
        ..Default::default()
    };
    let loaded = env.loader().load(&flags).unwrap();
    assert_eq!(loaded.config().access_token(), Some("flag-token"));
    // untouched by the flag layer
    assert_eq!(loaded.config().base_url(), Some("http://env"));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let env = TestEnv::new();
    env.write_user_file("default.json", "{ account: ");

    let result = env.loader().load(&FlagOverrides::default());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_missing_file_everywhere_is_fine() {
    let env = TestEnv::new();
    let loaded = env.loader().load(&FlagOverrides::default()).unwrap();
    assert!(loaded.file().is_none());
    assert!(loaded.validated().is_ok());
}

#[test]
fn test_conflict_reported_by_validation_only() {
    let env = TestEnv::new().with_env("TEMPLATE_SANDBOX", "true");
    env.write_user_file("default.yaml", "base-url: http://localhost:8080\n");

    let loaded = env.loader().load(&FlagOverrides::default()).unwrap();
    assert!(loaded.config().sandbox());
    assert!(matches!(
        loaded.validated(),
        Err(ConfigError::Conflicting(_))
    ));
}

#[test]
fn test_empty_environment_value_is_unset() {
    let env = TestEnv::new().with_env("TEMPLATE_ACCOUNT", "");
    env.write_user_file("default.yaml", "account: 5\n");

    let loaded = env.loader().load(&FlagOverrides::default()).unwrap();
    assert_eq!(loaded.config().account(), Some("5"));
}
