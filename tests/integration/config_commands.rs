//! Integration tests for `config` commands

use super::test_utils::TestEnv;
use template_cli::cli::{Commands, ConfigCommands, GlobalArgs, OutputArgs};
use template_cli::config::{ConfigDocument, FileFormat};
use template_cli::error::{CliError, ConfigError, PromptError};
use template_cli::output::OutputKind;
use template_cli::prompt::{Answer, DefaultsPrompter, ScriptedPrompter};

fn config(command: ConfigCommands) -> Commands {
    Commands::Config {
        command: Some(command),
    }
}

#[test]
fn test_get_prints_effective_value() {
    let env = TestEnv::new().with_env("TEMPLATE_ACCOUNT", "77");
    let out = env
        .run(
            &GlobalArgs::default(),
            config(ConfigCommands::Get {
                key: "account".into(),
            }),
            &mut DefaultsPrompter,
        )
        .unwrap();
    assert_eq!(out, "77\n");
}

#[test]
fn test_get_unknown_key_fails_not_found() {
    let env = TestEnv::new();
    let result = env.run(
        &GlobalArgs::default(),
        config(ConfigCommands::Get {
            key: "unknown-key".into(),
        }),
        &mut DefaultsPrompter,
    );
    assert!(matches!(
        result,
        Err(CliError::Config(ConfigError::NotFound(_)))
    ));
}

#[test]
fn test_set_invalid_bool_leaves_file_untouched() {
    let env = TestEnv::new();
    let path = env.write_user_file("default.yaml", "account: 1\n");

    let result = env.run(
        &GlobalArgs::default(),
        config(ConfigCommands::Set {
            key: "sandbox".into(),
            value: "notabool".into(),
        }),
        &mut DefaultsPrompter,
    );
    assert!(matches!(
        result,
        Err(CliError::Config(ConfigError::Parse { .. }))
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "account: 1\n");
}

#[test]
fn test_set_writes_active_file() {
    let env = TestEnv::new();
    let path = env.write_user_file("default.yaml", "account: 1\n");

    env.run(
        &GlobalArgs::default(),
        config(ConfigCommands::Set {
            key: "account".into(),
            value: "2020".into(),
        }),
        &mut DefaultsPrompter,
    )
    .unwrap();

    let document = ConfigDocument::read(&path).unwrap();
    assert_eq!(document.get("account"), Some(&serde_json::json!(2020)));
}

#[test]
fn test_set_without_file_creates_toml_profile() {
    let env = TestEnv::new();
    let global = GlobalArgs {
        profile: Some("work".into()),
        ..Default::default()
    };

    env.run(
        &global,
        config(ConfigCommands::Set {
            key: "base-url".into(),
            value: "http://localhost:3000".into(),
        }),
        &mut DefaultsPrompter,
    )
    .unwrap();

    let path = env.user_dir().join("work.toml");
    let document = ConfigDocument::read(&path).unwrap();
    assert_eq!(document.format(), FileFormat::Toml);
    assert_eq!(
        document.get("base-url"),
        Some(&serde_json::json!("http://localhost:3000"))
    );
}

#[test]
fn test_set_writes_named_file_that_does_not_exist_yet() {
    let env = TestEnv::new();
    let named = env.user_dir().join("explicit.yaml");
    let global = GlobalArgs {
        config_file: Some(named.clone()),
        ..Default::default()
    };

    env.run(
        &global,
        config(ConfigCommands::Set {
            key: "account".into(),
            value: "42".into(),
        }),
        &mut DefaultsPrompter,
    )
    .unwrap();

    let document = ConfigDocument::read(&named).unwrap();
    assert_eq!(document.format(), FileFormat::Yaml);
    assert_eq!(document.get("account"), Some(&serde_json::json!(42)));
    assert!(!env.user_dir().join("default.toml").exists());
}

#[test]
fn test_set_prefers_named_file_over_discovered_profile() {
    let env = TestEnv::new();
    let discovered = env.write_user_file("default.yaml", "account: 1\n");
    let named = env.user_dir().join("work.json");

    let global = GlobalArgs {
        config_file: Some(named.clone()),
        ..Default::default()
    };
    env.run(
        &global,
        config(ConfigCommands::Set {
            key: "sandbox".into(),
            value: "true".into(),
        }),
        &mut DefaultsPrompter,
    )
    .unwrap();

    assert_eq!(std::fs::read_to_string(&discovered).unwrap(), "account: 1\n");
    let document = ConfigDocument::read(&named).unwrap();
    assert_eq!(document.get("sandbox"), Some(&serde_json::json!(true)));
}

#[test]
fn test_set_with_empty_profile_uses_default_profile() {
    let env = TestEnv::new();
    let global = GlobalArgs {
        profile: Some(String::new()),
        ..Default::default()
    };

    let out = env
        .run(
            &global,
            config(ConfigCommands::Get {
                key: "account".into(),
            }),
            &mut DefaultsPrompter,
        )
        .unwrap();
    assert_eq!(out, "\n");

    env.run(
        &global,
        config(ConfigCommands::Set {
            key: "account".into(),
            value: "42".into(),
        }),
        &mut DefaultsPrompter,
    )
    .unwrap();

    let document = ConfigDocument::read(&env.user_dir().join("default.toml")).unwrap();
    assert_eq!(document.get("account"), Some(&serde_json::json!(42)));

    let loaded = env.loader().load(&global.flags()).unwrap();
    assert_eq!(loaded.config().profile(), "default");
}

#[test]
fn test_set_under_regular_file_fails_with_write_error() {
    let env = TestEnv::new();
    let blocker = env.write_user_file("blocker", "plain file");
    let global = GlobalArgs {
        config_file: Some(blocker.join("default.toml")),
        ..Default::default()
    };

    let result = env.run(
        &global,
        config(ConfigCommands::Set {
            key: "account".into(),
            value: "42".into(),
        }),
        &mut DefaultsPrompter,
    );
    assert!(matches!(
        result,
        Err(CliError::Config(ConfigError::Write { .. }))
    ));
}

#[test]
fn test_config_commands_tolerate_conflicting_sources() {
    let env = TestEnv::new().with_env("TEMPLATE_BASE_URL", "http://localhost");
    let global = GlobalArgs {
        sandbox: true,
        ..Default::default()
    };

    let out = env
        .run(
            &global,
            config(ConfigCommands::Get {
                key: "sandbox".into(),
            }),
            &mut DefaultsPrompter,
        )
        .unwrap();
    assert_eq!(out, "true\n");
}

#[test]
fn test_list_masks_token_in_every_format() {
    let env = TestEnv::new().with_env("TEMPLATE_ACCESS_TOKEN", "very-secret");
    for output in [OutputKind::Table, OutputKind::Json, OutputKind::Yaml] {
        let out = env
            .run(
                &GlobalArgs::default(),
                config(ConfigCommands::List {
                    output: OutputArgs {
                        output: Some(output),
                        query: None,
                    },
                }),
                &mut DefaultsPrompter,
            )
            .unwrap();
        assert!(!out.contains("very-secret"), "{} leaked the token", output);
    }
}

#[test]
fn test_list_table_layout() {
    let env = TestEnv::new().with_env("TEMPLATE_ACCOUNT", "1010");
    let out = env
        .run(
            &GlobalArgs::default(),
            config(ConfigCommands::List {
                output: OutputArgs::default(),
            }),
            &mut DefaultsPrompter,
        )
        .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "NAME          TYPE    VALUE");
    assert_eq!(lines[1], "account       string  1010");
    assert_eq!(lines[4], "sandbox       bool    false");
}

#[test]
fn test_interactive_setup_writes_profile() {
    let env = TestEnv::new();
    let mut prompter = ScriptedPrompter::new([
        Answer::Number(1010),
        Answer::Text("token".into()),
        Answer::Text("sandbox".into()),
        Answer::Text("yaml".into()),
        Answer::Bool(true),
    ]);

    let out = env
        .run(
            &GlobalArgs::default(),
            Commands::Config { command: None },
            &mut prompter,
        )
        .unwrap();
    assert!(out.starts_with("Configuring profile 'default'"));

    let path = env.user_dir().join("default.yaml");
    let document = ConfigDocument::read(&path).unwrap();
    assert_eq!(document.get("account"), Some(&serde_json::json!(1010)));
    assert_eq!(document.get("sandbox"), Some(&serde_json::json!(true)));
    assert_eq!(document.get("base-url"), None);
}

#[test]
fn test_interactive_setup_declined_writes_nothing() {
    let env = TestEnv::new();
    let mut prompter = ScriptedPrompter::new([
        Answer::Number(1010),
        Answer::Text("token".into()),
        Answer::Text("production".into()),
        Answer::Text("json".into()),
        Answer::Bool(false),
    ]);

    let result = env.run(
        &GlobalArgs::default(),
        Commands::Config { command: None },
        &mut prompter,
    );
    assert!(matches!(result, Err(CliError::Prompt(PromptError::Aborted))));
    assert!(!env.user_dir().join("default.json").exists());
}

#[test]
fn test_interactive_development_setup_round_trips() {
    let env = TestEnv::new();
    let mut prompter = ScriptedPrompter::new([
        Answer::Number(1),
        Answer::Text("token".into()),
        Answer::Text("development".into()),
        Answer::Text("http://localhost:9000".into()),
        Answer::Text("toml".into()),
        Answer::Bool(true),
    ]);

    env.run(
        &GlobalArgs::default(),
        Commands::Config { command: None },
        &mut prompter,
    )
    .unwrap();

    let reloaded = env
        .loader()
        .load(&GlobalArgs::default().flags())
        .unwrap();
    assert_eq!(reloaded.config().base_url(), Some("http://localhost:9000"));
    assert!(!reloaded.config().sandbox());
    assert!(reloaded.validated().is_ok());
}
