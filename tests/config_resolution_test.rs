mod common;

use std::path::PathBuf;
use std::sync::Arc;

use serial_test::serial;

use devflow::config::{ConfigResolver, EnvOverrides, Language, ScopeSetting, resolve_config};

use common::temp_test_dir;

#[test]
fn test_nearest_config_file_wins() {
    let dir = temp_test_dir();
    let nested = dir.path().join("packages/app/src");
    std::fs::create_dir_all(&nested).unwrap();

    std::fs::write(
        dir.path().join("devflow.config.json"),
        r#"{"defaults": {"maxChars": 100}}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("packages/app/.devflowrc"),
        r#"{"defaults": {"language": "es"}}"#,
    )
    .unwrap();

    let config = resolve_config(&nested, &EnvOverrides::default());

    assert_eq!(config.source, Some(dir.path().join("packages/app/.devflowrc")));
    assert_eq!(config.defaults.language, Language::Es);
    // Only the nearest file is used.
    assert_eq!(config.defaults.max_chars, 6000);
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let dir = temp_test_dir();
    std::fs::write(
        dir.path().join(".devflowrc.json"),
        r#"{"defaults": {"unified": 10}, "templates": {"review": "R: {{PROMPT}}"}}"#,
    )
    .unwrap();

    let config = resolve_config(dir.path(), &EnvOverrides::default());

    assert_eq!(config.defaults.unified, 10);
    assert_eq!(config.defaults.max_chars, 6000);
    assert_eq!(config.defaults.review_scope, ScopeSetting::All);
    assert_eq!(config.defaults.audit_scope, ScopeSetting::Staged);
    assert!(config.defaults.redact_secrets);
    assert_eq!(config.templates.for_command("review"), Some("R: {{PROMPT}}"));
    assert_eq!(config.templates.wrapper, None);
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let dir = temp_test_dir();
    std::fs::write(dir.path().join("devflow.config.json"), "{ not json").unwrap();

    let config = resolve_config(dir.path(), &EnvOverrides::default());

    assert_eq!(config.defaults.unified, 3);
    assert_eq!(config.source, Some(dir.path().join("devflow.config.json")));
}

#[test]
fn test_env_overrides_take_precedence() {
    let dir = temp_test_dir();
    std::fs::write(
        dir.path().join("devflow.config.json"),
        r#"{"defaults": {"redactSecrets": true}, "output": {"out": "file.md"}}"#,
    )
    .unwrap();

    let env = EnvOverrides {
        out: Some(PathBuf::from("env.md")),
        redact_secrets: Some(false),
        ..Default::default()
    };
    let config = resolve_config(dir.path(), &env);

    assert_eq!(config.output.out, Some(PathBuf::from("env.md")));
    assert!(!config.defaults.redact_secrets);
}

#[test]
fn test_explicit_config_path() {
    let dir = temp_test_dir();
    let custom = dir.path().join("custom.json");
    std::fs::write(&custom, r#"{"output": {"noClipboard": true}}"#).unwrap();
    std::fs::write(
        dir.path().join("devflow.config.json"),
        r#"{"output": {"noClipboard": false}}"#,
    )
    .unwrap();

    let env = EnvOverrides {
        config_path: Some(custom.clone()),
        ..Default::default()
    };
    let config = resolve_config(dir.path(), &env);

    assert_eq!(config.source, Some(custom));
    assert!(config.output.no_clipboard);
}

#[test]
#[serial]
fn test_resolver_reads_process_environment() {
    let dir = temp_test_dir();
    let custom = dir.path().join("team.json");
    std::fs::write(&custom, r#"{"defaults": {"language": "es"}}"#).unwrap();

    temp_env::with_vars(
        [
            ("DEVFLOW_CONFIG", Some(custom.to_str().unwrap())),
            ("DEVFLOW_REDACT_SECRETS", Some("off")),
            ("DEVFLOW_OUT", None),
            ("DEVFLOW_NO_CLIPBOARD", None),
        ],
        || {
            let mut resolver = ConfigResolver::from_env();
            let config = resolver.load(dir.path());

            assert_eq!(config.defaults.language, Language::Es);
            assert!(!config.defaults.redact_secrets);
        },
    );
}

#[test]
fn test_resolver_memoizes_until_reload() {
    let dir = temp_test_dir();
    let path = dir.path().join("devflow.config.json");
    std::fs::write(&path, r#"{"defaults": {"unified": 5}}"#).unwrap();

    let mut resolver = ConfigResolver::new(EnvOverrides::default());
    let first = resolver.load(dir.path());

    std::fs::write(&path, r#"{"defaults": {"unified": 9}}"#).unwrap();
    let second = resolver.load(dir.path());
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.defaults.unified, 5);

    let reloaded = resolver.reload(dir.path());
    assert_eq!(reloaded.defaults.unified, 9);
}

#[test]
fn test_one_bad_leaf_keeps_valid_siblings() {
    let dir = temp_test_dir();
    std::fs::write(
        dir.path().join("devflow.config.json"),
        r#"{"defaults": {"language": "fr", "unified": 10}, "output": {"noClipboard": true}, "templates": {"wrapper": "W {{PROMPT}}"}}"#,
    )
    .unwrap();

    let config = resolve_config(dir.path(), &EnvOverrides::default());

    assert_eq!(config.defaults.language, Language::En);
    assert_eq!(config.defaults.unified, 10);
    assert!(config.output.no_clipboard);
    assert_eq!(config.templates.wrapper.as_deref(), Some("W {{PROMPT}}"));
}

#[test]
fn test_non_string_template_does_not_drop_output_settings() {
    let dir = temp_test_dir();
    std::fs::write(
        dir.path().join(".devflowrc"),
        r#"{"output": {"noClipboard": true}, "templates": {"review": null, "audit": "A {{PROMPT}}"}}"#,
    )
    .unwrap();

    let config = resolve_config(dir.path(), &EnvOverrides::default());

    assert!(config.output.no_clipboard);
    assert_eq!(config.templates.for_command("review"), None);
    assert_eq!(config.templates.for_command("audit"), Some("A {{PROMPT}}"));
}

#[test]
fn test_blank_output_path_in_config_is_unset() {
    let dir = temp_test_dir();
    std::fs::write(
        dir.path().join("devflow.config.json"),
        r#"{"output": {"out": "  ", "noClipboard": true}}"#,
    )
    .unwrap();

    let config = resolve_config(dir.path(), &EnvOverrides::default());

    assert_eq!(config.output.out, None);
    assert!(config.output.no_clipboard);
}
