//! Unit tests for command argument handling.

use crate::InstallArgs;

#[test]
fn test_default_args_produce_no_overrides() {
    let args = InstallArgs::default();
    assert!(args.overrides().is_empty());
}

#[test]
fn test_provided_flags_become_overrides() {
    let args = InstallArgs {
        version: Some("6.5.*".to_string()),
        host: Some("linux".to_string()),
        tools: Some("tools_cmake".to_string()),
        set_env: Some("false".to_string()),
        ..Default::default()
    };

    let overrides = args.overrides();
    assert_eq!(overrides.get("version").map(String::as_str), Some("6.5.*"));
    assert_eq!(overrides.get("host").map(String::as_str), Some("linux"));
    assert_eq!(overrides.get("tools").map(String::as_str), Some("tools_cmake"));
    assert_eq!(overrides.get("set-env").map(String::as_str), Some("false"));
    assert!(!overrides.contains_key("target"));
}

#[test]
fn test_switches_only_override_when_given() {
    let args = InstallArgs {
        cached: true,
        ..Default::default()
    };

    let overrides = args.overrides();
    assert_eq!(overrides.get("cached").map(String::as_str), Some("true"));
    assert!(!overrides.contains_key("tools-only"));
}

#[test]
fn test_dir_override_is_rendered_as_path() {
    let args = InstallArgs {
        dir: Some("/opt/qt".into()),
        ..Default::default()
    };

    assert_eq!(
        args.overrides().get("dir").map(String::as_str),
        Some("/opt/qt")
    );
}
