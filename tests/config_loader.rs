use cipherscope::config::{Config, ConfigError};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.defaults.shift, 3);
    assert_eq!(config.defaults.text, "HELLO WORLD");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

/// Test that Config::config_path() ends with the expected location.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("cipherscope/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validation_rejects_out_of_range_shift() {
    let mut config = Config::default();
    config.defaults.shift = 26;
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("out of range"));
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_load_from_parses_a_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[defaults]\nshift = 13\ntext = \"ATTACK AT DAWN\"\n\n[ui]\ntick_rate_ms = 100\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.shift, 13);
    assert_eq!(config.defaults.text, "ATTACK AT DAWN");
    assert_eq!(config.ui.tick_rate_ms, 100);
}

/// Missing keys fall back to their serde defaults.
#[test]
fn test_load_from_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nshift = 7\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.shift, 7);
    assert_eq!(config.defaults.text, "HELLO WORLD");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_load_from_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "defaults = not toml").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_load_from_rejects_a_validation_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nshift = 26\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_load_from_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ReadError { .. })
    ));
}
