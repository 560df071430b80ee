use ilprun::config::{Config, ConfigError, Defaults, LoggingConfig};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.defaults.time_limit_secs, 3600);
    assert_eq!(config.logging.filter, "warn");
    assert_eq!(config.base_solver_configuration().time_limit_secs, 3600);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with("ilprun/config.toml"));
    }
}

/// Test that a missing settings file yields the defaults.
#[test]
fn test_missing_file_returns_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

/// Test parsing a complete settings file.
#[test]
fn test_load_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[defaults]
time_limit_secs = 120

[logging]
filter = "ilprun=debug"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.time_limit_secs, 120);
    assert_eq!(config.logging.filter, "ilprun=debug");
    assert_eq!(config.base_solver_configuration().time_limit_secs, 120);
}

/// Test that omitted sections and keys fall back to their defaults.
#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nfilter = \"info\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults, Defaults::default());
    assert_eq!(config.logging.filter, "info");
}

/// Test that malformed TOML is reported as a parse error naming the file.
#[test]
fn test_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults\ntime_limit_secs = ").unwrap();

    match Config::load_from(&path).unwrap_err() {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected Parse, got: {other:?}"),
    }
}

/// Test that a wrongly typed value is a parse error.
#[test]
fn test_wrong_type_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\ntime_limit_secs = \"soon\"\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}

/// Test validation fails when the default time limit is zero.
#[test]
fn test_validation_fails_zero_time_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\ntime_limit_secs = 0\n").unwrap();

    match Config::load_from(&path).unwrap_err() {
        ConfigError::Invalid(message) => {
            assert!(message.contains("time_limit_secs"), "got: {message}");
        }
        other => panic!("Expected Invalid, got: {other:?}"),
    }
}

/// Test validation fails when the log filter is blank.
#[test]
fn test_validation_fails_blank_filter() {
    let config = Config {
        defaults: Defaults::default(),
        logging: LoggingConfig {
            filter: "   ".to_string(),
        },
    };

    let err = config.validate().unwrap_err().to_string();
    assert!(err.contains("logging.filter"), "got: {err}");
}

/// Test that a directory in place of the file is a read error.
#[test]
fn test_unreadable_path_is_read_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        Config::load_from(dir.path()),
        Err(ConfigError::Read { .. })
    ));
}
