/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use timesrt::app_config::{Config, LogLevel};
use timesrt::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.hour_offset, 0);
    assert!(!config.subtract_one_hour);
    assert_eq!(config.fps, 24.0);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test frame rate validation
#[test]
fn test_config_validation_withInvalidFps_shouldFail() {
    let mut config = Config::default();

    config.fps = 0.0;
    assert_eq!(config.validate(), Err(ConfigError::InvalidFps(0.0)));

    config.fps = -24.0;
    assert!(config.validate().is_err());

    config.fps = f64::NAN;
    assert!(config.validate().is_err());

    config.fps = 29.97;
    assert!(config.validate().is_ok());
}

/// Test loading a partial configuration file
#[test]
fn test_config_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "fps": 25.0, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.fps, 25.0);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.hour_offset, 0);
    assert!(!config.subtract_one_hour);

    Ok(())
}

/// Test loading a malformed configuration file
#[test]
fn test_config_from_file_withMalformedJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ fps: ")?;

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    Ok(())
}

/// Test serialization round trip of a full configuration
#[test]
fn test_config_serde_withAllFields_shouldPreserveValues() -> Result<()> {
    let config = Config {
        hour_offset: 2,
        subtract_one_hour: true,
        fps: 30.0,
        log_level: LogLevel::Warn,
    };

    let json = serde_json::to_string(&config)?;
    assert!(json.contains("\"log_level\":\"warn\""));
    let parsed: Config = serde_json::from_str(&json)?;
    assert_eq!(parsed, config);

    Ok(())
}

/// Test log level mapping
#[test]
fn test_log_level_to_level_filter_shouldMatch() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
