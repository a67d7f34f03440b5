//! Integration tests for the core crate
//!
//! These tests verify that configuration, errors and logging work together.

use gate_core::{
    config::{load_config_or_default, GateConfig},
    error::{CoreError, Result},
};

#[test]
fn test_config_loading() {
    // Should load defaults when file doesn't exist
    let config = load_config_or_default("nonexistent.toml");
    assert_eq!(config.provider.name, "gemini");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = GateConfig::default();

    // Serialize to JSON
    let json = serde_json::to_string(&config).expect("Failed to serialize");

    // Deserialize back
    let deserialized: GateConfig = serde_json::from_str(&json).expect("Failed to deserialize");

    assert_eq!(config.provider.name, deserialized.provider.name);
    assert_eq!(config.provider.model, deserialized.provider.model);
}

#[test]
fn test_error_handling() {
    let result: Result<()> = Err(CoreError::config("test error"));
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(e.to_string().contains("test error"));
    }
}

#[test]
fn test_error_conversion() {
    // Test IO error conversion
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
    let core_err = CoreError::from(io_err);
    assert!(matches!(core_err, CoreError::Io(_)));
}

#[test]
fn test_custom_gate_config() {
    let json = r#"{
        "logging": {
            "level": "trace",
            "json": false
        },
        "provider": {
            "name": "openai",
            "model": "gpt-4o-mini",
            "api_key_env": "OPENAI_API_KEY"
        }
    }"#;

    let config: GateConfig = serde_json::from_str(json).expect("Failed to parse JSON");

    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.provider.name, "openai");
    assert_eq!(config.provider.model, "gpt-4o-mini");
}
