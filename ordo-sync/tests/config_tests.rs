use ordo_sync::{SyncConfig, SyncError};
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn defaults() {
    let config = SyncConfig::default();
    assert_eq!(config.poll_interval(), Duration::from_secs(30));
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert!(config.poll_on_start);
}

#[test]
fn parses_full_toml() {
    let config = SyncConfig::from_toml_str(
        r#"
        poll_interval_ms = 5000
        request_timeout_ms = 2500
        poll_on_start = false
        "#,
    )
    .unwrap();

    assert_eq!(
        config,
        SyncConfig {
            poll_interval_ms: 5_000,
            request_timeout_ms: 2_500,
            poll_on_start: false,
        }
    );
}

#[test]
fn missing_keys_take_defaults() {
    let config = SyncConfig::from_toml_str("request_timeout_ms = 100").unwrap();
    assert_eq!(config.request_timeout_ms, 100);
    assert_eq!(config.poll_interval_ms, SyncConfig::default().poll_interval_ms);
}

#[test]
fn empty_document_is_default() {
    assert_eq!(SyncConfig::from_toml_str("").unwrap(), SyncConfig::default());
}

#[test]
fn wrong_type_is_a_config_error() {
    let err = SyncConfig::from_toml_str("poll_interval_ms = \"often\"").unwrap_err();
    assert!(matches!(err, SyncError::Config(_)));
    assert!(err.to_string().starts_with("config error"));
}

#[test]
fn zero_interval_is_clamped() {
    let config = SyncConfig {
        poll_interval_ms: 0,
        ..Default::default()
    };
    assert_eq!(config.poll_interval(), Duration::from_millis(1));
}
