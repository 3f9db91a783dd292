use {
    control::{ConfigError, PipelineConfig},
    std::time::Duration,
};

#[test]
fn test_config_defaults() {
    let config = PipelineConfig::default();
    assert_eq!(config.settle_delay(), Duration::from_millis(500));
    assert_eq!(config.vehicle_timeout(), Duration::from_secs(5));
    assert_eq!(config.inference_timeout(), Duration::from_secs(10));
    assert_eq!(config.model_input_size(), 224);
    assert_eq!(config.status_capacity(), 64);
}

#[test]
fn test_config_builder() {
    let config = PipelineConfig::default()
        .with_settle_delay(Duration::from_millis(250))
        .with_model_input_size(336);
    assert_eq!(config.settle_delay(), Duration::from_millis(250));
    assert_eq!(config.model_input_size(), 336);
    assert_eq!(config.vehicle_timeout(), Duration::from_secs(5)); // default
}

#[test]
fn test_config_partial_json() {
    let config = PipelineConfig::from_json(r#"{ "settle_delay_ms": 100, "status_capacity": 8 }"#)
        .unwrap();
    assert_eq!(config.settle_delay(), Duration::from_millis(100));
    assert_eq!(config.status_capacity(), 8);
    assert_eq!(config.inference_timeout(), Duration::from_secs(10));
}

#[test]
fn test_config_rejects_unknown_field() {
    let result = PipelineConfig::from_json(r#"{ "settle_delay": 100 }"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_load_missing_file() {
    let result = PipelineConfig::load("/nonexistent/vla-config.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_config_load_file() {
    let path = std::env::temp_dir().join(format!("vla-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "vehicle_timeout_ms": 1500 }"#).unwrap();
    let config = PipelineConfig::load(&path).unwrap();
    assert_eq!(config.vehicle_timeout(), Duration::from_millis(1500));
    std::fs::remove_file(&path).ok();
}
