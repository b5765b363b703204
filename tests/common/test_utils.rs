use sentiment_form::{
    Result,
    api::{Prediction, SentimentLabel, ServiceError},
    config::ApiConfig,
};
use tempfile::TempDir;
use tokio::fs;

/// API config pointing at a mock server
pub fn api_config_for(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: Some(base_url.to_string()),
        ..ApiConfig::default()
    }
}

pub fn positive(confidence: f64) -> std::result::Result<Prediction, ServiceError> {
    Ok(Prediction::new(SentimentLabel::Positive, confidence))
}

pub fn server_error(status: u16, status_text: &str) -> std::result::Result<Prediction, ServiceError> {
    Err(ServiceError::Server {
        status,
        status_text: status_text.to_string(),
    })
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
api:
  base_url: "/sentiment"
  origin: "http://10.0.0.5:8080"
logs:
  level: "debug"
"#;
