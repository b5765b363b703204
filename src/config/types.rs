use crate::{Error, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Path prefix used when no base URL is configured anywhere.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute URL or path prefix of the prediction service.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Origin that a relative `base_url` is resolved against.
    #[serde(default = "default_origin")]
    pub origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl ApiConfig {
    /// Replaces the configured base URL with an environment-supplied one.
    /// Blank values are ignored.
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(value.trim().to_string());
        }
    }

    pub fn base(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE)
    }

    /// Resolves `<base>/predict` into an absolute URL.
    pub fn predict_url(&self) -> Result<Url> {
        let base = self.base().trim_end_matches('/');

        let absolute = match Url::parse(base) {
            Ok(url) => url,
            Err(_) => {
                let origin = Url::parse(&self.origin).map_err(|e| {
                    Error::config(format!("Invalid API origin '{}': {}", self.origin, e))
                })?;
                origin.join(base).map_err(|e| {
                    Error::config(format!("Invalid API base URL '{}': {}", base, e))
                })?
            }
        };

        if absolute.cannot_be_a_base() {
            return Err(Error::config(format!(
                "API base URL '{}' cannot carry a path",
                absolute
            )));
        }

        let path = format!("{}/predict", absolute.path().trim_end_matches('/'));
        let mut url = absolute;
        url.set_path(&path);
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            origin: default_origin(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_origin() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
