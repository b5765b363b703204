use super::types::*;
use crate::{Result, config::ApiConfig};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, error};

#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn predict(&self, text: &str) -> std::result::Result<Prediction, ServiceError>;
}

pub struct HttpPredictionClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let endpoint = config.predict_url()?;
        debug!("Creating prediction client for: {}", endpoint);

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, text: &str) -> std::result::Result<Prediction, ServiceError> {
        debug!("Sending prediction request ({} chars) to {}", text.len(), self.endpoint);

        let request = PredictRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach prediction service: {}", e);
                ServiceError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Prediction service responded with {}", status);
            return Err(ServiceError::Server {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string()),
            });
        }

        let prediction: Prediction = response.json().await.map_err(|e| {
            error!("Failed to parse prediction response: {}", e);
            ServiceError::Decode(e.to_string())
        })?;

        if !prediction.is_valid() {
            error!("Prediction confidence out of range: {}", prediction.confidence);
            return Err(ServiceError::Decode(format!(
                "confidence {} outside [0, 1]",
                prediction.confidence
            )));
        }

        debug!(
            "Received prediction {} with confidence {:.3}",
            prediction.label, prediction.confidence
        );
        Ok(prediction)
    }
}
