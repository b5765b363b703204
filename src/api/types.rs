use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const UNREACHABLE_MESSAGE: &str =
    "Cannot reach the sentiment service. Make sure the backend server is running.";

pub const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "The sentiment service returned an unexpected response.";

#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    #[serde(alias = "positif")]
    Positive,
    #[serde(alias = "negatif")]
    Negative,
    #[serde(alias = "neutre")]
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    #[serde(alias = "negatif")]
    pub negative: f64,
    #[serde(alias = "positif")]
    pub positive: f64,
}

/// Label and confidence returned by the prediction service.
///
/// Backends that send the enriched response also report the raw binary
/// label (before low-confidence answers are turned into `neutral`) and the
/// per-class probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(alias = "prediction_finale")]
    pub label: SentimentLabel,
    #[serde(alias = "confiance")]
    pub confidence: f64,
    #[serde(
        default,
        alias = "prediction_binaire_brute",
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_label: Option<SentimentLabel>,
    #[serde(
        default,
        alias = "details_probabilites",
        skip_serializing_if = "Option::is_none"
    )]
    pub probabilities: Option<ClassProbabilities>,
}

impl Prediction {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self {
            label,
            confidence,
            raw_label: None,
            probabilities: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }
}

/// A failed call to the prediction service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("server responded with {status} {status_text}")]
    Server { status: u16, status_text: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Text shown in the result panel.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { status_text, .. } => format!("Server error: {}", status_text),
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
            Self::Decode(_) => UNEXPECTED_RESPONSE_MESSAGE.to_string(),
        }
    }
}
