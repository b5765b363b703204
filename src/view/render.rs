use crate::{
    api::SentimentLabel,
    form::{FormState, RequestStatus},
};
use std::fmt;

pub const TITLE: &str = "Sentiment Analysis";
pub const PLACEHOLDER: &str = "Write a movie review here...";
pub const SUBMIT_LABEL: &str = "Analyze sentiment";
pub const LOADING_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Positive => "#1ABC9C",
            Self::Negative => "#E74C3C",
            Self::Neutral => "#95A5A6",
        }
    }
}

impl From<SentimentLabel> for Tone {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => Self::Positive,
            SentimentLabel::Negative => Self::Negative,
            SentimentLabel::Neutral => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Empty,
    Loading,
    Error(String),
    Result {
        label: SentimentLabel,
        confidence_percent: u8,
        tone: Tone,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub input: String,
    pub button_label: &'static str,
    pub submit_enabled: bool,
    pub panel: Panel,
}

/// Rounds a confidence in [0, 1] to a whole percentage.
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

pub fn render(state: &FormState) -> View {
    let panel = match (state.status, &state.result, &state.error) {
        (RequestStatus::InFlight, _, _) => Panel::Loading,
        (_, _, Some(message)) => Panel::Error(message.clone()),
        (_, Some(prediction), None) => Panel::Result {
            label: prediction.label,
            confidence_percent: confidence_percent(prediction.confidence),
            tone: prediction.label.into(),
        },
        _ => Panel::Empty,
    };

    View {
        title: TITLE,
        placeholder: PLACEHOLDER,
        input: state.input.clone(),
        button_label: if state.is_in_flight() {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        },
        submit_enabled: state.is_submit_enabled(),
        panel,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Loading => f.write_str(LOADING_LABEL),
            Self::Error(message) => f.write_str(message),
            Self::Result {
                label,
                confidence_percent,
                ..
            } => write!(
                f,
                "{}\nConfidence: {}%",
                capitalize(label.as_str()),
                confidence_percent
            ),
        }
    }
}
