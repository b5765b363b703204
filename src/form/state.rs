use crate::api::Prediction;
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please enter text before analyzing.";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input text is empty")]
    EmptyInput,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => VALIDATION_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Everything the form displays. Only the reducer produces new values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub input: String,
    pub status: RequestStatus,
    pub result: Option<Prediction>,
    pub error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == RequestStatus::InFlight
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.is_in_flight()
    }

    /// Checks the input the way a submit would, without touching state.
    pub fn validate_input(&self) -> Result<&str, ValidationError> {
        if self.input.trim().is_empty() {
            Err(ValidationError::EmptyInput)
        } else {
            Ok(&self.input)
        }
    }
}
