use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Submit is disabled while a request is in flight")]
    SubmitDisabled,

    #[error("Request {id} is not the one in flight")]
    StaleRequest { id: uuid::Uuid },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_transition(current: impl Into<String>, requested: impl Into<String>) -> Self {
        Self::InvalidTransition {
            current: current.into(),
            requested: requested.into(),
        }
    }
}
