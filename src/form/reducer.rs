use super::state::{FormState, RequestStatus, ValidationError};
use crate::{
    Error, Result,
    api::{Prediction, ServiceError},
};
use tracing::{debug, info, warn};

/// What a single submit produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rejected(ValidationError),
    Failed(ServiceError),
    Succeeded(Prediction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Edited(String),
    Started,
    Resolved(Outcome),
}

impl FormEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Edited(_) => "Edited",
            Self::Started => "Started",
            Self::Resolved(Outcome::Rejected(_)) => "Rejected",
            Self::Resolved(Outcome::Failed(_)) => "Failed",
            Self::Resolved(Outcome::Succeeded(_)) => "Succeeded",
        }
    }
}

/// Applies `event` to `state`. Leaves no partial update behind: either the
/// whole new state is returned or the transition is refused.
pub fn reduce(state: &FormState, event: FormEvent) -> Result<FormState> {
    let old_status = state.status;
    debug!("Form processing event {} in status {:?}", event.name(), old_status);

    let event_name = event.name();
    let next = match (old_status, event) {
        (_, FormEvent::Edited(input)) => FormState {
            input,
            ..state.clone()
        },
        (RequestStatus::InFlight, FormEvent::Started)
        | (RequestStatus::InFlight, FormEvent::Resolved(Outcome::Rejected(_))) => {
            return Err(refuse(old_status, event_name));
        }
        (_, FormEvent::Started) => FormState {
            input: state.input.clone(),
            status: RequestStatus::InFlight,
            result: None,
            error: None,
        },
        (_, FormEvent::Resolved(Outcome::Rejected(reason))) => FormState {
            input: state.input.clone(),
            status: RequestStatus::Failed,
            result: None,
            error: Some(reason.user_message().to_string()),
        },
        (RequestStatus::InFlight, FormEvent::Resolved(Outcome::Failed(err))) => FormState {
            input: state.input.clone(),
            status: RequestStatus::Failed,
            result: None,
            error: Some(err.user_message()),
        },
        (RequestStatus::InFlight, FormEvent::Resolved(Outcome::Succeeded(prediction))) => {
            FormState {
                input: state.input.clone(),
                status: RequestStatus::Succeeded,
                result: Some(prediction),
                error: None,
            }
        }
        (_, FormEvent::Resolved(_)) => return Err(refuse(old_status, event_name)),
    };

    if old_status != next.status {
        info!(
            "Form status transition: {:?} -> {:?} (event: {})",
            old_status, next.status, event_name
        );
    }

    Ok(next)
}

fn refuse(status: RequestStatus, event_name: &str) -> Error {
    warn!(
        "Invalid form transition from {:?} with event {}",
        status, event_name
    );
    Error::invalid_transition(format!("{:?}", status), event_name)
}
