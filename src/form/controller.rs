use super::{
    reducer::{FormEvent, Outcome, reduce},
    state::{FormState, RequestStatus},
};
use crate::{Error, Result, api::PredictionClient};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// A submit that passed validation and now owns the in-flight slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub id: Uuid,
    pub text: String,
}

/// Owns the form state and the client used to analyse it.
pub struct FormController<C: PredictionClient> {
    state: FormState,
    client: C,
    in_flight: Option<Uuid>,
}

impl<C: PredictionClient> FormController<C> {
    pub fn new(client: C) -> Self {
        Self {
            state: FormState::new(),
            client,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        // Edits are accepted in every status.
        if let Ok(next) = reduce(&self.state, FormEvent::Edited(text.into())) {
            self.state = next;
        }
    }

    /// Validates the input and, when it is usable, moves the form in flight.
    ///
    /// Returns `Ok(None)` for empty input (the validation message is already
    /// applied) and `Error::SubmitDisabled` while another request runs.
    pub fn begin_submit(&mut self) -> Result<Option<PendingRequest>> {
        if !self.state.is_submit_enabled() {
            warn!("Submit ignored: a prediction request is already in flight");
            return Err(Error::SubmitDisabled);
        }

        let text = match self.state.validate_input() {
            Ok(text) => text.to_string(),
            Err(reason) => {
                debug!("Submit rejected locally: {}", reason);
                self.dispatch(FormEvent::Resolved(Outcome::Rejected(reason)))?;
                return Ok(None);
            }
        };

        self.dispatch(FormEvent::Started)?;

        let pending = PendingRequest {
            id: Uuid::new_v4(),
            text,
        };
        self.in_flight = Some(pending.id);
        info!(request_id = %pending.id, "Prediction request started");
        Ok(Some(pending))
    }

    /// Applies the outcome of `pending`, re-enabling submit.
    ///
    /// Only the request currently in flight can be completed; any other
    /// handle is refused with `Error::StaleRequest` and the state is kept.
    pub fn complete(&mut self, pending: &PendingRequest, outcome: Outcome) -> Result<()> {
        if self.in_flight != Some(pending.id) {
            warn!(request_id = %pending.id, "Ignoring outcome of a request that is not in flight");
            return Err(Error::StaleRequest { id: pending.id });
        }

        match &outcome {
            Outcome::Succeeded(prediction) => info!(
                request_id = %pending.id,
                label = %prediction.label,
                confidence = prediction.confidence,
                "Prediction request succeeded"
            ),
            Outcome::Failed(err) => {
                error!(request_id = %pending.id, "Prediction request failed: {}", err)
            }
            Outcome::Rejected(reason) => {
                warn!(request_id = %pending.id, "Pending request resolved as rejected: {}", reason)
            }
        }
        self.dispatch(FormEvent::Resolved(outcome))?;
        self.in_flight = None;
        Ok(())
    }

    /// Sends `pending` to the prediction service and applies the outcome.
    pub async fn run(&mut self, pending: &PendingRequest) -> Result<()> {
        let outcome = match self.client.predict(&pending.text).await {
            Ok(prediction) => Outcome::Succeeded(prediction),
            Err(err) => Outcome::Failed(err),
        };

        self.complete(pending, outcome)
    }

    /// Runs one full submit: validation, the network call, and the outcome.
    pub async fn submit(&mut self) -> Result<&FormState> {
        let Some(pending) = self.begin_submit()? else {
            return Ok(&self.state);
        };

        self.run(&pending).await?;
        Ok(&self.state)
    }

    /// Convenience for edit followed by submit.
    pub async fn analyze(&mut self, text: impl Into<String>) -> Result<&FormState> {
        self.edit(text);
        self.submit().await
    }

    pub fn status(&self) -> RequestStatus {
        self.state.status
    }

    fn dispatch(&mut self, event: FormEvent) -> Result<()> {
        self.state = reduce(&self.state, event)?;
        Ok(())
    }
}
