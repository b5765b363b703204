mod controller;
pub mod reducer;
pub mod state;

pub use controller::{FormController, PendingRequest};
pub use reducer::{FormEvent, Outcome, reduce};
pub use state::{FormState, RequestStatus, VALIDATION_MESSAGE, ValidationError};
