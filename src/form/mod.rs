//! Client-side form controller.
//!
//! Holds the values a user typed, turns them into a [`ValidationRequest`],
//! and tracks the single in-flight submission through [`FormState`].

pub mod render;
pub mod transport;

pub use render::ResultPanel;
pub use transport::{HttpTransport, ValidateTransport};

use crate::error::{FormError, TransportError};
use crate::models::{AggregateResult, Country, ValidationRequest, DEFAULT_COUNTRY};
use serde_json::Value;

/// Message shown when the request fails outright.
pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to validate. Please try again.";

/// Raw values entered in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    pub email: String,
    pub phone: String,
    pub country: String,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

/// Where the controller is in a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Succeeded(AggregateResult),
    Failed(String),
}

/// Drives one form through submissions.
#[derive(Debug, Default)]
pub struct FormController {
    form: LeadForm,
    state: FormState,

    /// Local input message, set when a submission is refused before sending
    notice: Option<String>,
}

impl FormController {
    pub fn new(form: LeadForm) -> Self {
        Self {
            form,
            state: FormState::Idle,
            notice: None,
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True while a submission is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, FormState::Validating)
    }

    /// Message to show under the form, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FormState::Failed(message) => Some(message.as_str()),
            _ => self.notice(),
        }
    }

    /// Start a submission and return the request to send.
    ///
    /// Clears the previous result and message. Refuses while another
    /// submission is in flight, and when neither email nor phone is filled in.
    pub fn begin_submit(&mut self) -> Result<ValidationRequest, FormError> {
        if self.is_busy() {
            return Err(FormError::Busy);
        }

        self.state = FormState::Idle;
        self.notice = None;

        if let Err(e) = self.check_input() {
            self.notice = Some(e.to_string());
            return Err(e);
        }

        let country = Country::find(&self.form.country)
            .map(|c| c.code)
            .unwrap_or(DEFAULT_COUNTRY);

        self.state = FormState::Validating;
        Ok(ValidationRequest {
            email: Some(self.form.email.trim().to_string()).filter(|e| !e.is_empty()),
            phone: Some(self.form.phone.trim().to_string()).filter(|p| !p.is_empty()),
            country: Some(country.to_string()),
        })
    }

    fn check_input(&self) -> Result<(), FormError> {
        if self.form.email.trim().is_empty() && self.form.phone.trim().is_empty() {
            return Err(FormError::EmptyLead);
        }
        if Country::find(&self.form.country).is_none() {
            return Err(FormError::UnsupportedCountry(self.form.country.clone()));
        }
        Ok(())
    }

    /// Finish the in-flight submission with the endpoint's reply.
    pub fn complete(&mut self, reply: Result<Value, TransportError>) -> &FormState {
        self.state = match reply {
            Ok(body) => Self::interpret(body),
            Err(e) => {
                tracing::warn!("Validation request failed: {}", e);
                FormState::Failed(NETWORK_FAILURE_MESSAGE.to_string())
            }
        };
        &self.state
    }

    fn interpret(body: Value) -> FormState {
        match body.get("error") {
            Some(Value::String(message)) => return FormState::Failed(message.clone()),
            Some(Value::Null) | None => {}
            Some(other) => return FormState::Failed(other.to_string()),
        }

        match serde_json::from_value::<AggregateResult>(body) {
            Ok(result) => FormState::Succeeded(result),
            Err(e) => {
                tracing::warn!("Unexpected validation response: {}", e);
                FormState::Failed(NETWORK_FAILURE_MESSAGE.to_string())
            }
        }
    }

    /// Validate the current form through `transport`.
    pub fn submit<T>(&mut self, transport: &T) -> Result<&FormState, FormError>
    where
        T: ValidateTransport + ?Sized,
    {
        let request = self.begin_submit()?;
        let reply = transport.post_validate(&request);
        Ok(self.complete(reply))
    }
}
