//! Contact form state and submission lifecycle.
//!
//! DESIGN
//! ======
//! The form is a small state machine:
//! `Idle -> Submitting -> {Succeeded, Failed} -> Idle`.
//! `begin_submit` latches `Submitting` and hands out the payload, the host
//! awaits the transport, then `finish_submit` applies the outcome. Splitting
//! the cycle lets the Leptos page keep the form in a signal without holding
//! a borrow across the network await.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::{ContactTransport, SubmitError};
use crate::net::types::ContactPayload;

/// Identifies one of the three form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Where the current submission attempt stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

/// The contact form: three free-text fields plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// User-facing failure advisory, if the last attempt failed.
    pub fn failure_message(&self) -> Option<String> {
        match &self.status {
            SubmitStatus::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// All three fields hold something other than whitespace.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// Overwrite one field. Ignored while a submission is in flight.
    ///
    /// Any held success or failure notice is cleared. Returns whether the
    /// edit was applied.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
        self.status = SubmitStatus::Idle;
        true
    }

    /// Latch `Submitting` and return the payload to send.
    ///
    /// Returns `None` (and changes nothing) when a submission is already in
    /// flight or a required field is empty.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() || !self.is_complete() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Apply the outcome of the in-flight submission.
    ///
    /// Only the first completion after `begin_submit` is applied; returns
    /// `false` when the form was not submitting.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Succeeded;
            }
            Err(err) => self.status = SubmitStatus::Failed(err),
        }
        true
    }

    /// Close the success or failure notice.
    pub fn dismiss(&mut self) {
        if matches!(self.status, SubmitStatus::Succeeded | SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Run one full submission attempt against `transport`.
    ///
    /// Returns `false` without issuing a request when `begin_submit` refuses.
    pub async fn submit_with<T>(&mut self, transport: &T) -> bool
    where
        T: ContactTransport + ?Sized,
    {
        let Some(payload) = self.begin_submit() else {
            return false;
        };
        let outcome = transport.send_contact(&payload).await;
        self.finish_submit(outcome)
    }
}
