use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::contact::classify_response;

// =============================================================
// Helpers
// =============================================================

/// Transport that replays a fixed outcome and records every request.
struct ScriptedTransport {
    outcome: Result<(), SubmitError>,
    sent: RefCell<Vec<ContactPayload>>,
}

impl ScriptedTransport {
    fn new(outcome: Result<(), SubmitError>) -> Self {
        Self { outcome, sent: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl ContactTransport for ScriptedTransport {
    async fn send_contact(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        self.sent.borrow_mut().push(payload.clone());
        self.outcome.clone()
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.update_field(ContactField::Name, "Ada Lovelace");
    form.update_field(ContactField::Email, "ada@example.com");
    form.update_field(ContactField::Message, "Let's build an engine.");
    form
}

fn fields(form: &ContactForm) -> (String, String, String) {
    (
        form.field(ContactField::Name).to_owned(),
        form.field(ContactField::Email).to_owned(),
        form.field(ContactField::Message).to_owned(),
    )
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn new_form_is_empty_and_idle() {
    let form = ContactForm::new();
    assert_eq!(form.status(), &SubmitStatus::Idle);
    assert_eq!(fields(&form), (String::new(), String::new(), String::new()));
    assert!(!form.is_complete());
}

#[test]
fn edits_are_ignored_while_submitting() {
    let mut form = filled_form();
    assert!(form.begin_submit().is_some());
    assert!(!form.update_field(ContactField::Name, "Someone else"));
    assert_eq!(form.field(ContactField::Name), "Ada Lovelace");
    assert!(form.is_submitting());
}

#[test]
fn editing_after_failure_clears_message_but_keeps_values() {
    let mut form = filled_form();
    form.begin_submit();
    form.finish_submit(Err(SubmitError::NetworkUnavailable));
    assert!(form.failure_message().is_some());

    assert!(form.update_field(ContactField::Message, "Let's build an analytical engine."));
    assert_eq!(form.status(), &SubmitStatus::Idle);
    assert_eq!(form.failure_message(), None);
    assert_eq!(form.field(ContactField::Name), "Ada Lovelace");
    assert_eq!(form.field(ContactField::Email), "ada@example.com");
    assert_eq!(form.field(ContactField::Message), "Let's build an analytical engine.");
}

#[test]
fn editing_after_success_returns_to_idle() {
    let mut form = filled_form();
    form.begin_submit();
    form.finish_submit(Ok(()));
    form.update_field(ContactField::Name, "B");
    assert_eq!(form.status(), &SubmitStatus::Idle);
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn incomplete_form_does_not_submit() {
    let mut form = filled_form();
    form.update_field(ContactField::Email, "   ");
    let transport = ScriptedTransport::new(Ok(()));
    assert!(!block_on(form.submit_with(&transport)));
    assert_eq!(transport.calls(), 0);
    assert_eq!(form.status(), &SubmitStatus::Idle);
}

#[test]
fn success_clears_fields_and_holds_until_dismissed() {
    let mut form = filled_form();
    let transport = ScriptedTransport::new(Ok(()));
    assert!(block_on(form.submit_with(&transport)));

    assert_eq!(form.status(), &SubmitStatus::Succeeded);
    assert_eq!(fields(&form), (String::new(), String::new(), String::new()));
    assert_eq!(
        transport.sent.borrow()[0],
        ContactPayload {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "Let's build an engine.".to_owned(),
        }
    );

    form.dismiss();
    assert_eq!(form.status(), &SubmitStatus::Idle);
}

#[test]
fn failure_retains_submitted_values() {
    let mut form = filled_form();
    let before = fields(&form);
    let transport = ScriptedTransport::new(Err(SubmitError::Unknown));
    block_on(form.submit_with(&transport));

    assert_eq!(form.status(), &SubmitStatus::Failed(SubmitError::Unknown));
    assert_eq!(fields(&form), before);
}

#[test]
fn every_outcome_leaves_submitting() {
    let outcomes = [
        Ok(()),
        Err(SubmitError::ServerRejected("nope".to_owned())),
        Err(SubmitError::NetworkUnavailable),
        Err(SubmitError::Unknown),
    ];
    for outcome in outcomes {
        let mut form = filled_form();
        let transport = ScriptedTransport::new(outcome);
        block_on(form.submit_with(&transport));
        assert!(!form.is_submitting());
        assert!(matches!(form.status(), SubmitStatus::Succeeded | SubmitStatus::Failed(_)));
        assert_eq!(transport.calls(), 1);
    }
}

#[test]
fn double_submit_issues_one_request() {
    let mut form = filled_form();
    let first = form.begin_submit();
    let second = form.begin_submit();
    assert!(first.is_some());
    assert!(second.is_none());

    let transport = ScriptedTransport::new(Ok(()));
    assert!(!block_on(form.submit_with(&transport)));
    assert_eq!(transport.calls(), 0);

    let outcome = block_on(transport.send_contact(&first.unwrap()));
    assert!(form.finish_submit(outcome));
    assert_eq!(transport.calls(), 1);
}

#[test]
fn late_completion_is_ignored() {
    let mut form = filled_form();
    form.begin_submit();
    assert!(form.finish_submit(Err(SubmitError::NetworkUnavailable)));
    assert!(!form.finish_submit(Ok(())));
    assert_eq!(form.status(), &SubmitStatus::Failed(SubmitError::NetworkUnavailable));
    assert_eq!(form.field(ContactField::Name), "Ada Lovelace");
}

#[test]
fn server_detail_becomes_failure_message() {
    let mut form = filled_form();
    form.begin_submit();
    form.finish_submit(classify_response(400, r#"{"detail":"email invalid"}"#));
    assert_eq!(form.failure_message().as_deref(), Some("Error: email invalid"));
}

#[test]
fn network_failure_message_is_independent_of_fields() {
    let mut a = filled_form();
    let mut b = ContactForm::new();
    b.update_field(ContactField::Name, "x");
    b.update_field(ContactField::Email, "y");
    b.update_field(ContactField::Message, "z");

    let transport = ScriptedTransport::new(Err(SubmitError::NetworkUnavailable));
    block_on(a.submit_with(&transport));
    block_on(b.submit_with(&transport));

    let expected = "Network error: please check if the backend server is running";
    assert_eq!(a.failure_message().as_deref(), Some(expected));
    assert_eq!(b.failure_message().as_deref(), Some(expected));
}

#[test]
fn dismiss_is_noop_when_idle_or_submitting() {
    let mut form = filled_form();
    form.dismiss();
    assert_eq!(form.status(), &SubmitStatus::Idle);
    form.begin_submit();
    form.dismiss();
    assert!(form.is_submitting());
}
