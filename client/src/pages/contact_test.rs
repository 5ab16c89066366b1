use super::*;

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.update_field(ContactField::Name, name);
    form.update_field(ContactField::Email, email);
    form.update_field(ContactField::Message, message);
    form
}

#[test]
fn submit_label_tracks_submitting_state() {
    assert_eq!(submit_label(true), "Sending Message...");
    assert_eq!(submit_label(false), "Send Message");
}

#[test]
fn direct_mailto_targets_address_with_subject() {
    let link = direct_mailto("me@example.com");
    assert!(link.starts_with("mailto:me@example.com?subject=Portfolio%20Inquiry"));
    assert!(!link.contains(' '));
}

#[test]
fn whitespace_only_field_gets_a_hint() {
    let form = filled("Ada", "ada@example.com", "   ");
    assert_eq!(incomplete_hint(&form), Some("Please fill in all required fields."));
}

#[test]
fn complete_form_gets_no_hint() {
    let form = filled("Ada", "ada@example.com", "Hello");
    assert_eq!(incomplete_hint(&form), None);
}

#[test]
fn in_flight_form_gets_no_hint() {
    let mut form = filled("Ada", "ada@example.com", "Hello");
    assert!(form.begin_submit().is_some());
    assert_eq!(incomplete_hint(&form), None);
}
