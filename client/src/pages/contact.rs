//! Contact page: message form plus direct contact details.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form lives in a page-scoped signal and is dropped on navigation.
//! Submission latches the form through `ContactForm::begin_submit`, sends on
//! a local task, and applies the outcome with `try_update` so a response
//! arriving after unmount is discarded.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::net::contact::{ContactTransport, FALLBACK_EMAIL, HttpContactTransport};
use crate::state::contact::{ContactField, ContactForm, SubmitStatus};

const LINKEDIN_URL: &str = "https://www.linkedin.com/in/desmond-opoku-anane-39b5412b4/";
const GITHUB_URL: &str = "https://github.com/doanane";

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Sending Message..." } else { "Send Message" }
}

/// Shown when a submit is refused because a field is blank or only spaces.
fn incomplete_hint(form: &ContactForm) -> Option<&'static str> {
    (!form.is_submitting() && !form.is_complete()).then_some("Please fill in all required fields.")
}

/// `mailto:` link with a prefilled subject and greeting.
fn direct_mailto(address: &str) -> String {
    format!("mailto:{address}?subject=Portfolio%20Inquiry&body=Hello%20Desmond%2C%20I%27m%20interested%20in...")
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let submitting = Memo::new(move |_| form.with(ContactForm::is_submitting));
    let succeeded = Memo::new(move |_| form.with(|f| *f.status() == SubmitStatus::Succeeded));
    let failure = Memo::new(move |_| form.with(ContactForm::failure_message));
    let hint = RwSignal::new(None::<&'static str>);

    let field_value = move |field: ContactField| form.with(|f| f.field(field).to_owned());
    let on_field = move |field: ContactField, value: String| {
        hint.set(None);
        form.update(|f| {
            f.update_field(field, value);
        });
    };
    let dismiss = Callback::new(move |()| form.update(ContactForm::dismiss));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactForm::begin_submit).flatten() else {
            hint.set(form.with_untracked(incomplete_hint));
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = HttpContactTransport::default().send_contact(&payload).await;
            form.try_update(|f| f.finish_submit(outcome));
        });
    };

    view! {
        <div class="page-container contact-page">
            <div class="container mt-5 pt-5">
                <div class="page-header text-center mb-5">
                    <h1 class="display-4 fw-bold text-light mb-4">"Contact Me"</h1>
                    <p class="lead text-light opacity-75">
                        "Get in touch to discuss your project or opportunity"
                    </p>
                </div>
                <div class="row">
                    <div class="col-lg-8">
                        <Show when=move || succeeded.get()>
                            <Notice
                                kind="success"
                                title="Thank you!"
                                message=Signal::derive(|| {
                                    "Your message has been sent successfully. I'll get back to you soon!".to_owned()
                                })
                                on_dismiss=dismiss
                            />
                        </Show>
                        <Show when=move || failure.with(Option::is_some)>
                            <Notice
                                kind="warning"
                                title="Notice:"
                                message=Signal::derive(move || failure.get().unwrap_or_default())
                                on_dismiss=dismiss
                            />
                        </Show>
                        <div class="contact-form glass-effect p-4 rounded-4 mb-4">
                            <form on:submit=on_submit>
                                <div class="row">
                                    <div class="col-md-6 mb-3">
                                        <label class="form-label text-light">"Your Name *"</label>
                                        <input
                                            class="form-control"
                                            type="text"
                                            name="name"
                                            required
                                            prop:value=move || field_value(ContactField::Name)
                                            prop:disabled=move || submitting.get()
                                            on:input=move |ev| on_field(ContactField::Name, event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="col-md-6 mb-3">
                                        <label class="form-label text-light">"Email Address *"</label>
                                        <input
                                            class="form-control"
                                            type="email"
                                            name="email"
                                            required
                                            prop:value=move || field_value(ContactField::Email)
                                            prop:disabled=move || submitting.get()
                                            on:input=move |ev| on_field(ContactField::Email, event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                <div class="mb-4">
                                    <label class="form-label text-light">"Your Message *"</label>
                                    <textarea
                                        class="form-control"
                                        rows="6"
                                        name="message"
                                        required
                                        placeholder="Tell me about your project or how I can help you..."
                                        prop:value=move || field_value(ContactField::Message)
                                        prop:disabled=move || submitting.get()
                                        on:input=move |ev| on_field(ContactField::Message, event_target_value(&ev))
                                    ></textarea>
                                </div>
                                <Show when=move || hint.with(Option::is_some)>
                                    <p class="form-hint text-warning mb-3" role="alert">
                                        {move || hint.get().unwrap_or_default()}
                                    </p>
                                </Show>
                                <button
                                    type="submit"
                                    class="btn btn-primary btn-lg w-100 py-3"
                                    prop:disabled=move || submitting.get()
                                >
                                    <Show
                                        when=move || submitting.get()
                                        fallback=|| view! { <i class="bi bi-send me-2"></i> }
                                    >
                                        <span class="spinner-border spinner-border-sm me-2"></span>
                                    </Show>
                                    {move || submit_label(submitting.get())}
                                </button>
                            </form>
                        </div>
                    </div>
                    <div class="col-lg-4">
                        <div class="contact-info-section">
                            <h4 class="text-center mb-4">"Contact Information"</h4>
                            <div class="contact-item">
                                <i class="bi bi-envelope-fill"></i>
                                <div class="contact-details">
                                    <span class="contact-label">"Email"</span>
                                    <span class="contact-value">
                                        <a href=format!("mailto:{FALLBACK_EMAIL}")>{FALLBACK_EMAIL}</a>
                                    </span>
                                </div>
                            </div>
                            <div class="contact-item">
                                <i class="bi bi-geo-alt-fill"></i>
                                <div class="contact-details">
                                    <span class="contact-label">"Location"</span>
                                    <span class="contact-value">"Accra, Ghana"</span>
                                </div>
                            </div>
                            <div class="contact-item">
                                <i class="bi bi-telephone-fill"></i>
                                <div class="contact-details">
                                    <span class="contact-label">"Phone"</span>
                                    <span class="contact-value phone-number">"+233 554 64 0252"</span>
                                </div>
                            </div>
                            <div class="direct-email mt-4 p-3 rounded text-center">
                                <p class="text-light mb-2">"Prefer to email directly?"</p>
                                <a href=direct_mailto(FALLBACK_EMAIL) class="btn btn-outline-light btn-sm">
                                    <i class="bi bi-envelope me-2"></i>
                                    "Open Email Client"
                                </a>
                            </div>
                            <div class="social-links mt-4 text-center">
                                <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                                    <i class="bi bi-linkedin"></i>
                                </a>
                                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                                    <i class="bi bi-github"></i>
                                </a>
                                <a href=format!("mailto:{FALLBACK_EMAIL}")>
                                    <i class="bi bi-envelope"></i>
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
