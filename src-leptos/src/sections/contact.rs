//! Contact section: screening, status feedback, and transport dispatch.
//!
//! The submit handler is a thin shell around [`ContactDraft::screen`]:
//! spam and invalid drafts are settled right here, and only a clean draft
//! reaches the configured transport. Exactly one request leaves the page
//! per accepted submission.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use noorverse_types::{is_valid_email, ContactDraft, SubmitAction};

use crate::api;
use crate::components::{FormStatus, StatusMessage};
use crate::config::SiteConfig;

const FORM_ID: &str = "contactForm";
/// Selector handed to the EmailJS SDK, which reads fields off the live form.
const FORM_SELECTOR: &str = "#contactForm";

const SENDING_TEXT: &str = "Sending your message...";
const SUCCESS_TEXT: &str = "Alhamdulillah! Your message has been sent.";
const FAILURE_TEXT: &str = "Sorry, sending failed. Please try again or email us directly.";
const HONEYPOT_TEXT: &str = "Thank you! If this was a mistake, please submit again.";
const BLUR_EMAIL_TEXT: &str = "Please enter a valid email.";

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let dua = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());

    let status = RwSignal::new(Option::<StatusMessage>::None);
    let sending = RwSignal::new(false);

    let reset_fields = move || {
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
        dua.set(String::new());
        website.set(String::new());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // One dispatch at a time.
        if sending.get_untracked() {
            return;
        }

        let draft = ContactDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
            dua: dua.get_untracked(),
            website: website.get_untracked(),
        };

        match draft.screen() {
            SubmitAction::PretendSuccess => {
                // Bots get the success line and nothing leaves the page.
                status.set(Some(StatusMessage::success(HONEYPOT_TEXT)));
                reset_fields();
            }
            SubmitAction::Reject(err) => {
                status.set(Some(StatusMessage::error(err.to_string())));
            }
            SubmitAction::Deliver(payload) => {
                let Some(transport) = config.transport.clone() else {
                    log::error!("contact transport not configured");
                    status.set(Some(StatusMessage::error(FAILURE_TEXT)));
                    return;
                };
                sending.set(true);
                status.set(Some(StatusMessage::info(SENDING_TEXT)));
                spawn_local(async move {
                    match api::deliver(&transport, &payload, FORM_SELECTOR).await {
                        Ok(()) => {
                            status.set(Some(StatusMessage::success(SUCCESS_TEXT)));
                            reset_fields();
                        }
                        Err(err) => {
                            log::error!("contact send via {} failed: {err}", transport.name());
                            status.set(Some(StatusMessage::error(FAILURE_TEXT)));
                        }
                    }
                    // Always re-arm the submit control.
                    sending.set(false);
                });
            }
        }
    };

    // Courtesy check while filling the form, independent of submission.
    let on_email_blur = move |_| {
        let value = email.get_untracked();
        if !value.is_empty() && !is_valid_email(&value) {
            status.set(Some(StatusMessage::error(BLUR_EMAIL_TEXT)));
        }
    };

    view! {
        <section id="contact" class="contact fade-in">
            <h2>"Contact Us"</h2>
            <p class="section-intro">"Questions, suggestions, or a dua request? Write to us."</p>
            <form id=FORM_ID class="contact-form" novalidate=true on:submit=on_submit>
                <label for="name">"Name"</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    autocomplete="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label for="email">"Email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:blur=on_email_blur
                />
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <label for="dua">"Dua request (optional)"</label>
                <textarea
                    id="dua"
                    name="dua"
                    rows="2"
                    prop:value=move || dua.get()
                    on:input=move |ev| dua.set(event_target_value(&ev))
                ></textarea>
                // Honeypot: humans never see or fill this field.
                <input
                    id="website"
                    name="website"
                    type="text"
                    class="visually-hidden"
                    tabindex="-1"
                    autocomplete="off"
                    aria-hidden="true"
                    prop:value=move || website.get()
                    on:input=move |ev| website.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
            <FormStatus status=status />
        </section>
    }
}
