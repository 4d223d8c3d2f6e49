//! Contact Section
//!
//! Contact channels beside a validated message form. Submissions are
//! checked locally and acknowledged with a toast; nothing leaves the app.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::contact::{SENT_DESCRIPTION, SENT_TITLE};
use portfolio_core::{ContactError, ContactForm};
use portfolio_ui::{Button, ButtonSize, Input, SectionHeading, TextArea, Toast, ToastMessage};

use crate::components::icons::{Icon, LucideIcon};
use crate::context::use_site;

/// How long a toast stays up before dismissing itself
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[component]
pub fn ContactSection() -> Element {
    let site = use_site();
    let mut form = use_signal(ContactForm::default);
    let mut error: Signal<Option<ContactError>> = use_signal(|| None);
    let mut toast: Signal<Option<(u64, ToastMessage)>> = use_signal(|| None);
    let mut toast_seq = use_signal(|| 0u64);

    let mut show_toast = move |message: ToastMessage| {
        let id = toast_seq() + 1;
        toast_seq.set(id);
        toast.set(Some((id, message)));
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            // A newer toast owns the slot now
            if toast.peek().as_ref().map(|(current, _)| *current) == Some(id) {
                toast.set(None);
            }
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.read().validate();
        match result {
            Ok(message) => {
                tracing::info!(from = %message.email, subject = %message.subject, "Contact form submitted");
                error.set(None);
                form.write().clear();
                show_toast(ToastMessage::success(SENT_TITLE, SENT_DESCRIPTION));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form rejected");
                show_toast(ToastMessage::error(e.to_string()));
                error.set(Some(e));
            }
        }
    };

    let invalid = |field: &'static str| match error() {
        Some(ContactError::MissingField(missing)) => missing == field,
        Some(ContactError::InvalidEmail) => field == "email",
        None => false,
    };

    let channels = site.content.contact_channels.clone();
    let values = form.read().clone();

    rsx! {
        section { id: "contact", class: "page-section contact-section",
            SectionHeading {
                eyebrow: "Get In Touch".to_string(),
                title: "Let's Work Together".to_string(),
                lead: "Have a project in mind or just want to say hello? Send me a message.".to_string(),
            }

            div { class: "contact-grid",
                div { class: "contact-channels",
                    for channel in channels.iter() {
                        div { key: "{channel.value}", class: "contact-channel glass-panel",
                            div { class: "contact-channel-icon",
                                LucideIcon { icon: Icon::from(channel.kind), size: 22 }
                            }
                            div {
                                div { class: "contact-channel-label", "{channel.kind.label()}" }
                                div { class: "contact-channel-value", "{channel.value}" }
                            }
                        }
                    }
                }

                form { class: "contact-form glass-panel", novalidate: true, onsubmit: on_submit,
                    div { class: "form-row",
                        Input {
                            id: "contact-name".to_string(),
                            label: "Name".to_string(),
                            placeholder: "John Doe".to_string(),
                            value: values.name.clone(),
                            required: true,
                            invalid: invalid("name"),
                            oninput: move |v| form.write().name = v,
                        }
                        Input {
                            id: "contact-email".to_string(),
                            label: "Email".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "john@example.com".to_string(),
                            value: values.email.clone(),
                            required: true,
                            invalid: invalid("email"),
                            oninput: move |v| form.write().email = v,
                        }
                    }
                    Input {
                        id: "contact-subject".to_string(),
                        label: "Subject".to_string(),
                        placeholder: "Project inquiry".to_string(),
                        value: values.subject.clone(),
                        required: true,
                        invalid: invalid("subject"),
                        oninput: move |v| form.write().subject = v,
                    }
                    TextArea {
                        id: "contact-message".to_string(),
                        label: "Message".to_string(),
                        placeholder: "Tell me about your project...".to_string(),
                        value: values.message.clone(),
                        required: true,
                        invalid: invalid("message"),
                        oninput: move |v| form.write().message = v,
                    }
                    Button { button_type: "submit".to_string(), size: ButtonSize::Large, class: "contact-submit".to_string(),
                        LucideIcon { icon: Icon::Send, size: 18 }
                        "Send Message"
                    }
                }
            }

            if let Some((id, message)) = toast() {
                div { class: "toast-region",
                    Toast {
                        key: "{id}",
                        message,
                        on_dismiss: move |_| toast.set(None),
                    }
                }
            }
        }
    }
}
