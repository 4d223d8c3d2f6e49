//! Toast Notification
//!
//! Transient message in the corner of the window. The caller owns the
//! timeout; this component only renders.

use dioxus::prelude::*;

/// Visual tone of a toast
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastTone {
    #[default]
    Success,
    Error,
}

impl ToastTone {
    pub fn class(&self) -> &'static str {
        match self {
            ToastTone::Success => "toast toast-success",
            ToastTone::Error => "toast toast-error",
        }
    }
}

/// Content of a toast
#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub title: String,
    pub description: Option<String>,
    pub tone: ToastTone,
}

impl ToastMessage {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            tone: ToastTone::Success,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            tone: ToastTone::Error,
        }
    }
}

#[component]
pub fn Toast(message: ToastMessage, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: message.tone.class(),
            role: "status",
            onclick: move |_| on_dismiss.call(()),
            div { class: "toast-title", "{message.title}" }
            if let Some(desc) = &message.description {
                div { class: "toast-description", "{desc}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_tone() {
        let ok = ToastMessage::success("Message sent!", "Thanks");
        assert_eq!(ok.tone, ToastTone::Success);
        assert_eq!(ok.description.as_deref(), Some("Thanks"));

        let err = ToastMessage::error("Please enter a valid email address");
        assert_eq!(err.tone.class(), "toast toast-error");
        assert!(err.description.is_none());
    }
}
