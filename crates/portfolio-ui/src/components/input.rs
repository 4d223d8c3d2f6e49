//! Form Field Components
//!
//! Labelled text input and textarea bound to a string value. The label is
//! tied to the control through `id`, which callers must supply since a page
//! can hold several forms.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Marks the field as failing validation
    #[props(default = false)]
    pub invalid: bool,
}

/// Single-line text field
///
/// # Example
///
/// ```rust,ignore
/// let mut form = use_signal(ContactForm::default);
///
/// rsx! {
///     Input {
///         id: "email".to_string(),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         placeholder: "john@example.com".to_string(),
///         value: form.read().email.clone(),
///         oninput: move |v| form.write().email = v,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let class = field_class("input-field", props.invalid);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                "aria-invalid": props.invalid,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub invalid: bool,
}

/// Multi-line text field (not resizable)
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = field_class("input-field textarea", props.invalid);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                "aria-invalid": props.invalid,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

fn field_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} invalid", base)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_modifier() {
        assert_eq!(field_class("input-field", false), "input-field");
        assert_eq!(field_class("input-field", true), "input-field invalid");
    }
}
