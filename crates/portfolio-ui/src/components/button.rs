//! Button Components
//!
//! - Default: filled primary action
//! - Outline: bordered secondary action
//! - Ghost: text-only action
//!
//! Plus a size axis (small, default, large, icon) and a link-styled variant
//! for actions that navigate.

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled with the primary color
    #[default]
    Default,
    /// Transparent with a border
    Outline,
    /// No border, tinted on hover
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Default,
    Large,
    /// Square, for a single icon
    Icon,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Default => "",
            ButtonSize::Large => "btn-lg",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

/// Join the base, size and extra classes, skipping empty parts.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    ["btn", variant.class(), size.class(), extra.unwrap_or("")]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
    /// Accessible label when the content is only an icon
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         size: ButtonSize::Small,
///         onclick: move |_| selected.set(Some(project.clone())),
///         "View Details"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for LinkButton
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Open in a new window (external links)
    #[props(default = false)]
    pub external: bool,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Anchor styled as a button, for in-page jumps and external links
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());
    let target = if props.external { Some("_blank") } else { None };
    let rel = if props.external { Some("noopener noreferrer") } else { None };

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: target,
            rel: rel,
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            class: "close-btn".to_string(),
            aria_label: "Close".to_string(),
            onclick: onclick,
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Default.class(), "btn-default");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_class_skips_empty_parts() {
        assert_eq!(
            button_class(ButtonVariant::Default, ButtonSize::Default, None),
            "btn btn-default"
        );
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Icon, Some("rounded")),
            "btn btn-outline btn-icon rounded"
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
    }
}
