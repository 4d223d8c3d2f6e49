//! Dialog Component
//!
//! Overlay plus centered panel. Clicking the overlay, the close button or
//! pressing Escape calls `on_close`; clicks inside the panel do not.

use dioxus::prelude::*;

use super::button::CloseButton;

/// Modal dialog shell
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Dialog {
///         open: selected().is_some(),
///         title: project.title.clone(),
///         description: project.description.clone(),
///         on_close: move |_| selected.set(None),
///         ProjectDetails { project }
///     }
/// }
/// ```
#[component]
pub fn Dialog(
    /// Whether the dialog is shown
    open: bool,
    title: String,
    /// Optional line under the title
    #[props(default)]
    description: Option<String>,
    on_close: EventHandler<()>,
    /// Extra class on the panel (e.g. width modifiers)
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    if !open {
        return VNode::empty();
    }

    let panel_class = match class.as_deref() {
        Some(extra) => format!("dialog-panel {}", extra),
        None => "dialog-panel".to_string(),
    };

    rsx! {
        div {
            class: "dialog-overlay",
            tabindex: "-1",
            // Take focus on open so Escape reaches the overlay
            onmounted: move |e: MountedEvent| async move {
                if let Err(err) = e.set_focus(true).await {
                    tracing::debug!(error = ?err, "Dialog overlay could not take focus");
                }
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if dismisses(&e.key()) {
                    on_close.call(());
                }
            },

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                header { class: "dialog-header",
                    div {
                        h2 { class: "dialog-title", "{title}" }
                        if let Some(desc) = &description {
                            p { class: "dialog-description", "{desc}" }
                        }
                    }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                {children}
            }
        }
    }
}

/// Keys that close an open dialog.
fn dismisses(key: &Key) -> bool {
    *key == Key::Escape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes() {
        assert!(dismisses(&Key::Escape));
    }

    #[test]
    fn other_keys_do_not_close() {
        assert!(!dismisses(&Key::Enter));
        assert!(!dismisses(&Key::Tab));
        assert!(!dismisses(&Key::Character("q".to_string())));
    }
}
