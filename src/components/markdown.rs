//! Markdown Rendering
//!
//! Read-only markdown display for project write-ups.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert markdown to an HTML fragment (tables and strikethrough enabled)
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Render markdown content
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     Markdown { source: project.long_description.clone() }
/// }
/// ```
#[component]
pub fn Markdown(source: ReadOnlySignal<String>) -> Element {
    let html_content = use_memo(move || render_markdown(&source()));

    rsx! {
        div {
            class: "markdown-content",
            dangerous_inner_html: "{html_content}"
        }
    }
}
