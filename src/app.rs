use dioxus::prelude::*;

use crate::context::{SiteContext, ViewportWidth};
use crate::get_site;
use crate::pages::Index;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The single portfolio page; sections are reached by anchor links
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
}

/// Root application component.
///
/// Provides global styles, site context, the viewport width signal and
/// routing.
#[component]
pub fn App() -> Element {
    let (config, content) = use_hook(get_site);
    let initial_width = config.window.width;

    use_context_provider(|| SiteContext::new(config.clone(), content.clone()));
    use_context_provider(|| Signal::new(ViewportWidth(initial_width)));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
