//! Testimonials Section
//!
//! Grid of testimonial cards driven by the autoplay rotator. The rotator
//! task decides what each slot shows and when; this component forwards
//! hover, resize and refresh input to it and renders its snapshots.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{RotatorHandle, RotatorSnapshot, SlotView, Testimonial};
use portfolio_ui::{Button, ButtonSize, ButtonVariant, SectionHeading};

use crate::components::icons::{Icon, LucideIcon};
use crate::context::{use_site, use_viewport_width, ViewportWidth};

#[component]
pub fn TestimonialsSection() -> Element {
    let site = use_site();
    let viewport = use_viewport_width();

    let handle = use_hook(|| {
        Rc::new(RotatorHandle::spawn(
            site.content.testimonials.len(),
            viewport.peek().0,
            &site.config,
        ))
    });
    let mut snapshot: Signal<RotatorSnapshot> = use_signal(|| handle.snapshot());

    // Mirror rotator state into the signal
    use_future({
        let handle = handle.clone();
        move || {
            let mut updates = handle.subscribe();
            async move {
                while updates.changed().await.is_ok() {
                    let next = updates.borrow_and_update().clone();
                    snapshot.set(next);
                }
            }
        }
    });

    // Forward resizes; the rotator ignores widths that keep the same capacity
    use_effect({
        let handle = handle.clone();
        move || {
            let ViewportWidth(width) = viewport();
            handle.set_viewport_width(width);
        }
    });

    let on_enter = {
        let handle = handle.clone();
        move |_: MouseEvent| handle.set_hovered(true)
    };
    let on_leave = {
        let handle = handle.clone();
        move |_: MouseEvent| handle.set_hovered(false)
    };
    let on_refresh = {
        let handle = handle.clone();
        move |_: ()| handle.refresh()
    };

    let state = snapshot();
    if state.slots.is_empty() {
        return VNode::empty();
    }

    let columns = state.slots.len();
    let testimonials = site.content.testimonials.clone();

    rsx! {
        section { id: "testimonials", class: "page-section testimonials-section",
            SectionHeading {
                eyebrow: "Testimonials".to_string(),
                title: "What Clients Say".to_string(),
                lead: "Feedback from people I've had the pleasure of working with.".to_string(),
            }

            div {
                class: "testimonials-grid",
                style: "--testimonial-columns: {columns};",
                onmouseenter: on_enter,
                onmouseleave: on_leave,

                for (position, slot) in state.slots.iter().enumerate() {
                    if let Some(testimonial) = testimonials.get(slot.pool_index) {
                        TestimonialCard {
                            key: "{position}",
                            testimonial: testimonial.clone(),
                            slot: *slot,
                        }
                    }
                }
            }

            div { class: "testimonials-controls",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    disabled: state.animating,
                    onclick: on_refresh,
                    LucideIcon { icon: Icon::RefreshCw, size: 16 }
                    "Show others"
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, slot: SlotView) -> Element {
    let phase = slot.phase.class();

    rsx! {
        figure { class: "testimonial-card glass-panel {phase}",
            div { class: "testimonial-quote",
                LucideIcon { icon: Icon::Quote, size: 28 }
            }
            blockquote { class: "testimonial-text", "{testimonial.text}" }
            figcaption { class: "testimonial-author",
                if let Some(image) = &testimonial.image {
                    img { class: "testimonial-avatar", src: "{image}", alt: "{testimonial.name}" }
                } else {
                    div { class: "testimonial-avatar testimonial-initials", "{testimonial.initials()}" }
                }
                div {
                    div { class: "testimonial-name", "{testimonial.name}" }
                    div { class: "testimonial-byline", "{testimonial.byline()}" }
                }
            }
        }
    }
}
