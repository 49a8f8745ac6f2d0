//! Decorative hero backdrop
//!
//! Fills the backdrop layer with softly glowing, randomly placed
//! gradient orbs. Purely cosmetic, generated once after mount.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::utils::constants::{BACKDROP_MOUNT_DELAY_MS, BACKDROP_ORB_COUNT};

#[component]
pub fn Backdrop() -> impl IntoView {
    // Populate after mount so the container exists in the DOM
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(BACKDROP_MOUNT_DELAY_MS).await;

        let container = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id("hero-backdrop"));
        match container.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()) {
            Some(element) => create_orbs(element),
            None => log::warn!("backdrop container not found, skipping orbs"),
        }
    });

    view! {
        <div class="hero-backdrop" id="hero-backdrop"></div>
    }
}

fn create_orbs(container: &HtmlElement) {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };

    for _ in 0..BACKDROP_ORB_COUNT {
        let Ok(orb) = document.create_element("div") else {
            continue;
        };
        orb.set_class_name("glow-orb");

        let left = js_sys::Math::random() * 100.0;
        let top = js_sys::Math::random() * 100.0;
        let size = js_sys::Math::random() * 180.0 + 60.0;
        let delay = js_sys::Math::random() * 6.0;

        // Every third orb or so drifts to the violet end of the brand
        // gradient, the rest stay indigo.
        let color = if js_sys::Math::random() > 0.66 {
            "rgba(118, 75, 162, 0.35)"
        } else {
            "rgba(102, 126, 234, 0.30)"
        };

        orb.set_attribute(
            "style",
            &format!(
                "left: {0:.2}%; top: {1:.2}%; width: {2:.0}px; height: {2:.0}px; \
                 background: {3}; animation-delay: {4:.2}s;",
                left, top, size, color, delay
            ),
        )
        .ok();

        container.append_child(&orb).ok();
    }
}
