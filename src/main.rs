//! AI Bildwerk landing page
//!
//! Client-side rendered Leptos app. The whole site is a single page;
//! navigation is in-page anchors only.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages land in the browser console instead of "unreachable"
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("AI Bildwerk landing page starting");

    // Hide the splash as soon as the WASM module is up; the App mount
    // effect does the same as a fallback.
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the `#leptos-loading` splash element from index.html.
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            log::warn!("no document available, cannot hide loading screen");
            return;
        }
    };

    let Some(loading) = document.get_element_by_id("leptos-loading") else {
        log::warn!("loading element #leptos-loading not found");
        return;
    };

    if let Some(element) = loading.dyn_ref::<HtmlElement>() {
        element.class_list().add_1("hidden").ok();
    }
    // display:none as backup in case the stylesheet did not load
    loading
        .set_attribute("style", "display: none !important;")
        .ok();
}
