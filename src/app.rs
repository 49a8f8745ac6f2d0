//! AI Bildwerk Landing Page - Leptos Root Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::{Footer, Navbar};
use crate::pages::HomePage;
use crate::state::upload::provide_upload_context;

const PAGE_TITLE: &str = "KI Bildbearbeitung - Revolutionäre Technologie";

#[component]
pub fn App() -> impl IntoView {
    provide_upload_context();

    // Document title plus a fallback hide of the splash, in case
    // main() ran before the stylesheet was applied.
    Effect::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        document.set_title(PAGE_TITLE);

        if let Some(loading) = document.get_element_by_id("leptos-loading") {
            if let Some(element) = loading.dyn_ref::<HtmlElement>() {
                element.class_list().add_1("hidden").ok();
            }
            loading
                .set_attribute("style", "display: none !important;")
                .ok();
        }

        // Late backup for slow asset loads
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(100).await;
            if let Some(loading) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("leptos-loading"))
            {
                loading
                    .set_attribute("style", "display: none !important;")
                    .ok();
            }
        });
    });

    view! {
        <div class="page-container">
            <Navbar/>
            <HomePage/>
            <Footer/>
        </div>
    }
}
