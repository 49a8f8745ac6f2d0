//! Sticky header with logo and in-page anchor navigation

use leptos::prelude::*;

use crate::utils::constants::{
    ANCHOR_CONTACT, ANCHOR_EXAMPLES, ANCHOR_FEATURES, ANCHOR_UPLOAD, PRODUCT_NAME,
};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-content">
                <a href="#" class="logo">
                    <Logo size=40/>
                    <span>{PRODUCT_NAME}</span>
                </a>
                <nav class="header-nav">
                    <a href=ANCHOR_FEATURES>"Features"</a>
                    <a href=ANCHOR_UPLOAD>"Ausprobieren"</a>
                    <a href=ANCHOR_EXAMPLES>"Beispiele"</a>
                    <a href=ANCHOR_CONTACT>"Kontakt"</a>
                </nav>
            </div>
        </header>
    }
}

/// Gradient diamond product mark. The gradient id is derived from the
/// size so header and footer instances do not collide in the DOM.
#[component]
pub fn Logo(size: u32) -> impl IntoView {
    let gradient_id = format!("logo-gradient-{}", size);
    let gradient_ref = format!("url(#{})", gradient_id);

    view! {
        <svg width=size height=size viewBox="0 0 40 40" fill="none">
            <rect width="40" height="40" rx="8" fill=gradient_ref></rect>
            <path d="M20 10 L30 20 L20 30 L10 20 Z" fill="white" opacity="0.9"></path>
            <defs>
                <linearGradient id=gradient_id x1="0" y1="0" x2="40" y2="40">
                    <stop offset="0%" stop-color="#667eea"></stop>
                    <stop offset="100%" stop-color="#764ba2"></stop>
                </linearGradient>
            </defs>
        </svg>
    }
}
