//! Page footer - contact, legal and social blocks

use leptos::prelude::*;

use crate::components::navbar::Logo;
use crate::utils::constants::{CONTACT_EMAIL, CONTACT_PHONE, PRODUCT_NAME, PRODUCT_TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="site-footer">
            <div class="footer-content">
                <div class="footer-section">
                    <div class="footer-logo">
                        <Logo size=32/>
                        <span>{PRODUCT_NAME}</span>
                    </div>
                    <p class="footer-description">{PRODUCT_TAGLINE}</p>
                </div>

                <div class="footer-section">
                    <h4>"Kontakt"</h4>
                    <p>"Email: " {CONTACT_EMAIL}</p>
                    <p>"Tel: " {CONTACT_PHONE}</p>
                </div>

                <div class="footer-section">
                    <h4>"Rechtliches"</h4>
                    <a href="#datenschutz">"Datenschutzerklärung"</a>
                    <a href="#impressum">"Impressum"</a>
                    <a href="#agb">"AGB"</a>
                </div>

                <div class="footer-section">
                    <h4>"Folgen Sie uns"</h4>
                    <div class="social-links">
                        <a href="#twitter">"Twitter"</a>
                        <a href="#linkedin">"LinkedIn"</a>
                        <a href="#instagram">"Instagram"</a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p class="privacy-notice">
                    "🔒 Ihre Daten sind sicher. Wir verwenden Verschlüsselung und löschen hochgeladene Bilder automatisch nach 24 Stunden."
                </p>
                <p class="copyright">"© 2025 AI Bildwerk. Alle Rechte vorbehalten."</p>
            </div>
        </footer>
    }
}
