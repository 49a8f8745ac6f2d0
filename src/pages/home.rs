//! Landing page sections

use leptos::prelude::*;

use crate::components::{Backdrop, UploadWidget};
use crate::utils::constants::ANCHOR_UPLOAD;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <HeroSection/>
            <FeaturesSection/>
            <UploadSection/>
            <ExamplesSection/>
            <CtaSection/>
        </main>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <Backdrop/>
            <div class="hero-content">
                <h1 class="hero-title">"Revolutionäre KI-Bildbearbeitung"</h1>
                <p class="hero-subtitle">"Blitzschnell, kreativ, intuitiv"</p>
                <p class="hero-description">
                    "Verwandeln Sie Ihre Bilder mit der Kraft künstlicher Intelligenz. \
                     Keine komplizierten Werkzeuge – einfach beschreiben, was Sie wollen."
                </p>
                <a href=ANCHOR_UPLOAD class="cta-button">"Jetzt kostenlos starten"</a>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="section-content">
                <h2 class="section-title">"Wie funktioniert es?"</h2>
                <div class="feature-grid">
                    <FeatureCard
                        icon="🎨"
                        title="Automatische Retusche"
                        description="Unsere KI erkennt automatisch Gesichter und optimiert Helligkeit, Kontrast und Farben für perfekte Ergebnisse."
                    />
                    <FeatureCard
                        icon="✨"
                        title="Kreative Veränderungen"
                        description="Fügen Sie neue Elemente hinzu, ändern Sie Stile oder verwandeln Sie Ihre Fotos mit natürlicher Sprache."
                    />
                    <FeatureCard
                        icon="🌅"
                        title="Hintergrundaustausch"
                        description="Entfernen oder ersetzen Sie Hintergründe in Sekunden. Von professionellen Studios bis zu exotischen Orten."
                    />
                    <FeatureCard
                        icon="⚡"
                        title="Blitzschnell"
                        description="Dank modernster KI-Technologie erhalten Sie Ergebnisse in wenigen Sekunden – nicht Minuten oder Stunden."
                    />
                    <FeatureCard
                        icon="🎯"
                        title="Präzise Ergebnisse"
                        description="Unsere fortschrittlichen Algorithmen liefern fotorealistische Ergebnisse, die natürlich aussehen."
                    />
                    <FeatureCard
                        icon="🔒"
                        title="Sicher & Privat"
                        description="Ihre Bilder werden verschlüsselt übertragen und nach der Bearbeitung automatisch gelöscht."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
fn UploadSection() -> impl IntoView {
    view! {
        <section id="upload" class="upload-section">
            <div class="section-content">
                <h2 class="section-title">"Probieren Sie es jetzt aus"</h2>
                <p class="section-description">
                    "Laden Sie ein Bild hoch und beschreiben Sie, was Sie ändern möchten"
                </p>
                <UploadWidget/>
            </div>
        </section>
    }
}

#[component]
fn ExamplesSection() -> impl IntoView {
    view! {
        <section id="examples" class="examples">
            <div class="section-content">
                <h2 class="section-title">"Beispiele aus der Praxis"</h2>
                <p class="section-description">
                    "Sehen Sie, was mit KI-Bildbearbeitung möglich ist"
                </p>
                <div class="example-grid">
                    <ExampleCard
                        before="🌆"
                        after="🌅"
                        prompt="\"Füge einen dramatischen Sonnenuntergang hinzu\""
                    />
                    <ExampleCard
                        before="👤"
                        after="✨"
                        prompt="\"Entferne den Hintergrund komplett\""
                    />
                    <ExampleCard
                        before="🏙️"
                        after="🏖️"
                        prompt="\"Ersetze den Hintergrund mit einem tropischen Strand\""
                    />
                </div>
            </div>
        </section>
    }
}

/// Before/after placeholder pair with the prompt that connects them.
#[component]
fn ExampleCard(
    before: &'static str,
    after: &'static str,
    prompt: &'static str,
) -> impl IntoView {
    view! {
        <div class="example-card">
            <div class="example-images">
                <div class="example-image placeholder-before">
                    <span class="placeholder-label">"Vorher"</span>
                    <div class="placeholder-icon">{before}</div>
                </div>
                <div class="arrow">"→"</div>
                <div class="example-image placeholder-after">
                    <span class="placeholder-label">"Nachher"</span>
                    <div class="placeholder-icon">{after}</div>
                </div>
            </div>
            <p class="example-prompt">{prompt}</p>
        </div>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="cta-content">
                <h2 class="cta-title">"Bereit, Ihre Bilder zu transformieren?"</h2>
                <p class="cta-description">
                    "Starten Sie jetzt kostenlos und erleben Sie die Zukunft der Bildbearbeitung"
                </p>
                <a href=ANCHOR_UPLOAD class="cta-button-large">"Jetzt starten"</a>
            </div>
        </section>
    }
}
