use leptos::prelude::*;

use crate::components::CtaForm;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <span class="hero-badge">"🚀 Odoo tweaks in minutes"</span>
                        <h1 class="hero-title">"Order your AI Odoo Developer"</h1>
                        <p class="hero-description">
                            "OpsWay's bot performs like a junior-to-mid Odoo dev to handle "
                            "simple modifications fast and "
                            <b>"50% cheaper"</b>
                            " than hiring."
                        </p>
                        <CtaForm />
                        <p class="hero-fine-print">
                            "Submitting opens your email client to contact us."
                        </p>
                        <div class="hero-stars">
                            <span class="hero-star-row">"★★★★★"</span>
                            <span>"Loved for speed & savings"</span>
                        </div>
                    </div>
                    <MockupCard />
                </div>
            </div>
        </section>
    }
}

/// Static brief-to-result walkthrough shown next to the pitch.
#[component]
fn MockupCard() -> impl IntoView {
    view! {
        <div class="mockup-card">
            <div class="mockup-pane mockup-story">
                <div class="mockup-label">"# User story"</div>
                <pre class="mockup-text">
                    "As a sales manager, add a custom field deal_source to CRM."
                </pre>
            </div>
            <div class="mockup-pane">
                <div class="mockup-label">"Estimate"</div>
                <div class="mockup-strong">"€45–€70"</div>
                <div class="mockup-hint">"Approve to start • Ready today"</div>
            </div>
            <div class="mockup-pane mockup-result">
                <div class="mockup-label">"Result"</div>
                <ul class="mockup-list">
                    <li>"Module installed"</li>
                    <li>"Field added to view"</li>
                    <li>"Basic validation included"</li>
                </ul>
            </div>
        </div>
    }
}
