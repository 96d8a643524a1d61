use leptos::prelude::*;

const STEPS: &[&str] = &[
    "Describe the change (e.g., install module, add field).",
    "Get an instant estimate and approve the price range.",
    "AI Odoo dev implements; optional human validation.",
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how" class="how-it-works">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"How it works"</h2>
                    <p class="section-description">
                        "From brief to estimate to implementation in minutes."
                    </p>
                </div>
                <ol class="steps-grid">
                    {STEPS.iter().enumerate().map(|(i, step)| view! {
                        <li class="step-card">
                            <div class="step-number">{format!("Step {}", i + 1)}</div>
                            <div class="step-text">{*step}</div>
                        </li>
                    }).collect::<Vec<_>>()}
                </ol>
            </div>
        </section>
    }
}
