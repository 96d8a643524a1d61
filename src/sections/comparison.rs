use leptos::prelude::*;

const AI_PROS: &[&str] = &[
    "Delivers simple modifications in minutes",
    "Never sleeps or takes vacations",
    "Guaranteed 50% cheaper",
    "Optional human validation",
    "Transparent estimates before coding",
];

const HUMAN_CONS: &[&str] = &[
    "Lead times from days to weeks",
    "Schedules, handoffs, backlogs",
    "Higher hourly cost",
    "Code quality varies",
    "Estimate surprises",
];

#[component]
pub fn Comparison() -> impl IntoView {
    view! {
        <section id="compare" class="comparison">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Compared to a human developer"</h2>
                    <p class="section-description">"Save time, money, and cycles."</p>
                </div>
                <div class="comparison-grid">
                    <div class="comparison-card">
                        <h4 class="comparison-title">"OpsWay AI Odoo Developer"</h4>
                        <ul class="comparison-list pros">
                            {AI_PROS.iter().map(|t| view! {
                                <li>"✅ "{*t}</li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="comparison-card">
                        <h4 class="comparison-title">"Traditional Human Developer"</h4>
                        <ul class="comparison-list cons">
                            {HUMAN_CONS.iter().map(|t| view! {
                                <li>"⚠️ "{*t}</li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
