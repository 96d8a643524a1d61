use leptos::prelude::*;

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "⚡",
        title: "Cheaper than hiring devs",
        description: "Guaranteed 50% cheaper than a human developer.",
    },
    Benefit {
        icon: "⏱",
        title: "Minutes to market",
        description: "Ship simple Odoo tweaks in minutes, not weeks.",
    },
    Benefit {
        icon: "✓",
        title: "Flexibility",
        description: "Test ideas fast, iterate and deploy quickly.",
    },
    Benefit {
        icon: "🛡",
        title: "Human validation",
        description: "Optional OpsWay engineer reviews & controls code quality.",
    },
];

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="benefits">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Benefits"</h2>
                    <p class="section-description">"Why teams pick OpsWay's AI Odoo developer."</p>
                </div>
                <div class="benefits-grid">
                    {BENEFITS.iter().map(|b| view! {
                        <div class="benefit-card">
                            <div class="benefit-head">
                                <span class="benefit-icon">{b.icon}</span>
                                <h4 class="benefit-title">{b.title}</h4>
                            </div>
                            <p class="benefit-description">{b.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
