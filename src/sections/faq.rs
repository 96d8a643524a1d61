use leptos::prelude::*;

use crate::components::{Accordion, FaqEntry};
use crate::config::SiteConfig;

#[component]
pub fn Faq() -> impl IntoView {
    let cfg = expect_context::<SiteConfig>();
    let entries = vec![
        FaqEntry {
            question: "What counts as a \"simple\" Odoo task?",
            answer: "Things like enabling modules, adding fields/views, small automations, \
                     or basic API hooks. We'll estimate up front before coding."
                .to_string(),
        },
        FaqEntry {
            question: "How does the 50% cheaper guarantee work?",
            answer: "We base estimates on comparable human dev effort and price. If we miss \
                     the mark, we adjust so your final price is at least 50% less."
                .to_string(),
        },
        FaqEntry {
            question: "Do I need the human validation add-on?",
            answer: "Optional. Many teams start AI-only, then add human review for \
                     change-controlled environments or critical workflows."
                .to_string(),
        },
        FaqEntry {
            question: "How do we start?",
            answer: format!(
                "Email your first user story to {}. You'll get an estimate to approve.",
                cfg.contact_email
            ),
        },
    ];

    view! {
        <section id="faq" class="faq">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"FAQ"</h2>
                    <p class="section-description">"The quick answers."</p>
                </div>
                <Accordion entries=entries default_open=cfg.default_faq_open />
            </div>
        </section>
    }
}
