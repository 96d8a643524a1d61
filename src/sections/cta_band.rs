use leptos::prelude::*;

use crate::components::CtaForm;

#[component]
pub fn CtaBand() -> impl IntoView {
    view! {
        <section class="cta-band">
            <div class="cta-band-inner">
                <div class="cta-band-copy">
                    <h3 class="cta-band-title">"Ready to ship your first Odoo tweak?"</h3>
                    <p class="cta-band-text">
                        "Send your first user story. We'll reply with an estimate in minutes."
                    </p>
                </div>
                <div class="cta-band-form">
                    <CtaForm />
                </div>
            </div>
        </section>
    }
}
