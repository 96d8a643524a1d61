//! Email hand-off form.
//!
//! Submitting posts the single field to a `mailto:` URL, which opens the
//! visitor's mail client. Nothing leaves the page over the network.

use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn CtaForm() -> impl IntoView {
    let cfg = expect_context::<SiteConfig>();
    view! {
        <form
            class="cta-form"
            action=format!("mailto:{}", cfg.contact_email)
            method="post"
            enctype="text/plain"
        >
            <input class="cta-input" type="email" placeholder="Your work email" />
            <button class="cta-submit" type="submit">{cfg.primary_cta}</button>
        </form>
    }
}
