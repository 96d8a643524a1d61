use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn Nav() -> impl IntoView {
    let cfg = expect_context::<SiteConfig>();
    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo"></span>
                    <span class="nav-title">"OpsWay"</span>
                </a>
                <nav class="nav-links">
                    <a href="#how" class="nav-link">"How it works"</a>
                    <a href="#benefits" class="nav-link">"Benefits"</a>
                    <a href="#pricing" class="nav-link">"Pricing"</a>
                    <a href="#compare" class="nav-link">"Compare"</a>
                    <a href="#faq" class="nav-link">"FAQ"</a>
                </nav>
                <a href=format!("mailto:{}", cfg.contact_email) class="nav-cta">
                    {cfg.secondary_cta}
                </a>
            </div>
        </header>
    }
}
