use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let cfg = expect_context::<SiteConfig>();
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <span class="footer-mail-glyph">"✉"</span>
                <a href=format!("mailto:{}", cfg.contact_email) class="footer-link">
                    {cfg.contact_email}
                </a>
            </div>
        </footer>
    }
}
