// OpsWay AI Odoo Developer — Landing Page, Leptos 0.8 Edition

mod components;
mod config;
mod sections;
mod state;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use config::SiteConfig;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    log_boot_note();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(SiteConfig::default());
    view! {
        <Nav />
        <main>
            <Hero />
            <HowItWorks />
            <MediaShowcase />
            <Benefits />
            <Pricing />
            <Comparison />
            <Faq />
            <CtaBand />
        </main>
        <SiteFooter />
    }
}

/// One styled line in the devtools console, for the curious.
fn log_boot_note() {
    web_sys::console::log_2(
        &JsValue::from_str("%cOpsWay — Odoo tweaks in minutes. Built with Rust + Leptos."),
        &JsValue::from_str("color: #714B67; font-weight: bold;"),
    );
}
