//! Site-wide configuration.
//!
//! A handful of values (contact address, CTA labels, widget defaults) are
//! shared across sections. They travel as one context value provided at
//! mount and read-only from then on.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Address every CTA and the footer point at.
    pub contact_email: &'static str,
    /// Label on the CTA form submit button.
    pub primary_cta: &'static str,
    /// Label on the nav order button.
    pub secondary_cta: &'static str,
    /// Period of the carousel autoplay timer, in milliseconds.
    pub autoplay_interval_ms: u64,
    /// FAQ entry expanded on first render, if any.
    pub default_faq_open: Option<usize>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: "ai-dev@opsway.dev",
            primary_cta: "Help me to onboard AI Odoo Developer",
            secondary_cta: "Order Odoo AI developer",
            autoplay_interval_ms: 4_000,
            default_faq_open: Some(0),
        }
    }
}
