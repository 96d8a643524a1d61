// Landing page sections, in document order

mod benefits;
mod comparison;
mod cta_band;
mod faq;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod pricing;
mod showcase;

pub use benefits::Benefits;
pub use comparison::Comparison;
pub use cta_band::CtaBand;
pub use faq::Faq;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use pricing::Pricing;
pub use showcase::MediaShowcase;
