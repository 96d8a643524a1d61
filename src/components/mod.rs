// Reusable leaf widgets shared by the page sections

mod accordion;
mod carousel;
mod cta_form;

pub use accordion::{Accordion, FaqEntry};
pub use carousel::{Carousel, Slide};
pub use cta_form::CtaForm;
