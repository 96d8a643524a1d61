use leptos::prelude::*;

use crate::components::{Carousel, Slide};

const SLIDES: &[Slide] = &[
    Slide {
        title: "Install a module",
        caption: "Enable a standard Odoo module with safe defaults.",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=1600&auto=format&fit=crop",
    },
    Slide {
        title: "Add a field",
        caption: "Create and expose a custom field in forms and list views.",
        image: "https://images.unsplash.com/photo-1527430253228-e93688616381?q=80&w=1600&auto=format&fit=crop",
    },
    Slide {
        title: "Simple automation",
        caption: "Trigger an action on stage change or condition.",
        image: "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?q=80&w=1600&auto=format&fit=crop",
    },
    Slide {
        title: "Basic integration",
        caption: "Connect to a webhook or simple API endpoint.",
        image: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?q=80&w=1600&auto=format&fit=crop",
    },
];

#[component]
pub fn MediaShowcase() -> impl IntoView {
    view! {
        <section class="showcase">
            <div class="container">
                <div class="showcase-grid">
                    <div class="showcase-intro">
                        <h3 class="showcase-title">"What we can ship fast"</h3>
                        <p class="showcase-description">
                            "A visual peek at common tasks delivered in minutes, not weeks."
                        </p>
                        <div class="showcase-hint">
                            "Tip: swap these images with your own screenshots later."
                        </div>
                    </div>
                    <div class="showcase-media">
                        <Carousel slides=SLIDES />
                    </div>
                </div>
            </div>
        </section>
    }
}
