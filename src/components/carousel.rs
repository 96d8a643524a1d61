//! Autoplay media carousel.
//!
//! Every slide stays in the DOM; the one at the current index carries the
//! `active` class and is fully opaque, the rest are transparent. Slide
//! visibility is a pure function of [`CarouselState`], which makes the
//! switch a CSS crossfade instead of a node swap.

use std::time::Duration;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::CarouselState;

/// One carousel entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
    pub image: &'static str,
}

#[component]
pub fn Carousel(slides: &'static [Slide]) -> impl IntoView {
    let cfg = expect_context::<SiteConfig>();
    let state = RwSignal::new(CarouselState::new(slides.len()));
    let autoplay = Memo::new(move |_| state.with(|s| s.autoplay()));

    // One live timer per mounted carousel. The previous handle is cleared
    // before a new one is armed, and again on unmount, so no tick can fire
    // once autoplay is switched off or the component is gone. Index changes
    // go through the memo unnoticed and leave the running interval alone.
    let timer = StoredValue::new(None::<IntervalHandle>);
    let clear_timer = move || {
        timer.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        })
    };
    Effect::new(move |_| {
        clear_timer();
        if autoplay.get() {
            let armed = set_interval_with_handle(
                move || state.update(|s| s.tick()),
                Duration::from_millis(cfg.autoplay_interval_ms),
            );
            if let Ok(handle) = armed {
                timer.set_value(Some(handle));
            }
        }
    });
    on_cleanup(clear_timer);

    view! {
        <div class="carousel">
            <div class="carousel-frame">
                {slides.iter().enumerate().map(|(idx, slide)| view! {
                    <img
                        src=slide.image
                        alt=slide.title
                        class=move || if state.with(|s| s.current()) == idx {
                            "carousel-slide active"
                        } else {
                            "carousel-slide"
                        }
                    />
                }).collect::<Vec<_>>()}
            </div>
            <div class="carousel-caption">
                <div class="carousel-caption-title">
                    {move || slides[state.with(|s| s.current())].title}
                </div>
                <div class="carousel-caption-text">
                    {move || slides[state.with(|s| s.current())].caption}
                </div>
            </div>
            <div class="carousel-arrows">
                <button
                    class="carousel-arrow"
                    aria-label="Previous slide"
                    on:click=move |_| state.update(|s| s.previous())
                >
                    "‹"
                </button>
                <button
                    class="carousel-arrow"
                    aria-label="Next slide"
                    on:click=move |_| state.update(|s| s.next())
                >
                    "›"
                </button>
            </div>
            <button
                class="carousel-autoplay"
                on:click=move |_| state.update(|s| s.toggle_autoplay())
            >
                {move || if autoplay.get() { "⏸ Pause" } else { "▶ Play" }}
            </button>
            <div class="carousel-dots">
                {(0..slides.len()).map(|idx| view! {
                    <button
                        class=move || if state.with(|s| s.current()) == idx {
                            "carousel-dot active"
                        } else {
                            "carousel-dot"
                        }
                        aria-label=format!("Go to slide {}", idx + 1)
                        on:click=move |_| state.update(|s| s.jump_to(idx))
                    ></button>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
