//! Single-open disclosure list, used for the FAQ.

use leptos::prelude::*;

use crate::state::AccordionState;

/// One question/answer pair. Answers are built at mount because some of
/// them interpolate configured values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: String,
}

#[component]
pub fn Accordion(entries: Vec<FaqEntry>, default_open: Option<usize>) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new(entries.len(), default_open));

    view! {
        <div class="accordion">
            {entries.into_iter().enumerate().map(|(idx, entry)| {
                let FaqEntry { question, answer } = entry;
                view! {
                    <button
                        class=move || if state.with(|s| s.is_open(idx)) {
                            "accordion-item open"
                        } else {
                            "accordion-item"
                        }
                        on:click=move |_| state.update(|s| s.toggle(idx))
                    >
                        <div class="accordion-row">
                            <div class="accordion-body">
                                <div class="accordion-question">{question}</div>
                                <Show when=move || state.with(|s| s.is_open(idx))>
                                    <div class="accordion-answer">{answer.clone()}</div>
                                </Show>
                            </div>
                            <span class="accordion-chevron">"›"</span>
                        </div>
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
