//! Chat interface: transcript, input form, and the submit pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the single network call per submitted query. Transcript
//! bookkeeping lives in [`ChatState`]; this component wires signals,
//! auto-follow scrolling, and the auto-submit bridge from the example
//! list and controls bar.

#[cfg(test)]
#[path = "chat_interface_test.rs"]
mod chat_interface_test;

use leptos::prelude::*;

use crate::net::types::{Entities, QueryResponse};
use crate::state::chat::{ChatMessage, ChatState, should_auto_submit};
use crate::util::markdown::render_markdown;

/// Transcript panel with the query input underneath.
#[component]
pub fn ChatInterface(
    /// Shared query signal written by the example list and controls bar.
    /// Each distinct non-empty value auto-submits exactly once.
    initial_query: RwSignal<String>,
) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Auto-follow: keep the newest message in view after every transcript
    // mutation. Presentation behavior only, not a correctness invariant.
    Effect::new(move || {
        let _ = chat.get().len();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let run_query = move |text: String| {
        let mut accepted = None;
        chat.update(|state| accepted = state.begin_submit(&text));
        let Some(query) = accepted else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::post_query(&query).await {
                Ok(response) => chat.update(|state| state.complete(response)),
                Err(error) => {
                    log::error!("query failed: {error}");
                    chat.update(|state| state.fail(&error));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    };

    // Bridge from the example list / controls bar: submit each distinct
    // non-empty value once, surviving unrelated re-renders.
    Effect::new(move || {
        let incoming = initial_query.get();
        let last = chat.with_untracked(|state| state.last_auto_query.clone());
        if !should_auto_submit(&incoming, &last) {
            return;
        }
        chat.update(|state| state.last_auto_query = incoming.clone());
        run_query(incoming);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_query(input.get());
    };

    let sending = move || chat.get().sending;

    view! {
        <div class="chat">
            <div class="chat__messages" node_ref=messages_ref>
                <Show
                    when=move || !chat.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="chat__empty">
                                <div class="chat__empty-icon" aria-hidden="true">"🌾"</div>
                                <p class="chat__empty-title">
                                    "Ask anything about rainfall, crops, and climate"
                                </p>
                                <p class="chat__empty-hint">
                                    "Try an example above or use the controls to compose a query."
                                </p>
                            </div>
                        }
                    }
                >
                    {move || {
                        chat.get().messages.into_iter().map(message_view).collect::<Vec<_>>()
                    }}
                </Show>
            </div>

            <form class="chat__form" on:submit=on_submit>
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Ask about agricultural production, rainfall, climate patterns..."
                    aria-label="Ask a question"
                    disabled=sending
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="chat__send" type="submit" disabled=sending title="Send" aria-label="Send">
                    {move || {
                        if sending() {
                            view! { <span class="chat__spinner" aria-hidden="true"></span> }
                                .into_any()
                        } else {
                            view! { <span aria-hidden="true">"➤"</span> }.into_any()
                        }
                    }}
                </button>
            </form>

            <Show when=move || chat.get().error.is_some()>
                <div class="chat__error-banner">
                    {move || chat.get().error.unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}

/// Render one transcript entry.
fn message_view(message: ChatMessage) -> impl IntoView {
    match message {
        ChatMessage::User { text, .. } => view! {
            <div class="chat__row chat__row--user">
                <div class="chat__bubble chat__bubble--user">
                    <p class="chat__bubble-text">{text}</p>
                </div>
            </div>
        }
        .into_any(),
        ChatMessage::Error { text, .. } => view! {
            <div class="chat__row">
                <div class="chat__bubble chat__bubble--error">
                    <p class="chat__bubble-text">{text}</p>
                </div>
            </div>
        }
        .into_any(),
        ChatMessage::Assistant { response, .. } => {
            let summary_html = render_markdown(&response.summary);
            let note = correlation_line(&response);
            let entities = response.entities.clone();
            let data_source = response.data_source.clone();
            view! {
                <div class="chat__row">
                    <div class="chat__bubble chat__bubble--assistant">
                        <div class="chat__bubble-markdown" inner_html=summary_html></div>
                        {data_source.map(|source| {
                            view! {
                                <p class="chat__data-source">{format!("Data source: {source}")}</p>
                            }
                        })}
                    </div>
                    <div class="chat__meta">
                        {entities.map(entity_chips)}
                        {note.map(|line| view! { <p class="chat__correlation">{line}</p> })}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

/// Inline correlation note shown under an assistant bubble, when the
/// answer carried a computed coefficient.
fn correlation_line(response: &QueryResponse) -> Option<String> {
    let value = response
        .analysis
        .as_ref()?
        .correlation_analysis
        .as_ref()?
        .correlation?;
    Some(format!("📊 Correlation: {value}"))
}

/// Chips naming the entities the service extracted from the question.
fn entity_chips(entities: Entities) -> impl IntoView {
    let states = (!entities.states.is_empty()).then(|| entities.states.join(", "));
    let crops = (!entities.crops.is_empty()).then(|| entities.crops.join(", "));
    let years = entities.years;

    view! {
        <div class="chat__chips">
            {states.map(|joined| {
                view! {
                    <span class="chat__chip chat__chip--states">
                        <span class="chat__chip-kind">"STATES"</span>
                        <span class="chat__chip-value">{joined}</span>
                    </span>
                }
            })}
            {crops.map(|joined| {
                view! {
                    <span class="chat__chip chat__chip--crops">
                        <span class="chat__chip-kind">"CROPS"</span>
                        <span class="chat__chip-value">{joined}</span>
                    </span>
                }
            })}
            {years.map(|count| {
                view! {
                    <span class="chat__chip chat__chip--years">
                        <span class="chat__chip-kind">"YEARS"</span>
                        <span class="chat__chip-value">{count.to_string()}</span>
                    </span>
                }
            })}
        </div>
    }
}
