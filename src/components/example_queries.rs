//! Canned example questions that feed the shared query signal.

#[cfg(test)]
#[path = "example_queries_test.rs"]
mod example_queries_test;

use leptos::prelude::*;

/// One clickable example question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExampleQuery {
    pub text: &'static str,
    pub icon: &'static str,
}

/// The fixed example list shown above the chat.
pub fn example_queries() -> [ExampleQuery; 4] {
    [
        ExampleQuery {
            text: "Compare average annual rainfall in Maharashtra and Punjab for the last 5 years",
            icon: "📈",
        },
        ExampleQuery {
            text: "What are the top 3 crops produced in Karnataka?",
            icon: "🌾",
        },
        ExampleQuery {
            text: "Analyze rice production trends in Tamil Nadu over the last decade",
            icon: "📊",
        },
        ExampleQuery {
            text: "Which district has the highest wheat production in Uttar Pradesh?",
            icon: "🗺️",
        },
    ]
}

/// Example-question list; selecting one submits it through the chat
/// interface exactly like typed input.
#[component]
pub fn ExampleQueries(on_select: Callback<String>) -> impl IntoView {
    view! {
        <section class="examples">
            <div class="examples__card">
                <h2 class="examples__heading">"Try These Example Questions"</h2>
                <div class="examples__list">
                    {example_queries()
                        .into_iter()
                        .map(|example| {
                            view! {
                                <button
                                    class="examples__item"
                                    on:click=move |_| on_select.run(example.text.to_owned())
                                >
                                    <span class="examples__icon" aria-hidden="true">{example.icon}</span>
                                    <span class="examples__text">{example.text}</span>
                                    <span class="examples__arrow" aria-hidden="true">"→"</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
