//! Structured query composer with optional live emission.
//!
//! DESIGN
//! ======
//! The bar owns four local fields and derives a single composed query
//! string. With live mode on, the string is emitted only after the inputs
//! have been quiet for [`LIVE_DEBOUNCE_MS`]; every change cancels any
//! pending emission, so only the most recent composition can fire. With
//! live mode off, emission happens only on the explicit Run action.

use leptos::prelude::*;

use crate::util::compose::compose_query;

/// Quiet period before a live emission, in milliseconds.
pub const LIVE_DEBOUNCE_MS: u32 = 600;

/// Form-field composer that feeds the shared query signal.
#[component]
pub fn ControlsBar(on_compose: Callback<String>) -> impl IntoView {
    let states = RwSignal::new(String::new());
    let crops = RwSignal::new(String::new());
    let years = RwSignal::new("5".to_owned());
    let live = RwSignal::new(true);

    let composed = Memo::new(move |_| compose_query(&states.get(), &crops.get(), &years.get()));

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;
        use std::cell::RefCell;
        use std::rc::Rc;

        let pending = Rc::new(RefCell::new(None::<Timeout>));
        Effect::new(move || {
            let query = composed.get();
            if let Some(timer) = pending.borrow_mut().take() {
                timer.cancel();
            }
            if !live.get() {
                return;
            }
            let timer = Timeout::new(LIVE_DEBOUNCE_MS, move || on_compose.run(query));
            *pending.borrow_mut() = Some(timer);
        });
    }

    let on_run = move |_| on_compose.run(composed.get_untracked());

    view! {
        <div class="controls-bar">
            <div class="controls-bar__grid">
                <div class="controls-bar__field">
                    <label class="controls-bar__label" for="controls-states">
                        "States (comma-separated)"
                    </label>
                    <input
                        id="controls-states"
                        class="controls-bar__input"
                        type="text"
                        placeholder="Maharashtra, Gujarat"
                        prop:value=move || states.get()
                        on:input=move |ev| states.set(event_target_value(&ev))
                    />
                </div>
                <div class="controls-bar__field">
                    <label class="controls-bar__label" for="controls-crops">
                        "Crops (comma-separated)"
                    </label>
                    <input
                        id="controls-crops"
                        class="controls-bar__input"
                        type="text"
                        placeholder="Wheat, Rice"
                        prop:value=move || crops.get()
                        on:input=move |ev| crops.set(event_target_value(&ev))
                    />
                </div>
                <div class="controls-bar__field">
                    <label class="controls-bar__label" for="controls-years">"Years (N)"</label>
                    <input
                        id="controls-years"
                        class="controls-bar__input"
                        type="number"
                        min="1"
                        max="20"
                        prop:value=move || years.get()
                        on:input=move |ev| years.set(event_target_value(&ev))
                    />
                </div>
                <div class="controls-bar__actions">
                    <button class="controls-bar__run" on:click=on_run>"Run"</button>
                    <label class="controls-bar__live">
                        <input
                            type="checkbox"
                            prop:checked=move || live.get()
                            on:change=move |ev| live.set(event_target_checked(&ev))
                        />
                        " Live"
                    </label>
                </div>
            </div>
            <p class="controls-bar__preview">
                "Query preview: "
                <span class="controls-bar__preview-text">{move || composed.get()}</span>
            </p>
        </div>
    }
}
