//! Status Message Component
//!
//! Shows the latest signup result until it expires.

use leptos::*;

use crate::state::board::BoardState;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let status = state.status();

    let class = move || {
        status
            .get()
            .map(|message| message.kind.css_class())
            .unwrap_or("hidden")
    };

    view! {
        <div id="message" class=class>
            {move || status.get().map(|message| message.text)}
        </div>
    }
}
