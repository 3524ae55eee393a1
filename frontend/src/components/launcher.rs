use leptos::prelude::*;
use tourmaline_chat::WidgetEvent;

use crate::state::ChatStore;

/// Round button in the corner that opens and closes the chat panel.
#[component]
pub fn ChatLauncher() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let is_open = move || store.widget.with(|w| w.open);

    view! {
        <button
            class="chat-launcher"
            aria-label="Ouvrir le chat"
            on:click=move |_| store.send(WidgetEvent::ToggleOpen)
        >
            {move || if is_open() { "✕" } else { "💬" }}
        </button>
    }
}
