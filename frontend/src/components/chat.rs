use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use tourmaline_chat::{Message, Role, WidgetEvent};

use crate::state::ChatStore;

/// Floating chat panel: header, message log, thinking-mode switch and input.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let widget = store.widget;
    let log_end = NodeRef::<html::Div>::new();

    // Keep the newest entry in view after every append
    Effect::new(move |_| {
        widget.with(|w| w.messages().len());
        if let Some(end) = log_end.get() {
            end.scroll_into_view();
        }
    });

    view! {
        <div class=move || {
            if widget.with(|w| w.open) { "chat-panel open" } else { "chat-panel" }
        }>
            <header class="chat-header">
                <h3>"Assistant Tourma-Line"</h3>
            </header>

            <div class="messages-container">
                <For
                    each=move || {
                        widget.with(|w| w.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                    }
                    key=|(index, _)| *index
                    children=move |(_, message)| view! { <MessageBubble message=message /> }
                />
                <Show when=move || widget.with(|w| w.is_sending())>
                    <div class="message assistant">
                        <span class="typing-indicator">"..."</span>
                    </div>
                </Show>
                <div node_ref=log_end></div>
            </div>

            <ThinkingModeSwitch />
            <ChatInput />
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = match message.role {
        Role::Visitor => "message visitor",
        Role::Assistant => "message assistant",
    };

    view! {
        <div class=css_class>
            <div class="message-text">{message.text}</div>
        </div>
    }
}

#[component]
fn ThinkingModeSwitch() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let thinking = move || store.widget.with(|w| w.thinking_mode);

    view! {
        <label class="thinking-mode" for="thinking-mode">
            <span>"Mode Réflexion"</span>
            <input
                id="thinking-mode"
                type="checkbox"
                prop:checked=thinking
                on:change=move |_| store.send(WidgetEvent::ToggleThinkingMode)
            />
            <span class="switch" class:active=thinking></span>
        </label>
    }
}

#[component]
fn ChatInput() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let widget = store.widget;
    let is_sending = move || widget.with(|w| w.is_sending());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        store.submit();
    };

    view! {
        <form class="input-row" on:submit=on_submit>
            <input
                type="text"
                placeholder="Posez votre question..."
                prop:value=move || widget.with(|w| w.draft.clone())
                on:input=move |ev| store.send(WidgetEvent::DraftChanged(event_target_value(&ev)))
                disabled=is_sending
            />
            <button
                type="submit"
                class="send-btn"
                disabled=move || !widget.with(|w| w.can_submit())
            >
                "Envoyer"
            </button>
        </form>
    }
}
