mod components;
mod state;

use leptos::either::Either;
use leptos::mount::mount_to_body;
use leptos::prelude::*;
use tourmaline_chat::{ChatConfig, ChatError, GeminiAgentService};

use components::chat::ChatPanel;
use components::launcher::ChatLauncher;
use state::ChatStore;

/// Settings baked in by `build.rs`.
fn compiled_setting(name: &str) -> Option<String> {
    let value = match name {
        "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
        "GEMINI_API_BASE_URL" => option_env!("GEMINI_API_BASE_URL"),
        "TOURMALINE_FAST_MODEL" => option_env!("TOURMALINE_FAST_MODEL"),
        "TOURMALINE_REASONING_MODEL" => option_env!("TOURMALINE_REASONING_MODEL"),
        "TOURMALINE_THINKING_BUDGET" => option_env!("TOURMALINE_THINKING_BUDGET"),
        _ => None,
    };
    value.map(str::to_string)
}

fn load_backend() -> Result<(ChatConfig, GeminiAgentService), ChatError> {
    let config = ChatConfig::from_vars(compiled_setting)?;
    let agent = GeminiAgentService::new(&config)?;
    Ok((config, agent))
}

/// Chat widget mounted over the site. Without credentials nothing is shown.
#[component]
fn App() -> impl IntoView {
    match load_backend() {
        Ok((config, agent)) => {
            ChatStore::provide(config, agent);
            Either::Left(view! {
                <ChatLauncher />
                <ChatPanel />
            })
        }
        Err(e) => {
            log::error!("Chat widget disabled: {e}");
            Either::Right(())
        }
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
