use leptos::prelude::*;
use leptos::task::spawn_local;
use tourmaline_chat::{ChatConfig, CompletionApi, GeminiAgentService, WidgetEvent, WidgetState};

/// Widget state shared with the components via Leptos context.
///
/// Every mutation goes through [`WidgetState::update`]; the signal makes the
/// components re-render afterwards.
#[derive(Clone, Copy)]
pub struct ChatStore {
    pub widget: RwSignal<WidgetState>,
    agent: StoredValue<GeminiAgentService>,
}

impl ChatStore {
    /// Create a new `ChatStore` and provide it in the current Leptos context.
    pub fn provide(config: ChatConfig, agent: GeminiAgentService) -> Self {
        let store = Self {
            widget: RwSignal::new(WidgetState::new(config)),
            agent: StoredValue::new(agent),
        };
        provide_context(store);
        store
    }

    /// Applies a UI event. Submissions start a dispatch.
    pub fn send(&self, event: WidgetEvent) {
        match event {
            WidgetEvent::Submit => self.submit(),
            other => self.widget.update(|w| {
                w.update(other);
            }),
        }
    }

    /// Submits the draft. The request runs in the background and its result
    /// is fed back as `ReplyReceived`.
    pub fn submit(&self) {
        let Some(request) = self.widget.try_update(|w| w.update(WidgetEvent::Submit)).flatten()
        else {
            return;
        };

        let widget = self.widget;
        let agent = self.agent.get_value();
        spawn_local(async move {
            let result = agent.complete(&request).await;
            widget.update(|w| {
                w.update(WidgetEvent::ReplyReceived(result));
            });
        });
    }
}
