//! Widget model and its update function.
//!
//! The rendering surface owns a [`WidgetState`], feeds it [`WidgetEvent`]s and
//! re-renders after each call to [`WidgetState::update`]. When an update
//! returns a [`CompletionRequest`], the surface sends it and later reports the
//! result back as [`WidgetEvent::ReplyReceived`].

use crate::completion::CompletionRequest;
use crate::config::ChatConfig;
use crate::conversation::ConversationStore;
use crate::dispatcher::{DispatchOutcome, DispatchState, Dispatcher};
use crate::errors::{ChatError, DispatchRejected};
use crate::models::Message;

#[derive(Debug)]
pub enum WidgetEvent {
    ToggleOpen,
    ToggleThinkingMode,
    DraftChanged(String),
    Submit,
    ReplyReceived(Result<String, ChatError>),
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    pub open: bool,
    pub draft: String,
    pub thinking_mode: bool,
    conversation: ConversationStore,
    dispatcher: Dispatcher,
}

impl WidgetState {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            open: false,
            draft: String::new(),
            thinking_mode: false,
            conversation: ConversationStore::initialize(),
            dispatcher: Dispatcher::new(config),
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn dispatch_state(&self) -> DispatchState {
        self.dispatcher.state()
    }

    /// Input field and send button are disabled while this is true.
    pub fn is_sending(&self) -> bool {
        self.dispatcher.is_sending()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_sending() && !self.draft.trim().is_empty()
    }

    /// Applies one event. Returns the request to send when a dispatch starts.
    pub fn update(&mut self, event: WidgetEvent) -> Option<CompletionRequest> {
        match event {
            WidgetEvent::ToggleOpen => self.open = !self.open,
            WidgetEvent::ToggleThinkingMode => self.thinking_mode = !self.thinking_mode,
            WidgetEvent::DraftChanged(text) => self.draft = text,
            WidgetEvent::Submit => {
                let draft = std::mem::take(&mut self.draft);
                match self.begin_dispatch(&draft) {
                    Ok(request) => return Some(request),
                    // keep what the visitor typed
                    Err(_) => self.draft = draft,
                }
            }
            WidgetEvent::ReplyReceived(result) => {
                self.finish_dispatch(result);
            }
        }
        None
    }

    pub fn begin_dispatch(&mut self, input: &str) -> Result<CompletionRequest, DispatchRejected> {
        self.dispatcher.begin(input, &mut self.conversation, self.thinking_mode)
    }

    pub fn finish_dispatch(&mut self, result: Result<String, ChatError>) -> DispatchOutcome {
        self.dispatcher.finish(&mut self.conversation, result)
    }
}
