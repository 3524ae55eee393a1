use tracing::{error, info, warn};

use crate::completion::CompletionRequest;
use crate::config::ChatConfig;
use crate::conversation::ConversationStore;
use crate::errors::{ChatError, DispatchRejected};
use crate::models::Message;
use crate::persona::{APOLOGY, PERSONA};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Sending,
}

/// How a dispatch ended, as seen by the caller. Failures never surface as
/// errors: they are already folded into the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Replied,
    Failed,
    Rejected(DispatchRejected),
    /// A completion arrived while nothing was in flight.
    Ignored,
}

/// Owns the `Idle -> Sending -> Idle` lifecycle of one widget.
///
/// A dispatch is split into [`Dispatcher::begin`], which validates, appends
/// the visitor message and returns the request to send, and
/// [`Dispatcher::finish`], which folds the result back. The network call in
/// between belongs to the caller, so no borrow of the conversation is held
/// across it.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: ChatConfig,
    persona: &'static str,
    state: DispatchState,
}

impl Dispatcher {
    pub fn new(config: ChatConfig) -> Self {
        Self { config, persona: PERSONA, state: DispatchState::Idle }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == DispatchState::Sending
    }

    pub fn begin(
        &mut self,
        input: &str,
        conversation: &mut ConversationStore,
        thinking_mode: bool,
    ) -> Result<CompletionRequest, DispatchRejected> {
        if input.trim().is_empty() {
            return Err(DispatchRejected::EmptyInput);
        }
        if self.is_sending() {
            warn!("dispatch rejected: another one is in flight");
            return Err(DispatchRejected::AlreadySending);
        }

        // History is captured before the visitor message lands in the store.
        let request = CompletionRequest::build(
            &self.config,
            self.persona,
            conversation.history(),
            input,
            thinking_mode,
        );
        conversation.append(Message::visitor(input));
        self.state = DispatchState::Sending;

        info!(
            model = %request.model,
            history = request.prior_turns().len(),
            thinking = request.thinking_budget.is_some(),
            "dispatch started"
        );
        Ok(request)
    }

    pub fn finish(
        &mut self,
        conversation: &mut ConversationStore,
        result: Result<String, ChatError>,
    ) -> DispatchOutcome {
        if !self.is_sending() {
            warn!("completion received while idle, ignoring it");
            return DispatchOutcome::Ignored;
        }
        self.state = DispatchState::Idle;

        match result {
            Ok(text) => {
                conversation.append(Message::assistant(text));
                info!("dispatch completed");
                DispatchOutcome::Replied
            }
            Err(e) => {
                error!("Error calling the completion API: {e}");
                conversation.append(Message::assistant(APOLOGY));
                DispatchOutcome::Failed
            }
        }
    }
}
