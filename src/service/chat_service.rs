use std::cell::RefCell;

use tracing::{debug, warn};

use crate::completion::CompletionApi;
use crate::config::ChatConfig;
use crate::dispatcher::{DispatchOutcome, DispatchState};
use crate::errors::ChatError;
use crate::models::Message;
use crate::widget::WidgetState;

/// Runs dispatches for one widget on a single flow of control.
///
/// State lives in a `RefCell` that is never borrowed across the network
/// call, so a second `dispatch` issued while the first is awaiting sees
/// `Sending` and is rejected.
pub struct ChatService<A> {
    api: A,
    state: RefCell<WidgetState>,
}

impl<A: CompletionApi> ChatService<A> {
    pub fn new(api: A, config: ChatConfig) -> Self {
        Self { api, state: RefCell::new(WidgetState::new(config)) }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages().to_vec()
    }

    pub fn dispatch_state(&self) -> DispatchState {
        self.state.borrow().dispatch_state()
    }

    pub fn set_thinking_mode(&self, enabled: bool) {
        self.state.borrow_mut().thinking_mode = enabled;
    }

    /// One conversational turn: appends the visitor message, calls the API
    /// once and appends either the reply or the apology.
    pub async fn dispatch(&self, input: &str) -> DispatchOutcome {
        let request = match self.state.borrow_mut().begin_dispatch(input) {
            Ok(request) => request,
            Err(rejected) => {
                debug!("dispatch not started: {rejected}");
                return DispatchOutcome::Rejected(rejected);
            }
        };

        let mut in_flight = InFlight { state: &self.state, settled: false };
        let result = self.api.complete(&request).await;
        in_flight.settle(result)
    }
}

/// Settles the dispatch even when the future is dropped mid-call, so the
/// widget always returns to `Idle` with two new messages.
struct InFlight<'a> {
    state: &'a RefCell<WidgetState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(&mut self, result: Result<String, ChatError>) -> DispatchOutcome {
        self.settled = true;
        self.state.borrow_mut().finish_dispatch(result)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        match self.state.try_borrow_mut() {
            Ok(mut state) => {
                state.finish_dispatch(Err(ChatError::Abandoned));
            }
            Err(e) => warn!("could not settle abandoned dispatch: {e}"),
        }
    }
}
