//! Conversation state and completion dispatch for the Tourma-Line chat widget.

pub mod agent;
pub mod completion;
pub mod config;
pub mod conversation;
pub mod dispatcher;
pub mod errors;
pub mod models;
pub mod persona;
pub mod service;
pub mod widget;

pub use agent::GeminiAgentService;
pub use completion::{CompletionApi, CompletionRequest, ModelVariant, Turn};
pub use config::ChatConfig;
pub use conversation::ConversationStore;
pub use dispatcher::{DispatchOutcome, DispatchState, Dispatcher};
pub use errors::{ChatError, DispatchRejected};
pub use models::{Message, Role};
pub use service::chat_service::ChatService;
pub use widget::{WidgetEvent, WidgetState};
