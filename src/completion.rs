use serde::Serialize;

use crate::config::ChatConfig;
use crate::errors::ChatError;
use crate::models::{Message, Role};

/// Which backend model a dispatch asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    Fast,
    ExtendedReasoning,
}

impl ModelVariant {
    pub fn for_thinking_mode(thinking_mode: bool) -> Self {
        if thinking_mode {
            ModelVariant::ExtendedReasoning
        } else {
            ModelVariant::Fast
        }
    }
}

/// One role-tagged entry of the outbound contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl From<&Message> for Turn {
    fn from(m: &Message) -> Self {
        Self { role: m.role, text: m.text.clone() }
    }
}

/// A fully assembled call to the completion API.
///
/// `contents` holds the replayed history followed by the new visitor turn,
/// so it is never empty and always ends with a visitor turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub system_instruction: String,
    pub contents: Vec<Turn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
}

impl CompletionRequest {
    /// Builds the request for one dispatch. `history` must be captured before
    /// the new visitor message is appended to the store.
    pub fn build<'a>(
        config: &ChatConfig,
        system_instruction: &str,
        history: impl Iterator<Item = &'a Message>,
        input: &str,
        thinking_mode: bool,
    ) -> Self {
        let variant = ModelVariant::for_thinking_mode(thinking_mode);
        let mut contents: Vec<Turn> = history.map(Turn::from).collect();
        contents.push(Turn { role: Role::Visitor, text: input.to_string() });

        Self {
            model: config.model_for(variant).to_string(),
            system_instruction: system_instruction.to_string(),
            contents,
            thinking_budget: config.thinking_budget_for(variant),
        }
    }

    /// The turns before the new visitor message.
    pub fn prior_turns(&self) -> &[Turn] {
        &self.contents[..self.contents.len().saturating_sub(1)]
    }

    /// The new visitor message.
    pub fn prompt(&self) -> &str {
        self.contents.last().map(|t| t.text.as_str()).unwrap_or_default()
    }
}

/// The hosted completion endpoint. One call per dispatch, no retries.
#[allow(async_fn_in_trait)]
pub trait CompletionApi {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationStore;
    use crate::persona::PERSONA;

    fn config() -> ChatConfig {
        ChatConfig::new("test-key")
    }

    #[test]
    fn fast_mode_has_no_budget() {
        let store = ConversationStore::initialize();
        let request = CompletionRequest::build(&config(), PERSONA, store.history(), "Bonjour", false);

        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.thinking_budget, None);
        assert_eq!(request.system_instruction, PERSONA);
    }

    #[test]
    fn thinking_mode_selects_reasoning_model_and_budget() {
        let store = ConversationStore::initialize();
        let request = CompletionRequest::build(&config(), PERSONA, store.history(), "Bonjour", true);

        assert_eq!(request.model, "gemini-2.5-pro");
        assert_eq!(request.thinking_budget, Some(32_768));
    }

    #[test]
    fn contents_are_history_then_input_without_greeting() {
        let mut store = ConversationStore::initialize();
        store.append(Message::visitor("Où êtes-vous ?"));
        store.append(Message::assistant("À Gerponville."));

        let request =
            CompletionRequest::build(&config(), PERSONA, store.history(), "Et à distance ?", false);

        let texts: Vec<_> = request.contents.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Où êtes-vous ?", "À Gerponville.", "Et à distance ?"]);
        assert_eq!(request.prompt(), "Et à distance ?");
        assert_eq!(request.prior_turns().len(), 2);
        assert_eq!(request.contents.last().map(|t| t.role), Some(Role::Visitor));
    }

    #[test]
    fn budget_is_omitted_from_serialized_fast_request() {
        let store = ConversationStore::initialize();
        let request = CompletionRequest::build(&config(), PERSONA, store.history(), "Bonjour", false);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("thinking_budget").is_none());
    }
}
