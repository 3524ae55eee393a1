use rig::completion::Chat;
use rig::message::Message as RigMessage;
use rig::prelude::CompletionClient;
use rig::providers::gemini;
use serde_json::json;
use tracing::{debug, error};

use crate::completion::{CompletionApi, CompletionRequest, Turn};
use crate::config::ChatConfig;
use crate::errors::ChatError;
use crate::models::Role;

/// Converts the replayed turns into rig's message history.
fn to_rig_history(turns: &[Turn]) -> Vec<RigMessage> {
    turns
        .iter()
        .map(|t| match t.role {
            Role::Visitor => RigMessage::user(&t.text),
            Role::Assistant => RigMessage::assistant(&t.text),
        })
        .collect()
}

/// Gemini `generationConfig` fragment carrying the reasoning budget.
fn thinking_params(budget: u32) -> serde_json::Value {
    json!({
        "generationConfig": {
            "thinkingConfig": { "thinkingBudget": budget }
        }
    })
}

/// Completion backend talking to Gemini through rig.
/// A fresh agent is built per request: model, persona and budget all come
/// from the [`CompletionRequest`].
#[derive(Clone)]
pub struct GeminiAgentService {
    client: gemini::Client,
    base_url: String,
}

impl GeminiAgentService {
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let client = gemini::Client::builder()
            .api_key(config.api_key.clone())
            .base_url(&config.base_url)
            .build()
            .map_err(|e| ChatError::ClientBuild { message: e.to_string() })?;
        Ok(Self { client, base_url: config.base_url.clone() })
    }

    fn classify(&self, model: &str, message: String) -> ChatError {
        if message.contains("Connection refused") || message.contains("connect") {
            ChatError::ServiceUnavailable { host: self.base_url.clone() }
        } else if message.contains("404") || message.contains("not found") {
            ChatError::ModelNotFound { model_name: model.to_string() }
        } else {
            ChatError::InferenceError { message }
        }
    }
}

impl CompletionApi for GeminiAgentService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError> {
        let mut builder = self
            .client
            .agent(&request.model)
            .preamble(&request.system_instruction);
        if let Some(budget) = request.thinking_budget {
            builder = builder.additional_params(thinking_params(budget));
        }
        let agent = builder.build();

        let history = to_rig_history(request.prior_turns());
        debug!(model = %request.model, turns = history.len(), "sending Gemini completion");

        let content = agent
            .chat(request.prompt(), history)
            .await
            .map_err(|e| {
                error!("Gemini completion failed on model {}: {e}", request.model);
                self.classify(&request.model, e.to_string())
            })?;

        if content.trim().is_empty() {
            return Err(ChatError::EmptyCompletion { model_name: request.model.clone() });
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationStore;
    use crate::models::Message;
    use crate::persona::PERSONA;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gemini_reply(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 8,
                "totalTokenCount": 20
            },
            "modelVersion": "gemini-2.5-flash",
            "responseId": "resp-tourmaline-1"
        })
    }

    fn service_against(mock_server: &MockServer) -> (ChatConfig, GeminiAgentService) {
        let mut config = ChatConfig::new("test-key");
        config.base_url = mock_server.uri();
        let service = GeminiAgentService::new(&config).unwrap();
        (config, service)
    }

    async fn last_body(mock_server: &MockServer) -> (String, serde_json::Value) {
        let requests = mock_server.received_requests().await.unwrap();
        let last = requests.last().unwrap();
        (last.url.path().to_string(), serde_json::from_slice(&last.body).unwrap())
    }

    #[test]
    fn history_keeps_order_and_roles() {
        let turns = vec![
            Turn { role: Role::Visitor, text: "Bonjour".into() },
            Turn { role: Role::Assistant, text: "Bonjour !".into() },
        ];
        let history = to_rig_history(&turns);
        assert_eq!(history.len(), 2);
        assert!(matches!(history[0], RigMessage::User { .. }));
        assert!(matches!(history[1], RigMessage::Assistant { .. }));
    }

    #[test]
    fn thinking_params_nest_the_budget() {
        let params = thinking_params(32_768);
        assert_eq!(params["generationConfig"]["thinkingConfig"]["thinkingBudget"], 32_768);
    }

    #[tokio::test]
    async fn server_error_becomes_chat_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex("gemini-2.5-flash"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = ChatConfig::new("test-key");
        config.base_url = mock_server.uri();
        let service = GeminiAgentService::new(&config).unwrap();

        let mut store = ConversationStore::initialize();
        store.append(Message::visitor("Bonjour"));
        store.append(Message::assistant("Bonjour !"));
        let request =
            CompletionRequest::build(&config, PERSONA, store.history(), "Vos tarifs ?", false);

        let result = service.complete(&request).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let mut config = ChatConfig::new("test-key");
        config.base_url = "http://127.0.0.1:1".to_string();
        let service = GeminiAgentService::new(&config).unwrap();

        let store = ConversationStore::initialize();
        let request = CompletionRequest::build(&config, PERSONA, store.history(), "Bonjour", true);

        assert!(service.complete(&request).await.is_err());
    }

    #[tokio::test]
    async fn reply_text_is_returned() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex("gemini-2.5-flash"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(gemini_reply("Les consultations sont à 50€.")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let (config, service) = service_against(&mock_server);

        let store = ConversationStore::initialize();
        let request =
            CompletionRequest::build(&config, PERSONA, store.history(), "Quels sont vos tarifs ?", false);

        let reply = service.complete(&request).await.unwrap();
        assert_eq!(reply, "Les consultations sont à 50€.");
    }

    #[tokio::test]
    async fn empty_reply_is_an_empty_completion() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("")))
            .mount(&mock_server)
            .await;
        let (config, service) = service_against(&mock_server);

        let store = ConversationStore::initialize();
        let request = CompletionRequest::build(&config, PERSONA, store.history(), "Bonjour", false);

        let err = service.complete(&request).await.unwrap_err();
        assert!(matches!(
            err,
            ChatError::EmptyCompletion { ref model_name } if model_name == "gemini-2.5-flash"
        ));
    }

    #[tokio::test]
    async fn thinking_budget_reaches_the_wire_only_in_thinking_mode() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("Bien sûr.")))
            .mount(&mock_server)
            .await;
        let (config, service) = service_against(&mock_server);
        let store = ConversationStore::initialize();

        let reasoning = CompletionRequest::build(&config, PERSONA, store.history(), "Bonjour", true);
        service.complete(&reasoning).await.unwrap();
        let (path, body) = last_body(&mock_server).await;
        assert!(path.contains("gemini-2.5-pro"));
        assert!(!body["systemInstruction"].is_null());
        assert_eq!(body["generationConfig"]["thinkingConfig"]["thinkingBudget"], 32_768);

        let fast = CompletionRequest::build(&config, PERSONA, store.history(), "Bonjour", false);
        service.complete(&fast).await.unwrap();
        let (path, body) = last_body(&mock_server).await;
        assert!(path.contains("gemini-2.5-flash"));
        assert!(!body["systemInstruction"].is_null());
        assert!(body["generationConfig"].is_null());
    }
}
