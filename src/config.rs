use crate::completion::ModelVariant;
use crate::errors::ChatError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const BASE_URL_VAR: &str = "GEMINI_API_BASE_URL";
pub const FAST_MODEL_VAR: &str = "TOURMALINE_FAST_MODEL";
pub const REASONING_MODEL_VAR: &str = "TOURMALINE_REASONING_MODEL";
pub const THINKING_BUDGET_VAR: &str = "TOURMALINE_THINKING_BUDGET";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_FAST_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_REASONING_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_THINKING_BUDGET: u32 = 32_768;

/// Everything the widget needs to reach the completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub api_key: String,
    pub base_url: String,
    pub fast_model: String,
    pub reasoning_model: String,
    /// Ceiling on internal reasoning tokens, sent only in thinking mode.
    pub thinking_budget: u32,
}

impl ChatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            fast_model: DEFAULT_FAST_MODEL.to_string(),
            reasoning_model: DEFAULT_REASONING_MODEL.to_string(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
        }
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ChatError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset optional
    /// variables fall back to the defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChatError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ChatError::MissingSetting { name: API_KEY_VAR.to_string() })?;

        let mut config = Self::new(api_key.trim());
        if let Some(url) = lookup(BASE_URL_VAR) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup(FAST_MODEL_VAR) {
            config.fast_model = model.trim().to_string();
        }
        if let Some(model) = lookup(REASONING_MODEL_VAR) {
            config.reasoning_model = model.trim().to_string();
        }
        if let Some(budget) = lookup(THINKING_BUDGET_VAR) {
            config.thinking_budget = budget.trim().parse().map_err(|e| {
                ChatError::invalid(THINKING_BUDGET_VAR, format!("'{budget}' is not a number: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChatError> {
        if self.base_url.is_empty() {
            return Err(ChatError::invalid(BASE_URL_VAR, "must not be empty"));
        }
        if self.fast_model.is_empty() {
            return Err(ChatError::invalid(FAST_MODEL_VAR, "must not be empty"));
        }
        if self.reasoning_model.is_empty() {
            return Err(ChatError::invalid(REASONING_MODEL_VAR, "must not be empty"));
        }
        if self.thinking_budget == 0 {
            return Err(ChatError::invalid(THINKING_BUDGET_VAR, "must be greater than 0"));
        }
        Ok(())
    }

    pub fn model_for(&self, variant: ModelVariant) -> &str {
        match variant {
            ModelVariant::Fast => &self.fast_model,
            ModelVariant::ExtendedReasoning => &self.reasoning_model,
        }
    }

    pub fn thinking_budget_for(&self, variant: ModelVariant) -> Option<u32> {
        match variant {
            ModelVariant::Fast => None,
            ModelVariant::ExtendedReasoning => Some(self.thinking_budget),
        }
    }
}
