use thiserror::Error;

/// Errors raised by configuration and by the completion backend.
/// None of these ever reach the visitor: the dispatcher folds them into the
/// apology message and logs the detail.
#[derive(Debug, Error)]
pub enum ChatError {
    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Setting '{name}' must be set")]
    MissingSetting { name: String },

    #[error("Setting '{name}' is invalid: {reason}")]
    InvalidSetting { name: String, reason: String },

    // ── Completion API errors ────────────────────────────────────────────────
    #[error("Failed to build the Gemini client: {message}")]
    ClientBuild { message: String },

    #[error("Gemini service unavailable at {host}")]
    ServiceUnavailable { host: String },

    #[error("Model '{model_name}' not found")]
    ModelNotFound { model_name: String },

    #[error("Inference error: {message}")]
    InferenceError { message: String },

    #[error("Model '{model_name}' returned an empty completion")]
    EmptyCompletion { model_name: String },

    // ── Dispatch lifecycle ───────────────────────────────────────────────────
    #[error("Dispatch was dropped before the completion arrived")]
    Abandoned,
}

impl ChatError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ChatError::InvalidSetting { name: name.into(), reason: reason.into() }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, ChatError::MissingSetting { .. } | ChatError::InvalidSetting { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::ServiceUnavailable { .. } | ChatError::ClientBuild { .. })
    }
}

/// Why a dispatch was refused before anything was appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchRejected {
    #[error("Field 'input' cannot be empty")]
    EmptyInput,

    #[error("A dispatch is already in flight")]
    AlreadySending,
}
