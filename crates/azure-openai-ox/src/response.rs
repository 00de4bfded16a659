use crate::{Message, Usage};
use serde::{Deserialize, Serialize};

/// Response from chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Unique identifier for the response
    pub id: String,

    /// Object type (usually "chat.completion")
    pub object: String,

    /// Unix timestamp of creation
    pub created: u64,

    /// Model used for the completion
    pub model: String,

    /// List of completion choices
    pub choices: Vec<Choice>,

    /// Usage statistics
    pub usage: Option<Usage>,

    /// System fingerprint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_fingerprint: Option<String>,

    /// Azure content filter verdicts for the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_filter_results: Option<serde_json::Value>,
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice
    pub index: u32,

    /// The completion message
    pub message: Message,

    /// Reason for stopping
    pub finish_reason: Option<String>,

    /// Azure content filter verdicts for this choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_filter_results: Option<serde_json::Value>,
}

impl ChatResponse {
    /// Get the text content of the first choice, if available
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| match choice.message.content.as_ref()? {
                crate::Content::Text(text) => Some(text.as_str()),
                crate::Content::Parts(parts) => parts.iter().find_map(|part| part.as_text()),
            })
    }
}
