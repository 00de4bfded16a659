use serde::Deserialize;
use thiserror::Error;

/// Azure OpenAI error envelope
#[derive(Debug, Deserialize)]
struct AzureApiErrorPayload {
    /// Error details, absent on some gateway errors
    error: Option<AzureApiError>,
}

/// Specific error information from the API
#[derive(Debug, Deserialize)]
struct AzureApiError {
    /// Human readable message
    message: String,
    /// Error type, e.g. `invalid_request_error`
    r#type: Option<String>,
    /// Error code, e.g. `content_filter` or `429`
    code: Option<String>,
}

/// Errors that can occur when making requests to an Azure OpenAI deployment
#[derive(Debug, Error)]
pub enum AzureOpenAIError {
    /// HTTP client errors (connection, TLS, timeout)
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// The key was rejected (HTTP 401/403)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit or quota exceeded (HTTP 429)
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Any other structured error returned by the API
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        r#type: Option<String>,
    },

    /// Unexpected response from the API
    #[error("Unexpected response from API: {0}")]
    UnexpectedResponse(String),

    /// A required configuration value is missing
    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),

    /// The completion carried no choices or no text content
    #[error("Completion contained no text content")]
    EmptyCompletion,
}

/// Parse an error response from the Azure OpenAI API
pub(crate) fn parse_error_response(status: reqwest::StatusCode, bytes: &[u8]) -> AzureOpenAIError {
    let detail = serde_json::from_slice::<AzureApiErrorPayload>(bytes)
        .ok()
        .and_then(|payload| payload.error);

    let message = match &detail {
        Some(error) => error.message.clone(),
        None => String::from_utf8_lossy(bytes).to_string(),
    };

    match status.as_u16() {
        401 | 403 => AzureOpenAIError::Authentication(message),
        429 => AzureOpenAIError::RateLimit(message),
        code => match detail {
            Some(error) => AzureOpenAIError::Api {
                status: code,
                code: error.code,
                message: error.message,
                r#type: error.r#type,
            },
            None => AzureOpenAIError::UnexpectedResponse(format!("HTTP status {code}: {message}")),
        },
    }
}
