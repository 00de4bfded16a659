use std::time::Duration;

use crate::{
    AzureConfig, AzureOpenAIError, ChatRequest, ChatResponse, internal::AzureRequestHelper,
};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Azure OpenAI deployment client
#[derive(Debug, Clone)]
pub struct AzureOpenAI {
    /// Endpoint, key, deployment and API version
    config: AzureConfig,

    /// HTTP client for making requests
    client: reqwest::Client,
}

impl AzureOpenAI {
    /// Create a new client for the given deployment
    ///
    /// # Errors
    ///
    /// Returns [`AzureOpenAIError::Reqwest`] when the HTTP client cannot be
    /// built, e.g. the TLS backend fails to initialize.
    pub fn new(config: AzureConfig) -> Result<Self, AzureOpenAIError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self { config, client })
    }

    /// Create a new client from `AZURE_OAI_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns [`AzureOpenAIError::MissingConfig`] when a required variable is unset.
    pub fn from_env() -> Result<Self, AzureOpenAIError> {
        Self::new(AzureConfig::from_env()?)
    }

    /// Deployment name, also usable as the request's model identifier
    pub fn deployment(&self) -> &str {
        &self.config.deployment
    }

    /// Connection settings of this client
    pub fn config(&self) -> &AzureConfig {
        &self.config
    }

    /// Create a chat request builder
    pub fn chat(&self) -> crate::request::ChatRequestBuilder {
        ChatRequest::builder()
    }

    /// Send a chat request and get a response
    ///
    /// # Errors
    ///
    /// Transport failures, non-success HTTP statuses and undecodable bodies
    /// are returned as [`AzureOpenAIError`] without retrying.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, AzureOpenAIError> {
        log::debug!(
            "sending chat completion to deployment {} ({} messages)",
            self.config.deployment,
            request.messages.len()
        );

        let response = AzureRequestHelper::new(self.client.clone(), &self.config)
            .send_chat_request(request)
            .await?;

        if let Some(usage) = &response.usage {
            log::debug!(
                "chat completion {} used {} prompt / {} completion tokens",
                response.id,
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        Ok(response)
    }

    /// Send a chat request and return the first choice's text
    ///
    /// # Errors
    ///
    /// As [`AzureOpenAI::send`], plus [`AzureOpenAIError::EmptyCompletion`]
    /// when the response has no choices or the first choice has no text.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, AzureOpenAIError> {
        let response = self.send(request).await?;
        response
            .content()
            .map(ToString::to_string)
            .ok_or(AzureOpenAIError::EmptyCompletion)
    }
}
