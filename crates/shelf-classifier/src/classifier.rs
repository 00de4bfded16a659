use std::path::Path;

use azure_openai_ox::{AzureConfig, AzureOpenAI, AzureOpenAIError, ChatRequest, Message};
use bon::Builder;

use crate::{ClassifyError, EncodeError, ExemplarSet, PROMPT_VERSION, PromptTemplate, build_messages};

/// Output budget for one classification
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Low temperature keeps repeated runs close to each other
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// A remote model that turns one chat request into one text completion.
///
/// Retries, authentication and transport are the implementor's business;
/// errors are handed back to the caller unchanged.
pub trait InferenceClient {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run `request` and return the first completion's text
    async fn infer(&self, request: ChatRequest) -> Result<String, Self::Error>;
}

impl InferenceClient for AzureOpenAI {
    type Error = AzureOpenAIError;

    async fn infer(&self, request: ChatRequest) -> Result<String, Self::Error> {
        self.complete(&request).await
    }
}

/// Settings for a [`Classifier`]
#[derive(Debug, Clone, Builder)]
pub struct ClassifierConfig {
    /// Reference photos shown before the query image
    #[builder(default)]
    pub exemplars: ExemplarSet,

    /// Model identifier sent with each request
    #[builder(into)]
    pub model: String,

    #[builder(default = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    #[builder(default)]
    pub template: PromptTemplate,
}

/// Classifies shelf photos with a few-shot prompt and one inference call.
#[derive(Debug, Clone)]
pub struct Classifier<C> {
    config: ClassifierConfig,
    client: C,
}

impl<C: InferenceClient> Classifier<C> {
    pub fn new(config: ClassifierConfig, client: C) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Wrap assembled turns into a request with this classifier's model and sampling settings
    pub fn request_for(&self, messages: Vec<Message>) -> ChatRequest {
        ChatRequest::builder()
            .model(self.config.model.as_str())
            .messages(messages)
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .build()
    }

    /// Build the full request for `query` without sending it
    ///
    /// # Errors
    ///
    /// Any exemplar or the query image is missing or unreadable.
    pub fn build_request(&self, query: impl AsRef<Path>) -> Result<ChatRequest, EncodeError> {
        let messages = build_messages(&self.config.exemplars, query, &self.config.template)?;
        Ok(self.request_for(messages))
    }

    /// Classify the photo at `query` and return the model's answer verbatim.
    ///
    /// # Errors
    ///
    /// [`ClassifyError::Encode`] when an image is missing or unreadable, in
    /// which case the client is never called; [`ClassifyError::Inference`]
    /// with the client's error otherwise.
    pub async fn classify(&self, query: impl AsRef<Path>) -> Result<String, ClassifyError<C::Error>> {
        let query = query.as_ref();
        log::info!(
            "classifying {} with model {} (prompt v{PROMPT_VERSION})",
            query.display(),
            self.config.model
        );
        let request = self.build_request(query)?;
        self.send(request).await
    }

    /// Send already assembled turns
    ///
    /// # Errors
    ///
    /// [`ClassifyError::Inference`] with the client's error.
    pub async fn classify_messages(
        &self,
        messages: Vec<Message>,
    ) -> Result<String, ClassifyError<C::Error>> {
        self.send(self.request_for(messages)).await
    }

    async fn send(&self, request: ChatRequest) -> Result<String, ClassifyError<C::Error>> {
        let text = self
            .client
            .infer(request)
            .await
            .map_err(ClassifyError::Inference)?;
        log::debug!("model answered with {} bytes", text.len());
        Ok(text)
    }
}

impl Classifier<AzureOpenAI> {
    /// Classifier backed by an Azure deployment; the deployment name is the model id
    ///
    /// # Errors
    ///
    /// Propagates [`AzureOpenAI::new`] failures.
    pub fn azure(config: AzureConfig, exemplars: ExemplarSet) -> Result<Self, AzureOpenAIError> {
        let classifier_config = ClassifierConfig::builder()
            .model(config.deployment.as_str())
            .exemplars(exemplars)
            .build();
        Ok(Self::new(classifier_config, AzureOpenAI::new(config)?))
    }

    /// Like [`Classifier::azure`], reading the connection from `AZURE_OAI_*` variables
    ///
    /// # Errors
    ///
    /// [`AzureOpenAIError::MissingConfig`] when a required variable is unset.
    pub fn from_env(exemplars: ExemplarSet) -> Result<Self, AzureOpenAIError> {
        Self::azure(AzureConfig::from_env()?, exemplars)
    }
}
