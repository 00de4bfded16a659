use bon::Builder;

use crate::AzureOpenAIError;

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

/// Environment variable holding the resource endpoint, e.g. `https://my-resource.openai.azure.com`
pub const ENDPOINT_ENV: &str = "AZURE_OAI_ENDPOINT";
/// Environment variable holding the access key
pub const API_KEY_ENV: &str = "AZURE_OAI_KEY";
/// Environment variable holding the deployment name
pub const DEPLOYMENT_ENV: &str = "AZURE_OAI_DEPLOYMENT";
/// Optional environment variable overriding [`DEFAULT_API_VERSION`]
pub const API_VERSION_ENV: &str = "AZURE_OAI_API_VERSION";

/// Connection settings for one Azure OpenAI deployment.
///
/// The values are opaque to the client: they are only used to build the
/// request URL and the `api-key` header.
#[derive(Clone, Builder)]
pub struct AzureConfig {
    /// Resource endpoint, without the `/openai/...` suffix
    #[builder(into)]
    pub endpoint: String,

    /// Access key sent in the `api-key` header
    #[builder(into)]
    pub api_key: String,

    /// Deployment name; Azure also accepts it as the model identifier
    #[builder(into)]
    pub deployment: String,

    /// Value of the `api-version` query parameter
    #[builder(default = DEFAULT_API_VERSION.to_string(), into)]
    pub api_version: String,
}

impl AzureConfig {
    /// Load the configuration from `AZURE_OAI_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AzureOpenAIError::MissingConfig`] naming the first required
    /// variable that is unset or not valid unicode.
    pub fn from_env() -> Result<Self, AzureOpenAIError> {
        let endpoint = required_var(ENDPOINT_ENV)?;
        let api_key = required_var(API_KEY_ENV)?;
        let deployment = required_var(DEPLOYMENT_ENV)?;
        let api_version =
            std::env::var(API_VERSION_ENV).unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            endpoint,
            api_key,
            deployment,
            api_version,
        })
    }

    /// Base URL of the deployment, `{endpoint}/openai/deployments/{deployment}`
    pub fn deployment_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}",
            self.endpoint.trim_end_matches('/'),
            self.deployment
        )
    }
}

// Keep the key out of logs and panics.
impl std::fmt::Debug for AzureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// Read a required environment variable
fn required_var(name: &'static str) -> Result<String, AzureOpenAIError> {
    std::env::var(name).map_err(|_| AzureOpenAIError::MissingConfig(name))
}
