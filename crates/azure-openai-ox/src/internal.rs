use std::collections::HashMap;

use reqwest::{Method, RequestBuilder as ReqwestRequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::{AzureConfig, AzureOpenAIError, ChatRequest, ChatResponse, error};

/// HTTP method for API endpoints
#[derive(Debug, Clone, Copy)]
pub(crate) enum HttpMethod {
    Post,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Post => Method::POST,
        }
    }
}

/// Authentication method for API requests
#[derive(Debug, Clone)]
pub(crate) enum AuthMethod {
    /// API key header (e.g., api-key: <key>)
    ApiKey { header_name: String, key: String },
}

/// An API endpoint relative to the configured base URL
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    pub query_params: Vec<(String, String)>,
}

impl Endpoint {
    pub(crate) fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
            query_params: Vec::new(),
        }
    }

    pub(crate) fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }
}

/// Configuration for request building
#[derive(Debug, Clone)]
pub(crate) struct RequestConfig {
    pub base_url: String,
    pub auth: Option<AuthMethod>,
    pub default_headers: HashMap<String, String>,
}

impl RequestConfig {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: None,
            default_headers: HashMap::new(),
        }
    }

    pub(crate) fn with_auth(mut self, auth: AuthMethod) -> Self {
        self.auth = Some(auth);
        self
    }

    pub(crate) fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }
}

/// Builds and executes HTTP requests against one base URL
pub(crate) struct RequestBuilder {
    client: reqwest::Client,
    config: RequestConfig,
}

impl RequestBuilder {
    pub(crate) fn new(client: reqwest::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    /// Build a reqwest `RequestBuilder` for the given endpoint
    fn build_request(&self, endpoint: &Endpoint) -> ReqwestRequestBuilder {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path.trim_start_matches('/')
        );

        let mut req = self.client.request(endpoint.method.into(), &url);

        if !endpoint.query_params.is_empty() {
            req = req.query(&endpoint.query_params);
        }

        if let Some(AuthMethod::ApiKey { header_name, key }) = &self.config.auth {
            req = req.header(header_name, key);
        }

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        req
    }

    /// Execute a request with JSON body and return deserialized response
    pub(crate) async fn request_json<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<T, AzureOpenAIError> {
        let mut req = self.build_request(endpoint);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            // Bodies carry inline images, so only the size is logged.
            log::trace!(
                "{:?} {} body: {} bytes",
                endpoint.method,
                endpoint.path,
                payload.len()
            );
            req = req.header("content-type", "application/json").body(payload);
        }

        let res = req.send().await?;
        Self::handle_response(res).await
    }

    /// Handle response and parse errors
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        res: Response,
    ) -> Result<T, AzureOpenAIError> {
        let status = res.status();
        let bytes = res.bytes().await?;

        if status.is_success() {
            serde_json::from_slice::<T>(&bytes).map_err(|e| {
                AzureOpenAIError::UnexpectedResponse(format!(
                    "HTTP {} but failed to decode JSON: {}; body: {}",
                    status.as_u16(),
                    e,
                    String::from_utf8_lossy(&bytes)
                ))
            })
        } else {
            log::debug!("request failed with HTTP {}", status.as_u16());
            Err(error::parse_error_response(status, &bytes))
        }
    }
}

/// Azure client helper methods on top of the generic `RequestBuilder`
pub(crate) struct AzureRequestHelper {
    request_builder: RequestBuilder,
    api_version: String,
}

impl AzureRequestHelper {
    pub(crate) fn new(client: reqwest::Client, config: &AzureConfig) -> Self {
        let request_config = RequestConfig::new(config.deployment_url())
            .with_auth(AuthMethod::ApiKey {
                header_name: "api-key".to_string(),
                key: config.api_key.clone(),
            })
            .with_header("accept", "application/json");

        Self {
            request_builder: RequestBuilder::new(client, request_config),
            api_version: config.api_version.clone(),
        }
    }

    /// Send a chat completion request
    pub(crate) async fn send_chat_request(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResponse, AzureOpenAIError> {
        let endpoint = Endpoint::new("chat/completions", HttpMethod::Post)
            .with_query_param("api-version", &self.api_version);

        self.request_builder
            .request_json(&endpoint, Some(request))
            .await
    }
}
