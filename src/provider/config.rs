//! Connection parameters for one backend and the per-call addressing derived
//! from them.

use std::fmt;
use std::sync::Arc;

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use super::ApiType;
use super::constants::{azure, openai};
use crate::core::{HttpClientConfig, LlmError};

/// Maps a model name onto an Azure deployment name.
pub type ModelMapper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Configuration of a [`TokenizeClient`](crate::TokenizeClient).
///
/// Cloning is cheap: the HTTP client and the model mapper are shared.
#[derive(Clone)]
pub struct ClientConfig {
    pub auth_token: String,
    pub base_url: String,
    pub org_id: String,
    pub api_type: ApiType,
    /// Required when `api_type` is [`ApiType::Azure`] or [`ApiType::AzureAD`].
    pub api_version: String,
    pub assistant_version: String,
    pub model_mapper: Option<ModelMapper>,
    pub http_client: reqwest::Client,
    pub empty_messages_limit: u32,
}

impl ClientConfig {
    /// Preset for the public OpenAI API.
    pub fn default_config(auth_token: impl Into<String>) -> Self {
        Self::default_config_with_url(auth_token, openai::API_BASE)
    }

    /// OpenAI-style preset against a self-hosted or compatible server.
    pub fn default_config_with_url(
        auth_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            auth_token: auth_token.into(),
            base_url: base_url.into(),
            org_id: String::new(),
            api_type: ApiType::OpenAI,
            api_version: String::new(),
            assistant_version: openai::DEFAULT_ASSISTANT_VERSION.to_string(),
            model_mapper: None,
            http_client: reqwest::Client::new(),
            empty_messages_limit: openai::DEFAULT_EMPTY_MESSAGES_LIMIT,
        }
    }

    /// Preset for Azure OpenAI. Deployment names are the model name with
    /// `.` and `:` removed.
    pub fn default_azure_config(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            auth_token: api_key.into(),
            base_url: base_url.into(),
            org_id: String::new(),
            api_type: ApiType::Azure,
            api_version: azure::DEFAULT_API_VERSION.to_string(),
            assistant_version: String::new(),
            model_mapper: Some(Arc::new(strip_azure_disallowed)),
            http_client: reqwest::Client::new(),
            empty_messages_limit: openai::DEFAULT_EMPTY_MESSAGES_LIMIT,
        }
    }

    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = org_id.into();
        self
    }

    pub fn with_api_type(mut self, api_type: ApiType) -> Self {
        self.api_type = api_type;
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_assistant_version(mut self, version: impl Into<String>) -> Self {
        self.assistant_version = version.into();
        self
    }

    pub fn with_model_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.model_mapper = Some(Arc::new(mapper));
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = client;
        self
    }

    /// Replace the HTTP client with one built from `config`.
    pub fn with_http_config(mut self, config: &HttpClientConfig) -> Result<Self, LlmError> {
        self.http_client = config.build_client()?;
        Ok(self)
    }

    pub fn with_empty_messages_limit(mut self, limit: u32) -> Self {
        self.empty_messages_limit = limit;
        self
    }

    /// Azure deployment name for `model`; the model itself when no mapper is set.
    pub fn get_azure_deployment_by_model(&self, model: &str) -> String {
        match &self.model_mapper {
            Some(mapper) => mapper(model),
            None => model.to_string(),
        }
    }

    /// Check the invariants a client needs before issuing any request.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.api_type.requires_api_version() && self.api_version.is_empty() {
            return Err(LlmError::ProviderConfiguration(format!(
                "api_version is required for API type {}",
                self.api_type
            )));
        }

        let base = self.parse_base_url()?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(LlmError::ProviderConfiguration(format!(
                "Unsupported base URL scheme '{}'",
                base.scheme()
            )));
        }

        Ok(())
    }

    /// Resolve the full request URL for `suffix` (e.g. `/tokenize`).
    pub fn full_url(&self, suffix: &str, model: &str) -> Result<Url, LlmError> {
        let mut url = self.parse_base_url()?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                LlmError::ProviderConfiguration(format!(
                    "Base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty();

            if self.api_type.uses_deployment_routing() {
                let deployment = self.get_azure_deployment_by_model(model);
                segments
                    .push(azure::API_PREFIX)
                    .push(azure::DEPLOYMENTS_PREFIX)
                    .push(&deployment);
            }

            segments.extend(suffix.trim_start_matches('/').split('/'));
        }

        if !self.api_version.is_empty() {
            url.query_pairs_mut()
                .append_pair("api-version", &self.api_version);
        }

        Ok(url)
    }

    /// Authentication headers for the configured API type.
    pub fn auth_headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();

        if self.api_type.uses_api_key_header() {
            headers.insert(
                HeaderName::from_static(azure::API_KEY_HEADER),
                header_value(&self.auth_token, "API key")?,
            );
            return Ok(headers);
        }

        if !self.auth_token.is_empty() {
            headers.insert(
                AUTHORIZATION,
                header_value(&format!("Bearer {}", self.auth_token), "Bearer token")?,
            );
        }

        if !self.org_id.is_empty() {
            headers.insert(
                HeaderName::from_static(openai::ORGANIZATION_HEADER),
                header_value(&self.org_id, "Organization id")?,
            );
        }

        Ok(headers)
    }

    fn parse_base_url(&self) -> Result<Url, LlmError> {
        let trimmed = self.base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| LlmError::Request {
            message: format!("Invalid base URL '{}'", self.base_url),
            source: Some(Box::new(e)),
        })
    }
}

fn strip_azure_disallowed(model: &str) -> String {
    model.chars().filter(|c| !matches!(c, '.' | ':')).collect()
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue, LlmError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| LlmError::request(format!("{what} contains invalid header characters")))?;
    value.set_sensitive(true);
    Ok(value)
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("auth_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("org_id", &self.org_id)
            .field("api_type", &self.api_type)
            .field("api_version", &self.api_version)
            .field("assistant_version", &self.assistant_version)
            .field("model_mapper", &self.model_mapper.is_some())
            .field("empty_messages_limit", &self.empty_messages_limit)
            .finish()
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<OpenAI API ClientConfig>")
    }
}
