//! Client for the tokenize/detokenize endpoints.
//!
//! Each call resolves the URL and auth headers from [`ClientConfig`], performs
//! a single POST and returns the typed response with the response headers
//! attached.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use reqwest::header::HeaderMap;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    core::{HttpClient, LlmError, RequestContext, ResponseMetadata, TokenizerProvider},
    provider::{ClientConfig, constants::endpoints},
    tokenize::{
        ChatDetokenizeRequest, ChatTokenizeRequest, DetokenizeResponse, TextTokenizeRequest,
        TokenizeResponse,
    },
};

/// Client bound to one backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TokenizeClient {
    config: ClientConfig,
    http: HttpClient,
}

impl TokenizeClient {
    /// Create a client after validating `config`.
    pub fn new(config: ClientConfig) -> Result<Self, LlmError> {
        config.validate()?;
        let http = HttpClient::new(config.http_client.clone());
        Ok(Self { config, http })
    }

    /// Shorthand for [`ClientConfig::default_config`].
    pub fn with_token(auth_token: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(ClientConfig::default_config(auth_token))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn prepare(&self, suffix: &str, model: &str) -> Result<(Url, HeaderMap), LlmError> {
        let url = self.config.full_url(suffix, model)?;
        let headers = self.config.auth_headers()?;
        Ok((url, headers))
    }

    #[tracing::instrument(
        name = "api_call",
        level = "debug",
        skip(self, ctx, request),
        fields(api_type = %self.config.api_type),
        err
    )]
    async fn send_json<Req, Res>(
        &self,
        ctx: &RequestContext,
        suffix: &str,
        model: &str,
        request: &Req,
    ) -> Result<(Res, ResponseMetadata), LlmError>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let (url, headers) = self.prepare(suffix, model)?;
        let (response, headers) = self.http.post_json(ctx, url, headers, request).await?;
        Ok((response, ResponseMetadata::new(headers)))
    }
}

#[async_trait]
impl TokenizerProvider for TokenizeClient {
    async fn create_chat_tokenize(
        &self,
        ctx: &RequestContext,
        request: ChatTokenizeRequest,
    ) -> Result<TokenizeResponse, LlmError> {
        let (mut response, metadata): (TokenizeResponse, _) = self
            .send_json(ctx, endpoints::TOKENIZE, &request.model, &request)
            .await?;
        response.metadata = metadata;
        Ok(response)
    }

    async fn create_text_tokenize(
        &self,
        ctx: &RequestContext,
        request: TextTokenizeRequest,
    ) -> Result<TokenizeResponse, LlmError> {
        let (mut response, metadata): (TokenizeResponse, _) = self
            .send_json(ctx, endpoints::TOKENIZE, &request.model, &request)
            .await?;
        response.metadata = metadata;
        Ok(response)
    }

    async fn create_tokenize_raw(
        &self,
        ctx: &RequestContext,
        model: &str,
        body: Bytes,
    ) -> Result<TokenizeResponse, LlmError> {
        let (url, headers) = self.prepare(endpoints::TOKENIZE, model)?;
        let (mut response, headers): (TokenizeResponse, _) =
            self.http.post_bytes(ctx, url, headers, body).await?;
        response.metadata = ResponseMetadata::new(headers);
        Ok(response)
    }

    async fn create_chat_detokenize(
        &self,
        ctx: &RequestContext,
        request: ChatDetokenizeRequest,
    ) -> Result<DetokenizeResponse, LlmError> {
        let (mut response, metadata): (DetokenizeResponse, _) = self
            .send_json(ctx, endpoints::DETOKENIZE, &request.model, &request)
            .await?;
        response.metadata = metadata;
        Ok(response)
    }
}
