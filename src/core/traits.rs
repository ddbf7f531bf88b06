use async_trait::async_trait;
use bytes::Bytes;

use super::{context::RequestContext, error::LlmError};
use crate::tokenize::{
    ChatDetokenizeRequest, ChatTokenizeRequest, DetokenizeResponse, TextTokenizeRequest,
    TokenizeResponse,
};

/// Server-side tokenization endpoints.
///
/// Every method issues exactly one HTTP request and never retries.
#[async_trait]
pub trait TokenizerProvider: Send + Sync {
    async fn create_chat_tokenize(
        &self,
        ctx: &RequestContext,
        request: ChatTokenizeRequest,
    ) -> Result<TokenizeResponse, LlmError>;

    async fn create_text_tokenize(
        &self,
        ctx: &RequestContext,
        request: TextTokenizeRequest,
    ) -> Result<TokenizeResponse, LlmError>;

    /// Forward `body` to the tokenize endpoint without re-encoding it.
    /// `model` is only used to resolve the Azure deployment.
    async fn create_tokenize_raw(
        &self,
        ctx: &RequestContext,
        model: &str,
        body: Bytes,
    ) -> Result<TokenizeResponse, LlmError>;

    async fn create_chat_detokenize(
        &self,
        ctx: &RequestContext,
        request: ChatDetokenizeRequest,
    ) -> Result<DetokenizeResponse, LlmError>;
}
