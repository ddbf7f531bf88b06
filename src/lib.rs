//! # tokenize-client
//!
//! Typed client for the `/tokenize` and `/detokenize` endpoints exposed by
//! OpenAI-compatible inference servers, with support for Azure OpenAI
//! deployments and Cloudflare-proxied Azure.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tokenize_client::{
//!     ClientConfig, RequestContext, TextTokenizeRequest, TokenizeClient, TokenizerProvider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default_config_with_url("token", "http://localhost:8000");
//!     let client = TokenizeClient::new(config)?;
//!
//!     let response = client
//!         .create_text_tokenize(
//!             &RequestContext::background(),
//!             TextTokenizeRequest::new("meta-llama/Llama-3.1-8B-Instruct", "hello world"),
//!         )
//!         .await?;
//!
//!     println!("{} tokens: {:?}", response.count, response.tokens);
//!     Ok(())
//! }
//! ```
//!
//! Calls never retry. Cancellation and deadlines are carried by
//! [`RequestContext`].

pub mod core;
pub mod provider;
pub mod tokenize;

pub use crate::core::{
    ApiErrorBody, ChatRole, ErrorKind, HttpClientConfig, LlmError, Message, RateLimitHeaders,
    RequestContext, ResponseMetadata, TokenizerProvider,
};
pub use provider::{ApiType, ClientConfig, ModelMapper};
pub use tokenize::{
    ChatDetokenizeRequest, ChatTokenizeRequest, DetokenizeResponse, TextTokenizeRequest,
    TokenizeClient, TokenizeResponse,
};
pub use tokio_util::sync::CancellationToken;
