//! Tokenize and detokenize endpoints of OpenAI-compatible inference servers.

pub(crate) mod client;
pub(crate) mod request;
pub(crate) mod response;

pub use client::TokenizeClient;
pub use request::{ChatDetokenizeRequest, ChatTokenizeRequest, TextTokenizeRequest};
pub use response::{DetokenizeResponse, TokenizeResponse};
