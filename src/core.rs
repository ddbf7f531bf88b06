pub mod context;
pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use context::RequestContext;
pub use error::{ApiErrorBody, ErrorKind, LlmError};
pub use http::{HttpClient, HttpClientConfig};
pub use traits::TokenizerProvider;
pub use types::{ChatRole, Message, RateLimitHeaders, ResponseMetadata};
