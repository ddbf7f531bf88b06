use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    Developer,
    User,
    Assistant,
    Tool,
}

/// A chat message as accepted by the chat tokenize endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            name: None,
            tool_call_id: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Metadata captured from the HTTP response, shared by every response type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetadata {
    headers: HeaderMap,
}

impl ResponseMetadata {
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn rate_limits(&self) -> RateLimitHeaders {
        RateLimitHeaders {
            limit_requests: self.parse_header("x-ratelimit-limit-requests"),
            limit_tokens: self.parse_header("x-ratelimit-limit-tokens"),
            remaining_requests: self.parse_header("x-ratelimit-remaining-requests"),
            remaining_tokens: self.parse_header("x-ratelimit-remaining-tokens"),
            reset_requests: self.header("x-ratelimit-reset-requests").map(str::to_string),
            reset_tokens: self.header("x-ratelimit-reset-tokens").map(str::to_string),
        }
    }

    fn parse_header(&self, name: &str) -> Option<u64> {
        self.header(name).and_then(|value| value.trim().parse().ok())
    }
}

/// Rate-limit headers as sent by OpenAI-compatible servers.
///
/// Reset values are kept verbatim (e.g. `"6m0s"`, `"1s"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitHeaders {
    pub limit_requests: Option<u64>,
    pub limit_tokens: Option<u64>,
    pub remaining_requests: Option<u64>,
    pub remaining_tokens: Option<u64>,
    pub reset_requests: Option<String>,
    pub reset_tokens: Option<String>,
}
