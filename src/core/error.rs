use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("Request error: {message}")]
    Request {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Request deadline exceeded after {elapsed:?}")]
    Timeout { elapsed: Duration },

    #[error("Request cancelled")]
    Cancelled,

    #[error("API error ({status_code}): {message}")]
    Api {
        message: String,
        status_code: u16,
        error: Option<ApiErrorBody>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },
}

/// Coarse classification of an [`LlmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected before any network I/O.
    RequestBuild,
    /// Connection failures, deadlines and cancellation.
    Transport,
    /// The server answered with a non-2xx status.
    Api,
    /// The response body did not match the expected schema.
    Decode,
}

impl LlmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LlmError::ProviderConfiguration(_) | LlmError::Request { .. } => {
                ErrorKind::RequestBuild
            }
            LlmError::Network { .. } | LlmError::Timeout { .. } | LlmError::Cancelled => {
                ErrorKind::Transport
            }
            LlmError::Api { .. } => ErrorKind::Api,
            LlmError::Parse { .. } => ErrorKind::Decode,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, LlmError::Cancelled)
    }

    /// HTTP status of an API error, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub(crate) fn request(message: impl Into<String>) -> Self {
        LlmError::Request {
            message: message.into(),
            source: None,
        }
    }

    /// Build an API error from a status code and the raw response body.
    pub(crate) fn from_response(status_code: u16, body: &str) -> Self {
        let error = ApiErrorBody::parse(body);
        let message = match &error {
            Some(parsed) => parsed.message.clone(),
            None if body.trim().is_empty() => "empty response body".to_string(),
            None => body.to_string(),
        };

        LlmError::Api {
            message,
            status_code,
            error,
        }
    }
}

/// Structured error payload returned by the server on a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiErrorBody {
    pub message: String,
    pub r#type: Option<String>,
    pub param: Option<String>,
    pub code: Option<String>,
}

#[derive(Deserialize)]
struct Envelope {
    error: ErrorField,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Message(String),
    Detailed(ErrorDetail),
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(rename = "type", default)]
    r#type: Option<String>,
    #[serde(default)]
    param: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

impl From<ErrorDetail> for ApiErrorBody {
    fn from(detail: ErrorDetail) -> Self {
        // `code` is a string on OpenAI and a number on vLLM.
        let code = detail.code.and_then(|code| match code {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        });

        Self {
            message: detail.message,
            r#type: detail.r#type,
            param: detail.param,
            code,
        }
    }
}

impl ApiErrorBody {
    /// Parse `{"error": "..."}`, `{"error": {...}}` or a top-level `{"message": ...}`.
    pub fn parse(body: &str) -> Option<Self> {
        if let Ok(envelope) = serde_json::from_str::<Envelope>(body) {
            return Some(match envelope.error {
                ErrorField::Message(message) => Self {
                    message,
                    ..Self::default()
                },
                ErrorField::Detailed(detail) => detail.into(),
            });
        }

        serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .filter(|detail| !detail.message.is_empty())
            .map(Into::into)
    }
}
