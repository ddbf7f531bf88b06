//! Shared HTTP transport for all endpoint calls.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::context::RequestContext;
use super::error::LlmError;

/// Settings for the `reqwest::Client` built when none is injected.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time for a single request.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Defaults to `tokenize-client/<version>`.
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: None,
        }
    }
}

impl HttpClientConfig {
    pub fn build_client(&self) -> Result<reqwest::Client, LlmError> {
        let default_ua = format!("tokenize-client/{}", env!("CARGO_PKG_VERSION"));
        let ua = self.user_agent.as_deref().unwrap_or(&default_ua);

        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| {
                LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
            })
    }
}

/// Thin wrapper that performs exactly one POST per call and maps failures
/// onto [`LlmError`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Serialize `body` as JSON and POST it.
    pub async fn post_json<Req, Res>(
        &self,
        ctx: &RequestContext,
        url: Url,
        headers: HeaderMap,
        body: &Req,
    ) -> Result<(Res, HeaderMap), LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(|e| LlmError::Request {
            message: "Failed to serialize request body".to_string(),
            source: Some(Box::new(e)),
        })?;

        self.post_bytes(ctx, url, headers, Bytes::from(body)).await
    }

    /// POST `body` verbatim with a JSON content type.
    #[tracing::instrument(
        name = "http_post",
        skip(self, ctx, headers, body),
        fields(url = %url, body_len = body.len()),
        err
    )]
    pub async fn post_bytes<Res>(
        &self,
        ctx: &RequestContext,
        url: Url,
        mut headers: HeaderMap,
        body: Bytes,
    ) -> Result<(Res, HeaderMap), LlmError>
    where
        Res: DeserializeOwned,
    {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        ctx.check()?;

        let request = self.client.post(url).headers(headers).body(body);

        ctx.run(async move {
            let res = request.send().await.map_err(|e| LlmError::Network {
                message: "Failed to complete request".to_string(),
                source: Box::new(e),
            })?;

            let status = res.status();
            let response_headers = res.headers().clone();

            if !status.is_success() {
                warn!(status = %status, "API returned error status");
                let error_text = res.text().await.unwrap_or_default();
                return Err(LlmError::from_response(status.as_u16(), &error_text));
            }

            let text = res.text().await.map_err(|e| LlmError::Network {
                message: "Failed to read response body".to_string(),
                source: Box::new(e),
            })?;

            debug!(status = %status, "HTTP request successful");

            let parsed = serde_json::from_str(&text).map_err(|e| LlmError::Parse {
                message: "Failed to parse API response".to_string(),
                source: Box::new(e),
            })?;

            Ok((parsed, response_headers))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one connection with `response` written verbatim, then hang up.
    async fn serve_once(response: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // Drain the whole request (headers plus the `{}` body) before replying.
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            while !received.ends_with(b"\r\n\r\n{}") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => received.extend_from_slice(&buf[..n]),
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        Url::parse(&format!("http://{addr}/tokenize")).unwrap()
    }

    #[tokio::test]
    async fn error_status_survives_truncated_body() {
        let url = serve_once(
            "HTTP/1.1 429 Too Many Requests\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort",
        )
        .await;

        let http = HttpClient::new(reqwest::Client::new());
        let result: Result<(serde_json::Value, HeaderMap), LlmError> = http
            .post_bytes(
                &RequestContext::background(),
                url,
                HeaderMap::new(),
                Bytes::from_static(b"{}"),
            )
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.status_code(), Some(429), "got {err:?}");
        assert!(matches!(err, LlmError::Api { .. }));
    }

    #[tokio::test]
    async fn truncated_success_body_is_network_error() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"count\"",
        )
        .await;

        let http = HttpClient::new(reqwest::Client::new());
        let result: Result<(serde_json::Value, HeaderMap), LlmError> = http
            .post_bytes(
                &RequestContext::background(),
                url,
                HeaderMap::new(),
                Bytes::from_static(b"{}"),
            )
            .await;

        assert!(matches!(result, Err(LlmError::Network { .. })), "got {result:?}");
    }

    #[test]
    fn default_config_builds_client() {
        assert!(HttpClientConfig::default().build_client().is_ok());
    }

    #[test]
    fn custom_user_agent_builds_client() {
        let config = HttpClientConfig {
            user_agent: Some("my-app/1.0".to_string()),
            ..HttpClientConfig::default()
        };
        assert!(config.build_client().is_ok());
    }
}
