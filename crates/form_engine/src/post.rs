use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::{FailureKind, PostError, PostMetadata, PostOutput};

/// Endpoint every submission is posted to. Fixed at compile time; set
/// `FORM_ENDPOINT` while building to point at another backend.
pub const DEFAULT_ENDPOINT: &str = match option_env!("FORM_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "https://backend-3md0.onrender.com/bfhl",
};

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct PostSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// Whole-request deadline. `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 1024 * 1024,
        }
    }
}

impl PostSettings {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Parse the endpoint, accepting only http(s) URLs.
    pub fn endpoint_url(&self) -> Result<url::Url, PostError> {
        let parsed = url::Url::parse(&self.endpoint)
            .map_err(|err| PostError::new(FailureKind::InvalidUrl, err.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(PostError::new(
                FailureKind::InvalidUrl,
                format!("unsupported scheme {scheme}"),
            )),
        }
    }
}

#[async_trait::async_trait]
pub trait Poster: Send + Sync {
    async fn post_json(&self, payload: &Value) -> Result<PostOutput, PostError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPoster {
    settings: PostSettings,
}

impl ReqwestPoster {
    pub fn new(settings: PostSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, PostError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| PostError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> PostError {
        PostError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Poster for ReqwestPoster {
    async fn post_json(&self, payload: &Value) -> Result<PostOutput, PostError> {
        let endpoint = self.settings.endpoint_url()?;
        let body = serde_json::to_vec(payload)
            .map_err(|err| PostError::new(FailureKind::Network, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint.as_str())
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let metadata = PostMetadata {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            content_type,
            byte_len: bytes.len() as u64,
        };

        Ok(PostOutput { bytes, metadata })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> PostError {
    if err.is_timeout() {
        return PostError::new(FailureKind::Timeout, err.to_string());
    }
    PostError::new(FailureKind::Network, err.to_string())
}
