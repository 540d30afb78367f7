use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Characters escaped when an identifier is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        let base = if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        };
        base.trim_end_matches('/').to_string()
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Sends the request once. Transport failures become `REQUEST_FAILED`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        let result = send_to_mock(request);
        #[cfg(not(all(test, not(target_arch = "wasm32"))))]
        let result = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)));
        result
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
    }

    /// Accepts any success body; returns the parsed value when it has the
    /// expected shape.
    pub(crate) async fn parse_optional_json<T: DeserializeOwned>(
        response: Response,
    ) -> Result<Option<T>, ApiError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&body).ok())
    }

    pub(crate) async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(
            status.as_u16(),
            status.canonical_reason(),
            &body,
        ))
    }
}

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::send_to_mock;
