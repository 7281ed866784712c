//! HTTP client wrapper for the remote customer data source.
//!
//! Every failure leaving this module is an [`ApiError`]: transport errors,
//! non-success statuses and undecodable bodies are all normalized here, so
//! services and the frontend only ever deal with one error shape.

use std::time::Duration;

use custdash_bridge::{api_error::ApiError, config::Config, post::Post, user::User};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Message used when neither the response body nor the transport explains the
/// failure.
pub const FALLBACK_ERROR_MESSAGE: &str = "an unexpected error occurred";

/// Errors that can occur while building the API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configured base URL could not be parsed.
    #[error("invalid API URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Builds an [`ApiError`] out of whatever is known about a failed call.
///
/// The message is taken from the body's `message` field when present, then
/// from the transport, then falls back to [`FALLBACK_ERROR_MESSAGE`]. A
/// missing status is reported as `0`.
pub(crate) fn normalize(
    status: Option<StatusCode>,
    body: Option<serde_json::Value>,
    transport_message: Option<String>,
) -> ApiError {
    let data = body.filter(|body| !body.is_null());
    let body_message = data
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_owned);
    let transport_message = transport_message.filter(|message| !message.trim().is_empty());

    ApiError {
        message: body_message
            .or(transport_message)
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned()),
        status: status.map_or(0, |status| status.as_u16()),
        data,
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    let status = error.status();
    normalize(status, None, Some(error.without_url().to_string()))
}

/// Client for the JSONPlaceholder-style REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for `config.api_url` with `config.request_timeout_ms`
    /// applied to every request.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut raw = config.api_url.trim().to_owned();
        // Without a trailing slash `Url::join` would replace the last path
        // segment instead of appending to it.
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let base_url = Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| normalize(None, None, Some(format!("invalid endpoint {path:?}: {e}"))))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes).ok();
            return Err(normalize(
                Some(status),
                body,
                Some(format!("request failed with status code {}", status.as_u16())),
            ));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            normalize(
                Some(status),
                None,
                Some(format!("failed to decode response from {path}: {e}")),
            )
        })
    }

    /// Fetches every customer.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("users", &[]).await
    }

    /// Fetches one customer by id.
    pub async fn fetch_user_by_id(&self, id: u64) -> Result<User, ApiError> {
        self.get_json(&format!("users/{id}"), &[]).await
    }

    /// Fetches the posts written by one customer.
    pub async fn fetch_posts_by_user_id(&self, user_id: u64) -> Result<Vec<Post>, ApiError> {
        self.get_json("posts", &[("userId", user_id.to_string())])
            .await
    }
}
