//! Low-level HTTP client — `RestHttp`.
//!
//! Thin wrapper over `reqwest` shared by the breed and disk clients. Every call
//! states which status codes it accepts; anything else becomes an [`HttpError`].
//! Requests are never retried here.

use crate::error::HttpError;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Status and body of a response, before any status assertion.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is(&self, status: u16) -> bool {
        self.status == status
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(|e| HttpError::Decode(e.to_string()))
    }

    /// Turn a response whose status is not in `expected` into an error.
    pub fn expect_status(self, expected: &[u16]) -> Result<Self, HttpError> {
        if expected.contains(&self.status) {
            return Ok(self);
        }
        Err(match self.status {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(self.body),
            429 => HttpError::RateLimited,
            _ => HttpError::UnexpectedStatus {
                expected: expected.to_vec(),
                status: self.status,
                body: self.body,
            },
        })
    }
}

/// Low-level HTTP client bound to one base URL and a fixed header set.
#[derive(Debug, Clone)]
pub struct RestHttp {
    base_url: String,
    client: Client,
}

impl RestHttp {
    /// Client without default headers (public, unauthenticated APIs).
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_headers(base_url, HeaderMap::new())
    }

    /// Client for JSON APIs authenticated with an `OAuth <token>` header.
    /// A blank token is rejected.
    pub fn with_oauth(base_url: &str, token: &str) -> Result<Self, HttpError> {
        if token.trim().is_empty() {
            return Err(HttpError::InvalidHeader(
                "Authorization: empty OAuth token".to_string(),
            ));
        }
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("OAuth {}", token))
            .map_err(|_| HttpError::InvalidHeader("Authorization".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        Self::with_headers(base_url, headers)
    }

    pub fn with_headers(base_url: &str, headers: HeaderMap) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (`"/v1/disk/resources"`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Request helpers ──────────────────────────────────────────────────

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        expected: &[u16],
    ) -> Result<T, HttpError> {
        self.send(Method::GET, url)
            .await?
            .expect_status(expected)?
            .json()
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        expected: &[u16],
    ) -> Result<T, HttpError> {
        self.send(Method::POST, url)
            .await?
            .expect_status(expected)?
            .json()
    }

    /// Send a bodyless request and return whatever came back, without
    /// asserting on the status. Transport failures are still errors.
    pub(crate) async fn send(&self, method: Method, url: &str) -> Result<RawResponse, HttpError> {
        tracing::debug!(%method, url, "Sending request");
        let resp = self.client.request(method, url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(RawResponse { status, body })
    }
}
