//! Disk client — folders, remote uploads and async operation tracking.

use crate::config::{DiskConfig, DiskConfigOverride};
use crate::domain::disk::wire::ResourceResponse;
use crate::domain::disk::{FolderListing, Sort};
use crate::domain::operation::poll::poll_until;
use crate::domain::operation::wire::{Link, OperationStatusResponse};
use crate::domain::operation::{
    OperationStatus, PollConfig, DEFAULT_POLL_INTERVAL, DELETE_POLL_BUDGET,
};
use crate::error::{HttpError, SdkError};
use crate::http::RestHttp;

use reqwest::Method;
use std::time::Duration;

/// Client for the Yandex Disk REST API, authenticated with a static OAuth token.
#[derive(Debug, Clone)]
pub struct DiskClient {
    http: RestHttp,
    poll_interval: Duration,
    delete_budget: u32,
}

impl DiskClient {
    pub fn builder() -> DiskClientBuilder {
        DiskClientBuilder::default()
    }

    /// Build from startup defaults, letting `overrides` replace individual fields.
    pub fn from_config(
        defaults: &DiskConfig,
        overrides: Option<DiskConfigOverride>,
    ) -> Result<Self, HttpError> {
        let config = defaults.clone().merged(overrides.unwrap_or_default());
        Self::builder()
            .base_url(&config.base_url)
            .token(&config.token)
            .build()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Folders ──────────────────────────────────────────────────────────

    /// Create the folder at `path`. The API must answer 201.
    pub async fn create_folder(&self, path: &str) -> Result<&Self, SdkError> {
        let url = self.resources_url(path, &[]);
        self.http
            .send(Method::PUT, &url)
            .await?
            .expect_status(&[201])?;
        tracing::info!(path, "Folder created");
        Ok(self)
    }

    /// Whether anything exists at `path`. Any answer other than 200 counts as absent.
    pub async fn exists(&self, path: &str) -> Result<bool, HttpError> {
        let url = self.resources_url(path, &[]);
        let resp = self.http.send(Method::GET, &url).await?;
        if !resp.is(200) {
            tracing::debug!(path, status = resp.status, "Resource not present");
        }
        Ok(resp.is(200))
    }

    /// Delete the folder at `path` if it exists, waiting for the async
    /// operation to finish. `permanently` defaults to `true`; `Some(false)`
    /// moves the folder to the trash instead.
    pub async fn delete_folder(
        &self,
        path: &str,
        permanently: Option<bool>,
    ) -> Result<&Self, SdkError> {
        if !self.exists(path).await? {
            return Ok(self);
        }

        let permanently = permanently.unwrap_or(true);
        let flag = permanently.to_string();
        let url = self.resources_url(
            path,
            &[("force_async", "true"), ("permanently", flag.as_str())],
        );
        let resp = self
            .http
            .send(Method::DELETE, &url)
            .await?
            .expect_status(&[202, 204])?;

        // 204: the server finished the delete synchronously.
        if resp.is(202) {
            let link: Link = resp.json()?;
            self.wait_for_operation(
                link.operation_href()?,
                &OperationStatus::Success,
                self.delete_budget,
            )
            .await?;
        }

        tracing::info!(path, permanently, "Folder deleted");
        Ok(self)
    }

    /// Children of the folder at `path`, sorted server-side by `sort`.
    pub async fn list_folder(
        &self,
        path: &str,
        sort: impl Into<Sort>,
    ) -> Result<FolderListing, SdkError> {
        let sort = sort.into().query_value();
        let url = self.resources_url(path, &[("sort", sort.as_str())]);
        let resp: ResourceResponse = self.http.get_json(&url, &[200]).await?;
        Ok(resp.into())
    }

    // ── Uploads ──────────────────────────────────────────────────────────

    /// Have the server fetch `source_url` into `path`, then wait up to
    /// `timeout_secs` poll attempts for the operation to succeed.
    pub async fn upload_from_url(
        &self,
        path: &str,
        source_url: &str,
        timeout_secs: u32,
    ) -> Result<Link, SdkError> {
        let url = format!(
            "{}?path={}&url={}",
            self.http.url("/v1/disk/resources/upload"),
            urlencoding::encode(path),
            urlencoding::encode(source_url)
        );
        let link: Link = self.http.post_json(&url, &[200, 202]).await?;
        let href = link.operation_href()?;

        let attempts = self
            .wait_for_operation(href, &OperationStatus::Success, timeout_secs)
            .await?;
        tracing::info!(path, source_url, attempts, "File uploaded");
        Ok(link)
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Current status of the operation behind `href`.
    pub async fn operation_status(&self, href: &str) -> Result<OperationStatus, HttpError> {
        let resp: OperationStatusResponse = self.http.get_json(href, &[200]).await?;
        Ok(resp.status)
    }

    /// Poll `href` until it reports `expected`; gives up after check `budget + 1`.
    pub async fn wait_for_operation(
        &self,
        href: &str,
        expected: &OperationStatus,
        budget: u32,
    ) -> Result<u32, SdkError> {
        let config = PollConfig::new(budget).with_interval(self.poll_interval);
        poll_until(&config, expected, move || self.operation_status(href)).await
    }

    fn resources_url(&self, path: &str, extra: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}?path={}",
            self.http.url("/v1/disk/resources"),
            urlencoding::encode(path)
        );
        for (key, value) in extra {
            url = format!("{}&{}={}", url, key, urlencoding::encode(value));
        }
        url
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DiskClientBuilder {
    base_url: String,
    token: String,
    poll_interval: Duration,
    delete_budget: u32,
}

impl Default for DiskClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_DISK_API_URL.to_string(),
            token: String::new(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            delete_budget: DELETE_POLL_BUDGET,
        }
    }
}

impl DiskClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }

    /// Pause between two operation status checks.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Attempt budget for async folder deletes.
    pub fn delete_budget(mut self, budget: u32) -> Self {
        self.delete_budget = budget;
        self
    }

    /// Fails with [`HttpError::InvalidHeader`] when no token was set.
    pub fn build(self) -> Result<DiskClient, HttpError> {
        Ok(DiskClient {
            http: RestHttp::with_oauth(&self.base_url, &self.token)?,
            poll_interval: self.poll_interval,
            delete_budget: self.delete_budget,
        })
    }
}
