//! Wire types for Yandex Disk resource responses.

use crate::shared::DiskPath;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `type` field of a resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Dir,
    File,
}

/// `GET /v1/disk/resources` response. Folders carry their children in `_embedded`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceResponse {
    pub name: String,
    pub path: DiskPath,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<ResourceListResponse>,
}

/// The `_embedded` block of a folder resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceListResponse {
    #[serde(default)]
    pub items: Vec<ResourceResponse>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub path: Option<DiskPath>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}
