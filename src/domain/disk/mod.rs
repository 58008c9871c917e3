//! Disk domain — folder listings, sorting, remote upload records.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::DiskPath;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use wire::ResourceKind;

// ─── Sort ────────────────────────────────────────────────────────────────────

/// Field a folder listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Path,
    Created,
    Modified,
    Size,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Path => "path",
            SortField::Created => "created",
            SortField::Modified => "modified",
            SortField::Size => "size",
        }
    }
}

/// Sort order for a listing. The API marks descending order with a leading `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub descending: bool,
}

impl Sort {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    pub fn query_value(&self) -> String {
        if self.descending {
            format!("-{}", self.field.as_str())
        } else {
            self.field.as_str().to_string()
        }
    }
}

impl From<SortField> for Sort {
    fn from(field: SortField) -> Self {
        Sort::asc(field)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_value())
    }
}

// ─── Listing ─────────────────────────────────────────────────────────────────

/// One child of a listed folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub name: String,
    pub path: DiskPath,
    pub kind: ResourceKind,
    pub created: DateTime<Utc>,
}

/// Children of a folder, in the order the server sorted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderListing {
    pub path: DiskPath,
    pub entries: Vec<FolderEntry>,
}

impl FolderListing {
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─── Upload record ───────────────────────────────────────────────────────────

/// A completed remote upload: where it landed and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub path: DiskPath,
    pub source_url: String,
}
