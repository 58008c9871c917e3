//! Wire types for operation links and status responses.

use super::OperationStatus;
use crate::error::OperationError;
use serde::{Deserialize, Serialize};

/// Link returned for async requests (`{"href": ..., "method": ..., "templated": ...}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    #[serde(default)]
    pub href: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub templated: bool,
}

impl Link {
    /// URL to poll for the operation status. Absent or blank `href` is an error.
    pub fn operation_href(&self) -> Result<&str, OperationError> {
        if self.href.trim().is_empty() {
            return Err(OperationError::MissingHref);
        }
        Ok(&self.href)
    }
}

fn default_method() -> String {
    "GET".to_string()
}

/// `GET {href}` response for an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationStatusResponse {
    pub status: OperationStatus,
}
