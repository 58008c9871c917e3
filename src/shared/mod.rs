//! Shared newtypes used across domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the services send.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── DiskPath ────────────────────────────────────────────────────────────────

/// A storage path such as `"test_folder/boston"` or `"disk:/test_folder"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiskPath(String);

impl DiskPath {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a child segment, inserting exactly one `/`.
    pub fn join(&self, name: &str) -> Self {
        let parent = self.0.trim_end_matches('/');
        let child = name.trim_start_matches('/');
        if parent.is_empty() {
            Self(child.to_string())
        } else {
            Self(format!("{}/{}", parent, child))
        }
    }

    /// The last path segment, without any `disk:` prefix.
    pub fn file_name(&self) -> &str {
        let trimmed = self.0.trim_end_matches('/');
        let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
        name.strip_prefix("disk:").unwrap_or(name)
    }
}

impl std::fmt::Display for DiskPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DiskPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DiskPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for DiskPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for DiskPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DiskPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DiskPath(s))
    }
}
