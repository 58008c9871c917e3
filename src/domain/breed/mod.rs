//! Breed domain — breed names, sub-breeds and the upload-target rule.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// A breed and its (flat) list of sub-breeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub name: String,
    pub sub_breeds: Vec<String>,
}

/// One image to fetch: the breed, plus the sub-breed when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub breed: String,
    pub sub_breed: Option<String>,
}

impl UploadTarget {
    /// File name the image is stored under.
    pub fn file_name(&self) -> &str {
        self.sub_breed.as_deref().unwrap_or(&self.breed)
    }
}

impl Breed {
    pub fn new(name: impl Into<String>, sub_breeds: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sub_breeds,
        }
    }

    pub fn has_sub_breeds(&self) -> bool {
        !self.sub_breeds.is_empty()
    }

    /// One target per sub-breed, or a single breed-level target when there are none.
    pub fn upload_targets(&self) -> Vec<UploadTarget> {
        if self.sub_breeds.is_empty() {
            return vec![UploadTarget {
                breed: self.name.clone(),
                sub_breed: None,
            }];
        }
        self.sub_breeds
            .iter()
            .map(|sub| UploadTarget {
                breed: self.name.clone(),
                sub_breed: Some(sub.clone()),
            })
            .collect()
    }
}
