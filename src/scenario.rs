//! Breed-to-disk scenario: reset a folder, fetch breed images, upload them by
//! URL and optionally verify each upload in the folder listing.

use crate::config::E2eConfig;
use crate::domain::breed::client::BreedClient;
use crate::domain::breed::Breed;
use crate::domain::disk::client::DiskClient;
use crate::domain::disk::{SortField, UploadRecord};
use crate::error::{ScenarioError, SdkError};
use crate::shared::DiskPath;

use rand::seq::SliceRandom;

/// Outcome of a scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub breed: Breed,
    /// Completed uploads, in the order they were made.
    pub uploads: Vec<UploadRecord>,
}

impl ScenarioReport {
    pub fn file_names(&self) -> Vec<&str> {
        self.uploads.iter().map(|u| u.path.file_name()).collect()
    }
}

/// Drives a [`BreedClient`] and a [`DiskClient`] through one scenario run.
pub struct Scenario<'a> {
    breeds: &'a BreedClient,
    disk: &'a DiskClient,
    folder: DiskPath,
    upload_timeout_secs: u32,
    verify_listing: bool,
}

impl<'a> Scenario<'a> {
    pub fn new(
        breeds: &'a BreedClient,
        disk: &'a DiskClient,
        folder: impl Into<DiskPath>,
    ) -> Self {
        Self {
            breeds,
            disk,
            folder: folder.into(),
            upload_timeout_secs: crate::config::DEFAULT_UPLOAD_TIMEOUT_SECS,
            verify_listing: false,
        }
    }

    pub fn from_config(
        breeds: &'a BreedClient,
        disk: &'a DiskClient,
        config: &E2eConfig,
    ) -> Self {
        Self::new(breeds, disk, config.folder.as_str())
            .upload_timeout_secs(config.upload_timeout_secs)
    }

    /// Poll budget for each upload.
    pub fn upload_timeout_secs(mut self, secs: u32) -> Self {
        self.upload_timeout_secs = secs;
        self
    }

    /// After each upload, list the folder by creation time and check the new
    /// entry and that the listing holds exactly the uploads made so far.
    pub fn verify_listing(mut self, verify: bool) -> Self {
        self.verify_listing = verify;
        self
    }

    pub fn folder(&self) -> &DiskPath {
        &self.folder
    }

    /// Pick one breed from `pool` at random.
    pub fn pick_random_breed(pool: &[String]) -> Result<&str, ScenarioError> {
        pool.choose(&mut rand::thread_rng())
            .map(String::as_str)
            .ok_or(ScenarioError::EmptyBreedPool)
    }

    /// Delete the scenario folder (if present) and create it again.
    pub async fn reset_folder(&self) -> Result<(), SdkError> {
        let folder = self.folder.as_str();
        self.disk
            .delete_folder(folder, None)
            .await?
            .create_folder(folder)
            .await?;
        Ok(())
    }

    /// Reset the folder, then upload one random image per sub-breed of
    /// `breed` (or one breed-level image when it has no sub-breeds).
    pub async fn run(&self, breed: &str) -> Result<ScenarioReport, SdkError> {
        self.reset_folder().await?;

        let breed = self.breeds.breed(breed).await?;
        tracing::info!(
            breed = %breed.name,
            sub_breeds = breed.sub_breeds.len(),
            folder = %self.folder,
            "Running scenario"
        );

        let mut uploads = Vec::new();
        for (index, target) in breed.upload_targets().iter().enumerate() {
            let source_url = self.breeds.image_for(target).await?;
            let path = self.folder.join(target.file_name());

            self.disk
                .upload_from_url(path.as_str(), &source_url, self.upload_timeout_secs)
                .await?;

            if self.verify_listing {
                self.verify_entry(index, target.file_name()).await?;
            }

            uploads.push(UploadRecord { path, source_url });
        }

        Ok(ScenarioReport { breed, uploads })
    }

    async fn verify_entry(&self, index: usize, expected: &str) -> Result<(), SdkError> {
        let listing = self
            .disk
            .list_folder(self.folder.as_str(), SortField::Created)
            .await?;

        let entry = listing
            .entries
            .get(index)
            .ok_or_else(|| ScenarioError::MissingEntry {
                folder: self.folder.to_string(),
                index,
                expected: expected.to_string(),
            })?;

        if entry.name != expected {
            return Err(ScenarioError::NameMismatch {
                folder: self.folder.to_string(),
                index,
                expected: expected.to_string(),
                actual: entry.name.clone(),
            }
            .into());
        }

        // Every upload so far and nothing else.
        if listing.len() != index + 1 {
            return Err(ScenarioError::UnexpectedEntryCount {
                folder: self.folder.to_string(),
                expected: index + 1,
                actual: listing.len(),
            }
            .into());
        }

        tracing::debug!(index, name = expected, "Upload listed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_random_breed_from_pool() {
        let pool: Vec<String> = vec!["doberman".into(), "bulldog".into(), "collie".into()];
        for _ in 0..20 {
            let breed = Scenario::pick_random_breed(&pool).unwrap();
            assert!(pool.iter().any(|b| b == breed));
        }
    }

    #[test]
    fn test_pick_random_breed_empty_pool() {
        assert!(matches!(
            Scenario::pick_random_breed(&[]),
            Err(ScenarioError::EmptyBreedPool)
        ));
    }

    #[test]
    fn test_report_file_names() {
        let report = ScenarioReport {
            breed: Breed::new("bulldog", vec!["boston".into(), "french".into()]),
            uploads: vec![
                UploadRecord {
                    path: DiskPath::new("test_folder/boston"),
                    source_url: "https://images.dog.ceo/a.jpg".into(),
                },
                UploadRecord {
                    path: DiskPath::new("test_folder/french"),
                    source_url: "https://images.dog.ceo/b.jpg".into(),
                },
            ],
        };
        assert_eq!(report.file_names(), vec!["boston", "french"]);
    }
}
