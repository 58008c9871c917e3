//! Breed client — dog.ceo sub-breed lists and random image links.

use crate::config::BreedConfig;
use crate::domain::breed::wire::{RandomImageResponse, SubBreedsResponse};
use crate::domain::breed::{Breed, UploadTarget};
use crate::error::HttpError;
use crate::http::RestHttp;

/// Read-only client for the dog.ceo breed API. Each call is a single GET that
/// must answer 200.
#[derive(Debug, Clone)]
pub struct BreedClient {
    http: RestHttp,
}

impl BreedClient {
    pub fn builder() -> BreedClientBuilder {
        BreedClientBuilder::default()
    }

    pub fn from_config(config: &BreedConfig) -> Result<Self, HttpError> {
        Self::builder().base_url(&config.base_url).build()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Sub-breed names of `breed`; empty when it has none.
    pub async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, HttpError> {
        let url = self.http.url(&format!(
            "/api/breed/{}/list",
            urlencoding::encode(breed)
        ));
        let resp: SubBreedsResponse = self.http.get_json(&url, &[200]).await?;
        Ok(resp.message)
    }

    /// The breed together with its sub-breeds.
    pub async fn breed(&self, name: &str) -> Result<Breed, HttpError> {
        let sub_breeds = self.sub_breeds(name).await?;
        Ok(Breed::new(name, sub_breeds))
    }

    /// Link to a random image of `breed`.
    pub async fn random_image(&self, breed: &str) -> Result<String, HttpError> {
        let url = self.http.url(&format!(
            "/api/breed/{}/images/random",
            urlencoding::encode(breed)
        ));
        let resp: RandomImageResponse = self.http.get_json(&url, &[200]).await?;
        Ok(resp.message)
    }

    /// Link to a random image of `breed`/`sub_breed`.
    pub async fn random_sub_breed_image(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<String, HttpError> {
        let url = self.http.url(&format!(
            "/api/breed/{}/{}/images/random",
            urlencoding::encode(breed),
            urlencoding::encode(sub_breed)
        ));
        let resp: RandomImageResponse = self.http.get_json(&url, &[200]).await?;
        Ok(resp.message)
    }

    /// Random image for an upload target, at sub-breed level when it has one.
    pub async fn image_for(&self, target: &UploadTarget) -> Result<String, HttpError> {
        match &target.sub_breed {
            Some(sub) => self.random_sub_breed_image(&target.breed, sub).await,
            None => self.random_image(&target.breed).await,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BreedClientBuilder {
    base_url: String,
}

impl Default for BreedClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_BREED_API_URL.to_string(),
        }
    }
}

impl BreedClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<BreedClient, HttpError> {
        Ok(BreedClient {
            http: RestHttp::new(&self.base_url)?,
        })
    }
}
