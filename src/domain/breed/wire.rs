//! Wire types for dog.ceo responses.

use serde::{Deserialize, Serialize};

/// Every dog.ceo endpoint wraps its payload as `{"message": ..., "status": "success"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreedEnvelope<T> {
    pub message: T,
    #[serde(default)]
    pub status: String,
}

/// `GET /api/breed/{breed}/list`
pub type SubBreedsResponse = BreedEnvelope<Vec<String>>;

/// `GET /api/breed/{breed}[/{sub}]/images/random`
pub type RandomImageResponse = BreedEnvelope<String>;
