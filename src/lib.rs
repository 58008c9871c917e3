//! # dog-disk-e2e
//!
//! End-to-end suite that chains the dog.ceo breed API into Yandex Disk:
//! fetch a random image link, have the disk fetch and store it, wait for the
//! async operation to finish and check the folder listing.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Newtypes, domain models, wire types, config (always available)
//! 2. **HTTP**: `RestHttp`, a status-asserting `reqwest` wrapper
//! 3. **Clients**: `BreedClient` and `DiskClient`, plus bounded operation polling
//! 4. **Scenario**: `Scenario`, the folder reset → upload → verify run
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dog_disk_e2e::prelude::*;
//!
//! let config = E2eConfig::from_env()?;
//! let breeds = BreedClient::from_config(&config.breed)?;
//! let disk = DiskClient::from_config(&config.disk, None)?;
//!
//! let breed = Scenario::pick_random_breed(&config.breeds)?;
//! let report = Scenario::from_config(&breeds, &disk, &config)
//!     .verify_listing(true)
//!     .run(breed)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment-driven configuration.
pub mod config;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// Layer 3 clients live next to their domain types in `domain/*/client.rs`.

// ── Layer 4: Scenario ────────────────────────────────────────────────────────

/// The breed-to-disk scenario runner.
#[cfg(feature = "http")]
pub mod scenario;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::DiskPath;

    // Domain types
    pub use crate::domain::breed::{Breed, UploadTarget};
    pub use crate::domain::disk::{
        FolderEntry, FolderListing, ResourceKind, Sort, SortField, UploadRecord,
    };
    pub use crate::domain::operation::wire::Link;
    pub use crate::domain::operation::{OperationStatus, PollConfig, PollState};

    // Errors
    pub use crate::error::{ConfigError, HttpError, OperationError, ScenarioError, SdkError};

    // Config + network
    pub use crate::config::{BreedConfig, DiskConfig, DiskConfigOverride, E2eConfig};
    pub use crate::network::{DEFAULT_BREED_API_URL, DEFAULT_DISK_API_URL};

    // Clients
    #[cfg(feature = "http")]
    pub use crate::domain::breed::client::{BreedClient, BreedClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::disk::client::{DiskClient, DiskClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::operation::poll::poll_until;

    // Scenario
    #[cfg(feature = "http")]
    pub use crate::scenario::{Scenario, ScenarioReport};
}
