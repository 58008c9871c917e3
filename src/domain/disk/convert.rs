//! Wire → domain conversions for disk resources.

use super::wire::ResourceResponse;
use super::{FolderEntry, FolderListing};

impl From<ResourceResponse> for FolderEntry {
    fn from(r: ResourceResponse) -> Self {
        FolderEntry {
            name: r.name,
            path: r.path,
            kind: r.kind,
            created: r.created,
        }
    }
}

impl From<ResourceResponse> for FolderListing {
    fn from(r: ResourceResponse) -> Self {
        let entries = r
            .embedded
            .map(|list| list.items.into_iter().map(FolderEntry::from).collect())
            .unwrap_or_default();
        FolderListing {
            path: r.path,
            entries,
        }
    }
}
