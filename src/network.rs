//! Network URL constants.

/// Default dog.ceo breed API base URL.
pub const DEFAULT_BREED_API_URL: &str = "https://dog.ceo";

/// Default Yandex Disk REST API base URL.
pub const DEFAULT_DISK_API_URL: &str = "https://cloud-api.yandex.net";
