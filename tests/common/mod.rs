//! Shared fixtures for the wiremock-backed integration tests.

#![allow(dead_code)]

use std::time::Duration;

use dog_disk_e2e::prelude::*;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const FOLDER: &str = "test_folder";

/// Disk client pointed at the mock server, polling every few milliseconds.
pub fn disk_client(server: &MockServer) -> DiskClient {
    DiskClient::builder()
        .base_url(&server.uri())
        .token(TOKEN)
        .poll_interval(Duration::from_millis(5))
        .build()
        .expect("disk client should build")
}

pub fn breed_client(server: &MockServer) -> BreedClient {
    BreedClient::builder()
        .base_url(&server.uri())
        .build()
        .expect("breed client should build")
}

/// Operation link pointing back at the mock server.
pub fn operation_link(server: &MockServer, id: &str) -> Value {
    json!({
        "href": format!("{}/v1/disk/operations/{}", server.uri(), id),
        "method": "GET",
        "templated": false
    })
}

pub fn operation_path(id: &str) -> String {
    format!("/v1/disk/operations/{}", id)
}

pub fn status(status: &str) -> Value {
    json!({ "status": status })
}

/// Folder resource whose `_embedded.items` holds `names`, one second apart.
pub fn folder_resource(folder: &str, names: &[&str]) -> Value {
    let items: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "name": name,
                "path": format!("disk:/{}/{}", folder, name),
                "type": "file",
                "mime_type": "image/jpeg",
                "created": format!("2024-05-01T10:00:{:02}+00:00", i),
                "modified": format!("2024-05-01T10:00:{:02}+00:00", i)
            })
        })
        .collect();

    json!({
        "name": folder,
        "path": format!("disk:/{}", folder),
        "type": "dir",
        "created": "2024-05-01T09:59:00+00:00",
        "modified": "2024-05-01T09:59:00+00:00",
        "_embedded": {
            "sort": "created",
            "items": items,
            "limit": 20,
            "offset": 0,
            "path": format!("disk:/{}", folder),
            "total": names.len()
        }
    })
}

pub fn breed_message(message: Value) -> Value {
    json!({ "message": message, "status": "success" })
}
