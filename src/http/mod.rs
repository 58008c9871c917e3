//! HTTP client layer — `RestHttp` with per-call status expectations.

pub mod client;

pub use client::{RawResponse, RestHttp};
