//! Domain modules organized as vertical slices.
//!
//! Each sub-module holds some of:
//! - `mod.rs`: Domain types and the rules that act on them
//! - `wire.rs`: Raw serde structs matching service responses
//! - `convert.rs`: `From` conversions from wire to domain types
//! - `client.rs`: Client with the HTTP methods for that service

pub mod breed;
pub mod disk;
pub mod operation;
