//! Serialized representations of catalog records.
//!
//! These DTOs are the JSON contract returned to clients. Each one has a fixed set of keys
//! and is built from its database model without any transformation of the stored values.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
