//! Utility functions and helpers for server operations.
//!
//! Currently holds Argon2id password hashing used by the user service when accounts are
//! created or their password is changed.

pub mod password;
