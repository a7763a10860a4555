//! Server application models and type definitions.
//!
//! Application state shared by the admin handlers and type aliases for the SeaORM models
//! of the `entity` crate.

pub mod app;
pub mod db;
