//! Server application core modules.
//!
//! This module contains all server-side functionality for Holocron: configuration, the
//! persisted catalog data layer, services resolving favorites & hashing passwords, and the
//! generic admin interface that exposes each catalog entity over HTTP.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod admin;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
