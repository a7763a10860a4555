//! Test fixture modules for database rows & in-memory models.
//!
//! Each submodule provides fixtures for one area of the schema:
//!
//! - `catalog` - Planet, character & starship rows
//! - `factory` - In-memory models that never touch the database
//! - `favorite` - Favorite rows linking users to catalog entries
//! - `user` - User rows

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
