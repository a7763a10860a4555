//! Repositories for the catalog entities users can favorite.

pub mod character;
pub mod planet;
pub mod starship;
