//! Holocron: a Star Wars catalog of planets, characters & starships with per-user favorites.

pub mod model;
pub mod server;
