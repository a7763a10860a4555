//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate to keep fixtures and tests consistent.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for starship database model.
pub type StarshipModel = entity::starship::Model;

/// Type alias for favorite database model.
pub type FavoriteModel = entity::favorite::Model;
