//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating catalog database models with standard test values.
//! These are in-memory model instances that don't require database interaction, suitable
//! for unit tests.

use crate::model::{CharacterModel, FavoriteModel, PlanetModel, StarshipModel, UserModel};

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `id` - The user record ID
/// - `email` - Email of the user
pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        email: email.to_string(),
        password: super::user::TEST_PASSWORD_HASH.to_string(),
        is_active: true,
    }
}

/// Create a mock planet database model with only its name set.
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        diameter: None,
        rotation_period: None,
        gravity: None,
        population: None,
    }
}

/// Create a mock character database model without a homeworld.
pub fn mock_character_model(id: i32, name: &str) -> CharacterModel {
    CharacterModel {
        id,
        name: name.to_string(),
        height: None,
        birth_year: None,
        gender: None,
        homeworld_id: None,
    }
}

/// Create a mock starship database model without a pilot.
pub fn mock_starship_model(id: i32, name: &str) -> StarshipModel {
    StarshipModel {
        id,
        name: name.to_string(),
        model: None,
        pilot_id: None,
        cost_in_credits: None,
        length: None,
        max_speed: None,
        crew: None,
    }
}

/// Create a mock favorite database model with the reference columns as provided.
///
/// # Arguments
/// - `id` - The favorite record ID
/// - `user_id` - The user record ID owning the favorite
/// - `planet_id`, `character_id`, `starship_id` - Optional catalog references
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
    starship_id: Option<i32>,
) -> FavoriteModel {
    FavoriteModel {
        id,
        user_id,
        planet_id,
        character_id,
        starship_id,
    }
}
