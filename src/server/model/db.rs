//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate, giving a single
//! point of reference for database model types.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `password` - Argon2id password hash, never serialized
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for planet database model.
///
/// # Fields (from `entity::planet::Model`)
/// - `id` - Primary key
/// - `name` - Unique planet name
/// - `diameter`, `rotation_period`, `gravity`, `population` - Free-form catalog values
pub type PlanetModel = entity::planet::Model;

/// Type alias for character database model.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key
/// - `name` - Unique character name
/// - `height`, `birth_year`, `gender` - Free-form catalog values
/// - `homeworld_id` - Optional foreign key to the character's homeworld planet
pub type CharacterModel = entity::character::Model;

/// Type alias for starship database model.
///
/// # Fields (from `entity::starship::Model`)
/// - `id` - Primary key
/// - `name` - Unique starship name
/// - `model` - Starship model designation
/// - `pilot_id` - Optional foreign key to the piloting character
/// - `cost_in_credits`, `length`, `max_speed`, `crew` - Free-form catalog values
pub type StarshipModel = entity::starship::Model;

/// Type alias for favorite database model.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user, cascades on user deletion
/// - `planet_id`, `character_id`, `starship_id` - Optional catalog references
pub type FavoriteModel = entity::favorite::Model;
