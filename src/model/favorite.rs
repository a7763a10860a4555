use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of catalog item a favorite points to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteType {
    Planet,
    Character,
    Starship,
}

/// The catalog item referenced by a favorite.
///
/// Stored as three nullable columns on the `favorites` table. When reading a row, the first
/// populated column wins in the order planet, character, starship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
    Starship(i32),
    None,
}

impl FavoriteTarget {
    /// Rebuilds the target from the stored `planet_id`, `character_id` & `starship_id` columns
    pub fn from_columns(
        planet_id: Option<i32>,
        character_id: Option<i32>,
        starship_id: Option<i32>,
    ) -> Self {
        match (planet_id, character_id, starship_id) {
            (Some(id), _, _) => Self::Planet(id),
            (None, Some(id), _) => Self::Character(id),
            (None, None, Some(id)) => Self::Starship(id),
            (None, None, None) => Self::None,
        }
    }

    /// Column values to persist, exactly one is set unless the target is [`FavoriteTarget::None`]
    ///
    /// Returned as `(planet_id, character_id, starship_id)`
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match *self {
            Self::Planet(id) => (Some(id), None, None),
            Self::Character(id) => (None, Some(id), None),
            Self::Starship(id) => (None, None, Some(id)),
            Self::None => (None, None, None),
        }
    }
}

impl From<&entity::favorite::Model> for FavoriteTarget {
    fn from(favorite: &entity::favorite::Model) -> Self {
        Self::from_columns(
            favorite.planet_id,
            favorite.character_id,
            favorite.starship_id,
        )
    }
}

/// Serialized favorite with its target resolved to a type, ID & name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub favorite_type: Option<FavoriteType>,
    pub item_id: Option<i32>,
    pub item_name: Option<String>,
}

impl FavoriteDto {
    /// Builds the serialized favorite from the row and its loaded catalog references.
    ///
    /// The first loaded reference wins in the order planet, character, starship. When none
    /// of them is present the type, item ID & item name are all `None`.
    pub fn resolve(
        favorite: &entity::favorite::Model,
        planet: Option<&entity::planet::Model>,
        character: Option<&entity::character::Model>,
        starship: Option<&entity::starship::Model>,
    ) -> Self {
        let (favorite_type, item_id, item_name) = if let Some(planet) = planet {
            (
                Some(FavoriteType::Planet),
                favorite.planet_id,
                Some(planet.name.clone()),
            )
        } else if let Some(character) = character {
            (
                Some(FavoriteType::Character),
                favorite.character_id,
                Some(character.name.clone()),
            )
        } else if let Some(starship) = starship {
            (
                Some(FavoriteType::Starship),
                favorite.starship_id,
                Some(starship.name.clone()),
            )
        } else {
            (None, None, None)
        };

        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            favorite_type,
            item_id,
            item_name,
        }
    }
}

/// Fields for creating or replacing a favorite
#[derive(Clone, Debug, Deserialize)]
pub struct FavoriteParams {
    pub user_id: i32,
    pub target: FavoriteTarget,
}
