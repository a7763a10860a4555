use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub pilot_id: Option<i32>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_speed: Option<String>,
    pub crew: Option<String>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            gravity: planet.gravity,
            population: planet.population,
        }
    }
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            height: character.height,
            birth_year: character.birth_year,
            gender: character.gender,
        }
    }
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(starship: entity::starship::Model) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            pilot_id: starship.pilot_id,
            cost_in_credits: starship.cost_in_credits,
            length: starship.length,
            max_speed: starship.max_speed,
            crew: starship.crew,
        }
    }
}

/// Fields for creating or replacing a planet
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlanetParams {
    pub name: String,
    #[serde(default)]
    pub diameter: Option<String>,
    #[serde(default)]
    pub rotation_period: Option<String>,
    #[serde(default)]
    pub gravity: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
}

/// Fields for creating or replacing a character
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CharacterParams {
    pub name: String,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub homeworld_id: Option<i32>,
}

/// Fields for creating or replacing a starship
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StarshipParams {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub pilot_id: Option<i32>,
    #[serde(default)]
    pub cost_in_credits: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub max_speed: Option<String>,
    #[serde(default)]
    pub crew: Option<String>,
}
