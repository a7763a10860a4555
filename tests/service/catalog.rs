//! Tests for the planet, character & starship services.

use holocron::{
    model::catalog::{CharacterParams, PlanetParams, StarshipParams},
    server::{
        error::Error,
        service::catalog::{
            character::CharacterService, planet::PlanetService, starship::StarshipService,
        },
    },
};
use holocron_test_utils::prelude::*;
use sea_orm::SqlErr;

fn is_constraint_violation(result: &Result<impl Sized, Error>) -> bool {
    match result {
        Err(Error::DbErr(err)) => matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
                | Some(SqlErr::ForeignKeyConstraintViolation(_))
        ),
        _ => false,
    }
}

#[tokio::test]
async fn create_planet_fails_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_planet("Alderaan")
        .build()
        .await?;

    let planet_service = PlanetService::new(&test.db);
    let result = planet_service
        .create_planet(PlanetParams {
            name: "Alderaan".to_string(),
            ..Default::default()
        })
        .await;

    assert!(is_constraint_violation(&result));

    Ok(())
}

/// Expect the characters born on the planet, nothing for an unknown planet
#[tokio::test]
async fn get_planet_residents() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;
    let empty = test.catalog().insert_planet("Hoth").await?;
    test.catalog()
        .insert_character("Luke Skywalker", Some(tatooine.id))
        .await?;
    test.catalog()
        .insert_character("Anakin Skywalker", Some(tatooine.id))
        .await?;
    test.catalog().insert_character("Yoda", None).await?;

    let planet_service = PlanetService::new(&test.db);

    let residents = planet_service
        .get_planet_residents(tatooine.id)
        .await
        .unwrap()
        .unwrap();
    let names: Vec<&str> = residents.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Luke Skywalker", "Anakin Skywalker"]);

    let residents = planet_service.get_planet_residents(empty.id).await.unwrap();
    assert_eq!(residents, Some(Vec::new()));

    let residents = planet_service.get_planet_residents(42).await.unwrap();
    assert!(residents.is_none());

    Ok(())
}

/// Expect deletion to be refused while a character lives on the planet
#[tokio::test]
async fn delete_planet_fails_while_referenced() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet = test.catalog().insert_planet("Kashyyyk").await?;
    test.catalog()
        .insert_character("Chewbacca", Some(planet.id))
        .await?;

    let planet_service = PlanetService::new(&test.db);
    let result = planet_service.delete_planet(planet.id).await;

    assert!(is_constraint_violation(&result));
    assert!(planet_service.get_planet(planet.id).await.unwrap().is_some());

    Ok(())
}

#[tokio::test]
async fn get_character_with_homeworld() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet = test.catalog().insert_planet("Alderaan").await?;
    let leia = test
        .catalog()
        .insert_character("Leia Organa", Some(planet.id))
        .await?;
    let droid = test.catalog().insert_character("C-3PO", None).await?;

    let character_service = CharacterService::new(&test.db);

    let (character, homeworld) = character_service
        .get_character_with_homeworld(leia.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(character.name, "Leia Organa");
    assert_eq!(homeworld.map(|p| p.name), Some("Alderaan".to_string()));

    let (_, homeworld) = character_service
        .get_character_with_homeworld(droid.id)
        .await
        .unwrap()
        .unwrap();
    assert!(homeworld.is_none());

    Ok(())
}

#[tokio::test]
async fn get_piloted_starships() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let han = test.catalog().insert_character("Han Solo", None).await?;
    test.catalog()
        .insert_starship("Millennium Falcon", Some(han.id))
        .await?;
    test.catalog().insert_starship("Imperial shuttle", None).await?;

    let character_service = CharacterService::new(&test.db);

    let starships = character_service
        .get_piloted_starships(han.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(starships.len(), 1);
    assert_eq!(starships[0].name, "Millennium Falcon");
    assert_eq!(starships[0].pilot_id, Some(han.id));

    assert!(character_service
        .get_piloted_starships(99)
        .await
        .unwrap()
        .is_none());

    Ok(())
}

/// Expect every field to be replaced, the pilot is cleared when omitted
#[tokio::test]
async fn update_starship_replaces_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let pilot = test.catalog().insert_character("Boba Fett", None).await?;
    let starship = test
        .catalog()
        .insert_starship("Slave 1", Some(pilot.id))
        .await?;

    let starship_service = StarshipService::new(&test.db);
    let updated = starship_service
        .update_starship(
            starship.id,
            StarshipParams {
                name: "Firespray-31".to_string(),
                crew: Some("1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Firespray-31");
    assert_eq!(updated.crew.as_deref(), Some("1"));
    assert!(updated.pilot_id.is_none());

    Ok(())
}

#[tokio::test]
async fn create_character_fails_for_nonexistent_homeworld() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let character_service = CharacterService::new(&test.db);
    let result = character_service
        .create_character(CharacterParams {
            name: "Jar Jar Binks".to_string(),
            homeworld_id: Some(8),
            ..Default::default()
        })
        .await;

    assert!(is_constraint_violation(&result));

    Ok(())
}
