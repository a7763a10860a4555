//! Tests for the favorite service.
//!
//! Verifies favorites are written with a single reference and read back with their target
//! resolved to a type, item ID & item name.

use holocron::{
    model::favorite::{FavoriteTarget, FavoriteType},
    server::service::{favorite::FavoriteService, user::UserService},
};
use holocron_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::json;

/// Expect the documented character favorite shape
#[tokio::test]
async fn add_favorite_serializes_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let leia = test.catalog().insert_character("Leia Organa", None).await?;

    let favorite_service = FavoriteService::new(&test.db);
    let favorite = favorite_service
        .add_favorite(user.id, FavoriteTarget::Character(leia.id))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&favorite).unwrap(),
        json!({
            "id": favorite.id,
            "user_id": user.id,
            "type": "character",
            "item_id": leia.id,
            "item_name": "Leia Organa"
        })
    );

    Ok(())
}

#[tokio::test]
async fn add_favorite_fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service
        .add_favorite(user.id, FavoriteTarget::Planet(5))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Expect only the user's favorites, each resolved
#[tokio::test]
async fn get_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let luke = test.user().insert_user("luke@rebellion.org").await?;
    let han = test.user().insert_user("han@falcon.net").await?;
    let planet = test.catalog().insert_planet("Dagobah").await?;
    let starship = test.catalog().insert_starship("X-wing", None).await?;
    test.favorite()
        .insert_favorite(luke.id, Some(planet.id), None, None)
        .await?;
    test.favorite()
        .insert_favorite(han.id, Some(planet.id), None, None)
        .await?;
    test.favorite()
        .insert_favorite(luke.id, None, None, Some(starship.id))
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let favorites = favorite_service.get_user_favorites(luke.id).await.unwrap();

    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|f| f.user_id == luke.id));
    assert_eq!(favorites[0].favorite_type, Some(FavoriteType::Planet));
    assert_eq!(favorites[0].item_name.as_deref(), Some("Dagobah"));
    assert_eq!(favorites[1].favorite_type, Some(FavoriteType::Starship));
    assert_eq!(favorites[1].item_id, Some(starship.id));

    Ok(())
}

#[tokio::test]
async fn get_target_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let luke = test.user().insert_user("luke@rebellion.org").await?;
    let leia = test.user().insert_user("leia@rebellion.org").await?;
    let planet = test.catalog().insert_planet("Endor").await?;
    test.favorite()
        .insert_favorite(luke.id, Some(planet.id), None, None)
        .await?;
    test.favorite()
        .insert_favorite(leia.id, Some(planet.id), None, None)
        .await?;
    test.favorite()
        .insert_favorite(leia.id, None, None, None)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let favorites = favorite_service
        .get_target_favorites(FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();

    let users: Vec<i32> = favorites.iter().map(|f| f.user_id).collect();
    assert_eq!(users, vec![luke.id, leia.id]);

    Ok(())
}

/// Expect an empty favorite to resolve to nulls rather than fail
#[tokio::test]
async fn get_favorite_without_target() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let favorite = test
        .favorite()
        .insert_favorite(user.id, None, None, None)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let dto = favorite_service
        .get_favorite(favorite.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&dto).unwrap(),
        json!({
            "id": favorite.id,
            "user_id": user.id,
            "type": null,
            "item_id": null,
            "item_name": null
        })
    );

    Ok(())
}

#[tokio::test]
async fn update_favorite_changes_target_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let planet = test.catalog().insert_planet("Yavin IV").await?;
    let starship = test.catalog().insert_starship("Death Star", None).await?;
    let favorite = test
        .favorite()
        .insert_favorite(user.id, Some(planet.id), None, None)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let updated = favorite_service
        .update_favorite(favorite.id, user.id, FavoriteTarget::Starship(starship.id))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.favorite_type, Some(FavoriteType::Starship));
    assert_eq!(updated.item_name.as_deref(), Some("Death Star"));

    assert!(favorite_service
        .update_favorite(favorite.id + 1, user.id, FavoriteTarget::None)
        .await
        .unwrap()
        .is_none());

    Ok(())
}

/// Expect removing a favorite to leave the catalog entry in place
#[tokio::test]
async fn remove_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let character = test.catalog().insert_character("Yoda", None).await?;
    let favorite = test
        .favorite()
        .insert_favorite(user.id, None, Some(character.id), None)
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    assert!(favorite_service.remove_favorite(favorite.id).await.unwrap());
    assert!(!favorite_service.remove_favorite(favorite.id).await.unwrap());
    assert!(favorite_service
        .get_favorite(favorite.id)
        .await
        .unwrap()
        .is_none());

    Ok(())
}

/// Expect deleting a user to remove their favorites but not the catalog entries
#[tokio::test]
async fn deleting_user_cascades_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;
    let favorite_service = FavoriteService::new(&test.db);
    favorite_service
        .add_favorite(user.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();

    UserService::new(&test.db).delete_user(user.id).await.unwrap();

    assert!(favorite_service.get_favorites().await.unwrap().is_empty());
    assert!(favorite_service
        .get_target_favorites(FavoriteTarget::Planet(planet.id))
        .await
        .unwrap()
        .is_empty());
    assert!(entity::prelude::Planet::find_by_id(planet.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}
