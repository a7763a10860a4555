//! Tests for the user service.
//!
//! Verifies password hashing on create & update, partial updates, duplicate email handling and
//! the cascade of a user's favorites on deletion.

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use holocron::{
    model::user::{NewUserParams, UserChanges},
    server::{data::user::UserRepository, error::Error, service::user::UserService},
};
use holocron_test_utils::prelude::*;
use sea_orm::{EntityTrait, SqlErr};

/// Checks a stored PHC hash against the plain password it should have been built from
fn password_matches(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

fn new_user(email: &str, password: &str) -> NewUserParams {
    NewUserParams {
        email: email.to_string(),
        password: password.to_string(),
        is_active: true,
    }
}

/// Expect the stored password to be an Argon2id hash of the provided password
#[tokio::test]
async fn create_user_hashes_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let user_service = UserService::new(&test.db);
    let user = user_service
        .create_user(new_user("luke@rebellion.org", "use-the-force"))
        .await
        .unwrap();

    let stored = UserRepository::new(&test.db)
        .get(user.id)
        .await?
        .unwrap();
    assert_ne!(stored.password, "use-the-force");
    assert!(stored.password.starts_with("$argon2id$"));
    assert!(password_matches("use-the-force", &stored.password));

    Ok(())
}

/// Expect a unique constraint violation to propagate unchanged
#[tokio::test]
async fn create_user_fails_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("leia@rebellion.org")
        .build()
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .create_user(new_user("leia@rebellion.org", "alderaan"))
        .await;

    assert!(matches!(
        result,
        Err(Error::DbErr(ref err)) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}

#[tokio::test]
async fn get_users_returns_every_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke@rebellion.org")
        .with_user("leia@rebellion.org")
        .build()
        .await?;

    let user_service = UserService::new(&test.db);
    let users = user_service.get_users().await.unwrap();

    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["luke@rebellion.org", "leia@rebellion.org"]);

    Ok(())
}

/// Expect only the password to change and to be stored hashed
#[tokio::test]
async fn update_user_rehashes_new_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("han@falcon.net").await?;

    let user_service = UserService::new(&test.db);
    let updated = user_service
        .update_user(
            user.id,
            UserChanges {
                password: Some("i-know".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.email, "han@falcon.net");
    assert!(updated.is_active);

    let stored = test.user().get_user(user.id).await?.unwrap();
    assert!(password_matches("i-know", &stored.password));

    Ok(())
}

#[tokio::test]
async fn update_user_returns_none_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .update_user(
            1,
            UserChanges {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect the user's favorites to go with them
#[tokio::test]
async fn delete_user_removes_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("han@falcon.net").await?;
    let planet = test.catalog().insert_planet("Corellia").await?;
    test.favorite()
        .insert_favorite(user.id, Some(planet.id), None, None)
        .await?;

    let user_service = UserService::new(&test.db);
    assert!(user_service.delete_user(user.id).await.unwrap());
    assert!(!user_service.delete_user(user.id).await.unwrap());

    let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
    assert!(favorites.is_empty());

    Ok(())
}
