//! Tests for the admin site registration & the default views it mounts.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use holocron::server::{
    admin::{model::PlanetAdmin, AdminSite},
    data::catalog::character::CharacterRepository,
    error::{admin::AdminError, Error},
    model::app::AppState,
    router,
};
use holocron_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn setup() -> Result<(TestContext, Router), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = router::routes()
        .unwrap()
        .with_state(test.to_app_state::<AppState>());

    Ok((test, app))
}

/// Sends a request to the router, returning the status & the JSON body if there is one
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

#[test]
fn registering_model_twice_fails() {
    let result = AdminSite::new()
        .register::<PlanetAdmin>()
        .unwrap()
        .register::<PlanetAdmin>();

    assert!(matches!(
        result,
        Err(Error::AdminError(AdminError::AlreadyRegistered("planets")))
    ));
}

#[test]
fn admin_site_registers_every_table() {
    let site = router::admin_site().unwrap();

    assert_eq!(
        site.models(),
        &["users", "planets", "characters", "starships", "favorites"]
    );
}

#[tokio::test]
async fn index_lists_registered_models() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let (status, body) = send(&app, Method::GET, "/admin", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "models": ["users", "planets", "characters", "starships", "favorites"] })
    );

    Ok(())
}

/// Expect 201 for a new planet & 409 when the name is already taken
#[tokio::test]
async fn create_planet_conflicts_on_duplicate_name() -> Result<(), TestError> {
    let (_test, app) = setup().await?;
    let form = json!({ "name": "Hoth", "gravity": "1.1 standard" });

    let (status, body) = send(&app, Method::POST, "/admin/planets", Some(form.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Hoth");
    assert_eq!(body["gravity"], "1.1 standard");
    assert_eq!(body["diameter"], Value::Null);

    let (status, body) = send(&app, Method::POST, "/admin/planets", Some(form)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn detail_returns_not_found_for_missing_row() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let (status, _) = send(&app, Method::GET, "/admin/starships/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/admin/starships/7",
        Some(json!({ "name": "Tantive IV" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the password to be accepted on write but never rendered
#[tokio::test]
async fn user_views_never_render_password() -> Result<(), TestError> {
    let (_test, app) = setup().await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/admin/users",
        Some(json!({ "email": "leia@rebellion.org", "password": "help me obi-wan" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "leia@rebellion.org");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password").is_none());

    let (status, body) = send(&app, Method::GET, "/admin/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert!(body[0].get("password").is_none());

    Ok(())
}

#[tokio::test]
async fn update_character_replaces_fields() -> Result<(), TestError> {
    let (test, app) = setup().await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;
    let character = test.catalog().insert_character("Ben Kenobi", None).await?;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/admin/characters/{}", character.id),
        Some(json!({ "name": "Obi-Wan Kenobi", "homeworld_id": planet.id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Obi-Wan Kenobi");
    assert!(body.get("homeworld_id").is_none());

    let stored = CharacterRepository::new(&test.db)
        .get(character.id)
        .await?
        .unwrap();
    assert_eq!(stored.homeworld_id, Some(planet.id));

    Ok(())
}

/// Expect 204 on deletion and 404 for the same row afterwards
#[tokio::test]
async fn delete_starship() -> Result<(), TestError> {
    let (test, app) = setup().await?;
    let starship = test.catalog().insert_starship("Star Destroyer", None).await?;
    let uri = format!("/admin/starships/{}", starship.id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn create_favorite_resolves_target() -> Result<(), TestError> {
    let (test, app) = setup().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let character = test.catalog().insert_character("Leia Organa", None).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/admin/favorites",
        Some(json!({
            "user_id": user.id,
            "target": { "type": "character", "id": character.id }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": body["id"],
            "user_id": user.id,
            "type": "character",
            "item_id": character.id,
            "item_name": "Leia Organa"
        })
    );

    let (status, body) = send(
        &app,
        Method::POST,
        "/admin/favorites",
        Some(json!({ "user_id": user.id + 1, "target": { "type": "none" } })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    Ok(())
}
