//! Default admin views shared by every registered model.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::server::{
    admin::AdminModel,
    error::{admin::AdminError, Error},
    model::app::AppState,
};

/// `GET /admin/{name}`: every row of the model
pub async fn list<M: AdminModel>(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let rows = M::list(&state.db).await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// `POST /admin/{name}`: creates a row from the JSON form
///
/// Constraint violations are returned as 409 Conflict by [`Error`]'s response conversion.
pub async fn create<M: AdminModel>(
    State(state): State<AppState>,
    Json(form): Json<M::CreateForm>,
) -> Result<impl IntoResponse, Error> {
    let row = M::create(&state.db, form).await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /admin/{name}/{id}`: a single row, 404 when missing
pub async fn detail<M: AdminModel>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let row = M::get(&state.db, id)
        .await?
        .ok_or(AdminError::NotFound { model: M::NAME, id })?;

    Ok((StatusCode::OK, Json(row)))
}

/// `PUT /admin/{name}/{id}`: edits a row, 404 when missing
pub async fn update<M: AdminModel>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(form): Json<M::UpdateForm>,
) -> Result<impl IntoResponse, Error> {
    let row = M::update(&state.db, id, form)
        .await?
        .ok_or(AdminError::NotFound { model: M::NAME, id })?;

    Ok((StatusCode::OK, Json(row)))
}

/// `DELETE /admin/{name}/{id}`: deletes a row, 404 when missing
pub async fn delete<M: AdminModel>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !M::delete(&state.db, id).await? {
        return Err(AdminError::NotFound { model: M::NAME, id }.into());
    }

    Ok(StatusCode::NO_CONTENT)
}
