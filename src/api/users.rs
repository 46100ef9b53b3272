use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::AppState;
use crate::backend::UserStore;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UserChanges};

pub async fn create_user(
    State(backend): State<AppState>,
    Json(payload): Json<NewUser>,
) -> AppResult<Json<Value>> {
    backend.insert_user(&payload).await?;

    Ok(Json(json!({ "message": "User added successfully" })))
}

pub async fn update_user(
    State(backend): State<AppState>,
    Path(user_id): Path<i64>,
    Json(changes): Json<UserChanges>,
) -> AppResult<Json<Value>> {
    // A username in the payload is accepted but not applied
    let UserChanges { username: _, email } = changes;

    let email = email.ok_or_else(|| AppError::BadRequest("No fields to update".to_string()))?;

    if !backend.update_user_email(user_id, &email).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(json!({ "message": "User updated successfully" })))
}

pub async fn delete_user(
    State(backend): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Value>> {
    if !backend.delete_user(user_id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(json!({ "message": "User deleted successfully" })))
}
