use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::AppState;
use crate::backend::GroupStore;
use crate::error::{AppError, AppResult};
use crate::models::{GroupChanges, NewGroup};

pub async fn create_group(
    State(backend): State<AppState>,
    Json(payload): Json<NewGroup>,
) -> AppResult<Json<Value>> {
    backend.insert_group(&payload).await?;

    Ok(Json(json!({ "message": "Group added successfully" })))
}

pub async fn update_group(
    State(backend): State<AppState>,
    Path(group_id): Path<i64>,
    Json(changes): Json<GroupChanges>,
) -> AppResult<Json<Value>> {
    let group_name = changes
        .group_name
        .ok_or_else(|| AppError::BadRequest("No fields to update".to_string()))?;

    if !backend.update_group_name(group_id, &group_name).await? {
        return Err(AppError::NotFound("Group not found".to_string()));
    }

    Ok(Json(json!({ "message": "Group updated successfully" })))
}

pub async fn delete_group(
    State(backend): State<AppState>,
    Path(group_id): Path<i64>,
) -> AppResult<Json<Value>> {
    if !backend.delete_group(group_id).await? {
        return Err(AppError::NotFound("Group not found".to_string()));
    }

    Ok(Json(json!({ "message": "Group deleted successfully" })))
}
