use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::AppState;
use crate::backend::MembershipStore;
use crate::error::{AppError, AppResult};
use crate::models::NewMembership;

pub async fn add_member(
    State(backend): State<AppState>,
    Path(group_id): Path<i64>,
    Json(payload): Json<NewMembership>,
) -> AppResult<Json<Value>> {
    backend.insert_membership(group_id, &payload).await?;

    Ok(Json(json!({ "message": "User added to group successfully" })))
}

pub async fn remove_member(
    State(backend): State<AppState>,
    Path((group_id, user_id)): Path<(i64, i64)>,
) -> AppResult<Json<Value>> {
    if !backend.delete_membership(group_id, user_id).await? {
        return Err(AppError::NotFound("Membership not found".to_string()));
    }

    Ok(Json(json!({ "message": "User removed from group successfully" })))
}
