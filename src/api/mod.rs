use axum::{
    middleware,
    routing::{delete, post, put},
    Router,
};
use std::sync::Arc;

use crate::backend::RosterBackend;
use crate::logging;

pub mod groups;
pub mod memberships;
pub mod users;

pub type AppState = Arc<dyn RosterBackend>;

/// Build the application router over an injected backend.
pub fn router(backend: AppState) -> Router {
    Router::new()
        .route("/v1/users/", post(users::create_user))
        .route("/v1/users/{user_id}", put(users::update_user))
        .route("/v1/users/{user_id}", delete(users::delete_user))
        .route("/v1/groups/", post(groups::create_group))
        .route("/v1/groups/{group_id}", put(groups::update_group))
        .route("/v1/groups/{group_id}", delete(groups::delete_group))
        .route(
            "/v1/groups/{group_id}/memberships/",
            post(memberships::add_member),
        )
        .route(
            "/v1/groups/{group_id}/memberships/{user_id}",
            delete(memberships::remove_member),
        )
        .layer(middleware::from_fn(logging::access_log_middleware))
        .with_state(backend)
}
