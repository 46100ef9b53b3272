use serde::Deserialize;

/// Payload for POST /v1/users/. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Payload for PUT /v1/users/{user_id}.
///
/// `username` is accepted in the payload but updates are not applied to it;
/// only `email` is honored.
#[derive(Debug, Default, Deserialize)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Payload for POST /v1/groups/.
#[derive(Debug, Deserialize)]
pub struct NewGroup {
    pub group_name: String,
}

/// Payload for PUT /v1/groups/{group_id}.
#[derive(Debug, Default, Deserialize)]
pub struct GroupChanges {
    pub group_name: Option<String>,
}

/// Payload for POST /v1/groups/{group_id}/memberships/. The group id comes
/// from the route, not the body.
#[derive(Debug, Deserialize)]
pub struct NewMembership {
    pub user_id: i64,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "member".to_string()
}
