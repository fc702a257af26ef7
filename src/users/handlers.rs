use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, warn};

use super::{
    dto::{EmailItem, UsernameItem},
    extractors::{LoadedUsers, UserBody},
    services::{find_email, usernames},
};
use crate::{error::ApiError, state::AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/usernames", get(list_usernames))
        .route("/username/:name", get(get_email))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/adduser", post(add_user))
}

#[instrument(skip(users))]
pub async fn list_usernames(LoadedUsers(users): LoadedUsers) -> Json<Vec<UsernameItem>> {
    Json(usernames(&users))
}

#[instrument(skip(users))]
pub async fn get_email(
    LoadedUsers(users): LoadedUsers,
    Path(name): Path<String>,
) -> Result<Json<Vec<EmailItem>>, ApiError> {
    let item = find_email(&users, &name).ok_or(ApiError::UserNotFound)?;
    Ok(Json(vec![item]))
}

#[instrument(skip_all)]
pub async fn add_user(
    State(state): State<AppState>,
    _loaded: LoadedUsers,
    UserBody(body): UserBody,
) -> Result<&'static str, ApiError> {
    let user = body.validate().inspect_err(|e| warn!(error = %e, "rejected user"))?;
    state.users.add(user).await?;
    Ok("done")
}
