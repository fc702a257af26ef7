use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequest, FromRequestParts, Request},
    http::{header, request::Parts},
    Form, Json,
};
use tracing::warn;

use super::dto::NewUser;
use super::repo_types::User;
use super::services::UserDirectory;
use crate::error::ApiError;

/// The loaded user list. Rejects the request with 404 while nothing is loaded.
pub struct LoadedUsers(pub Arc<Vec<User>>);

#[async_trait]
impl<S> FromRequestParts<S> for LoadedUsers
where
    S: Send + Sync,
    Arc<UserDirectory>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let directory = Arc::<UserDirectory>::from_ref(state);
        match directory.snapshot().await {
            Some(users) => Ok(LoadedUsers(users)),
            None => {
                warn!("request rejected, users not loaded");
                Err(ApiError::UsersNotLoaded)
            }
        }
    }
}

/// Add-user body, read as a form when the request says so and as JSON otherwise.
pub struct UserBody(pub NewUser);

#[async_trait]
impl<S> FromRequest<S> for UserBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let parsed = if is_form {
            Form::<NewUser>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Json::<NewUser>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        };

        parsed.map(UserBody).map_err(|msg| {
            warn!(error = %msg, form = is_form, "rejected user body");
            ApiError::InvalidUser(msg)
        })
    }
}
