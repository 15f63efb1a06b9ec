//! User handlers
//!
//! Account registration and login. Neither route requires a token.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::error::AppError;
use crate::AppState;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Public view of a user; never includes the password hash
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        }
    }
}

/// Login credentials
#[derive(Deserialize)]
pub struct GenerateTokenRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(request) = payload?;

    let user = state
        .user_service
        .register(request.name, request.email, request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /users/generate_token
///
/// Exchange email and password for a bearer token.
pub async fn generate_token(
    State(state): State<AppState>,
    payload: Result<Json<GenerateTokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(request) = payload?;

    let access_token = state
        .user_service
        .issue_token(&request.email, request.password)
        .await?;

    Ok(Json(TokenResponse { access_token }))
}
