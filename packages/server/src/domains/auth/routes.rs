use anyhow::Context;
use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use super::models::{NewUser, User};
use super::password::{hash_password, verify_password};
use crate::common::{database::is_unique_violation, ApiError, ApiResult, Validator};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

pub const COULD_NOT_VALIDATE: &str = "Could not validate user.";

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
}

/// OAuth2 password-grant form (`application/x-www-form-urlencoded`)
#[derive(Debug, Deserialize)]
pub struct TokenRequestForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub grant_type: Option<String>,
    #[serde(default)]
    pub scope: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Auth routes. Expects an [`AppState`] extension.
pub fn auth_routes() -> Router {
    Router::new()
        .route("/auth", post(create_user))
        .route("/auth/", post(create_user))
        .route("/auth/token", post(login_for_access_token))
        .route("/auth/me", get(read_current_user))
}

/// Look up `username` and check `password` against the stored hash.
///
/// Returns `None` for unknown, inactive, or wrong-password users alike.
pub async fn authenticate_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> anyhow::Result<Option<User>> {
    let Some(user) = User::find_by_username(username, pool).await? else {
        return Ok(None);
    };

    if !user.is_active {
        return Ok(None);
    }

    let password = password.to_string();
    let hash = user.hashed_password.clone();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .context("Password verification task failed")??;

    Ok(matches.then_some(user))
}

async fn create_user(
    Extension(state): Extension<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let mut validator = Validator::new();
    validator
        .min_chars("username", &request.username, 1)
        .min_chars("email", &request.email, 1)
        .min_chars("password", &request.password, 1);
    validator.finish()?;

    let password = request.password;
    let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("Password hashing task failed")??;

    let new_user = NewUser {
        email: request.email,
        username: request.username,
        first_name: request.first_name,
        last_name: request.last_name,
        hashed_password,
        role: request.role,
    };

    let user = match User::create(new_user, &state.db_pool).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Conflict(
                "Username or email already registered.".to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id, username = %user.username, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login_for_access_token(
    Extension(state): Extension<AppState>,
    Form(form): Form<TokenRequestForm>,
) -> ApiResult<Json<Token>> {
    if let Some(grant_type) = form.grant_type.as_deref() {
        if grant_type != "password" {
            return Err(ApiError::unauthorized(COULD_NOT_VALIDATE));
        }
    }

    let Some(user) = authenticate_user(&state.db_pool, &form.username, &form.password).await?
    else {
        warn!(username = %form.username, "Rejected token request");
        return Err(ApiError::unauthorized(COULD_NOT_VALIDATE));
    };

    debug!(user_id = user.id, scope = %form.scope, "Issuing access token");
    let access_token = state.jwt_service.create_token(&user.username, user.id)?;

    Ok(Json(Token {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Tokens outlive accounts, so the user behind a valid token is re-checked.
async fn read_current_user(
    Extension(state): Extension<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<AuthUser>> {
    match User::find_by_id(auth_user.id, &state.db_pool).await? {
        Some(user) if user.is_active => Ok(Json(AuthUser {
            username: user.username,
            id: user.id,
        })),
        _ => {
            warn!(user_id = auth_user.id, "Token refers to a missing or inactive user");
            Err(ApiError::unauthorized(COULD_NOT_VALIDATE))
        }
    }
}
