/// Authentication endpoints
///
/// This module provides user registration and token issuance:
///
/// - `POST /register` - Register a new user
/// - `POST /token` - Issue a bearer token (form-encoded credentials)
///
/// The issued "token" is the username itself: a deliberate stub for this
/// tasks-only demo, with no signature or expiry. Passwords, however, are
/// stored and verified as Argon2id hashes.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};
use taskman_shared::{
    auth::password,
    models::user::{CreateUser, User},
};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username
    #[validate(length(min = 1, max = 255, message = "Username must be 1-255 characters"))]
    pub username: String,

    /// Password (hashed before storage)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Register response
///
/// Deliberately excludes any password material.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// User ID
    pub id: i64,

    /// Username
    pub username: String,
}

/// Token request (form-encoded)
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// Username
    pub username: String,

    /// Password
    pub password: String,
}

/// Token response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token (the username, see module docs)
    pub access_token: String,

    /// Always "bearer"
    pub token_type: String,
}

/// Register a new user
///
/// Hashes the submitted password with Argon2id and stores the account.
///
/// # Endpoint
///
/// ```text
/// POST /register
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "a_decent_password"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "username": "alice" }
/// ```
///
/// # Errors
///
/// - `409 Conflict`: Username already exists
/// - `422 Unprocessable Entity`: Validation failed
/// - `500 Internal Server Error`: Storage failure
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    req.validate().map_err(ApiError::from)?;

    if User::find_by_username(&state.db, &req.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("user already exists".to_string()));
    }

    let hashed_password = password::hash_password(&req.password)?;

    // A concurrent registration of the same username loses the race at the
    // unique constraint; that error also maps to 409.
    let user = User::create(
        &state.db,
        CreateUser {
            username: req.username,
            hashed_password,
        },
    )
    .await?;

    Ok(Json(RegisterResponse {
        id: user.id,
        username: user.username,
    }))
}

/// Issue a bearer token
///
/// Verifies the submitted credentials against the stored Argon2id hash and
/// returns the username as the bearer token.
///
/// # Endpoint
///
/// ```text
/// POST /token
/// Content-Type: application/x-www-form-urlencoded
///
/// username=alice&password=a_decent_password
/// ```
///
/// # Response
///
/// ```json
/// { "access_token": "alice", "token_type": "bearer" }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Unknown username or wrong password. The message is
///   the same for both so the response does not reveal which; the response
///   carries `WWW-Authenticate: Bearer`.
pub async fn token(
    State(state): State<AppState>,
    Form(req): Form<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let user = User::find_by_username(&state.db, &req.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Incorrect username or password".to_string()))?;

    let valid = password::verify_password(&req.password, &user.hashed_password)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Incorrect username or password".to_string(),
        ));
    }

    Ok(Json(TokenResponse {
        access_token: user.username,
        token_type: "bearer".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_short_password() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            password: "short".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_valid_input() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            password: "a_decent_password".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_response_has_no_password_field() {
        let body = serde_json::to_value(RegisterResponse {
            id: 1,
            username: "alice".to_string(),
        })
        .expect("Response should serialize");

        assert!(body.get("password").is_none());
        assert!(body.get("hashed_password").is_none());
    }

    #[test]
    fn test_token_response_shape() {
        let body = serde_json::to_value(TokenResponse {
            access_token: "alice".to_string(),
            token_type: "bearer".to_string(),
        })
        .expect("Response should serialize");

        assert_eq!(body["access_token"], "alice");
        assert_eq!(body["token_type"], "bearer");
    }

    #[test]
    fn test_token_request_deserializes() {
        let req: TokenRequest =
            serde_json::from_str(r#"{"username":"alice","password":"a_decent_password"}"#)
                .expect("Request should deserialize");
        assert_eq!(req.username, "alice");
        assert_eq!(req.password, "a_decent_password");
    }
}
