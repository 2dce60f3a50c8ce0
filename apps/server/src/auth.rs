use std::sync::Arc;

use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash, PasswordVerifier},
    Argon2,
};
use axum::{
    body::Body,
    extract::State,
    http::{
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
        Request, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;

use crate::main_lib::AppState;

#[derive(Clone)]
pub struct AuthConfig {
    pub username: String,
    /// Argon2 hash in PHC string form.
    pub password_hash: String,
}

/// Checks HTTP Basic credentials against the configured user.
pub struct AuthManager {
    username: String,
    password_hash: String,
}

#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
    InvalidCredentials,
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    code: u16,
    message: String,
}

impl AuthManager {
    pub fn new(config: &AuthConfig) -> anyhow::Result<Self> {
        PasswordHash::new(&config.password_hash)
            .map_err(|e| anyhow::anyhow!("Invalid NF_AUTH_PASSWORD_HASH: {e}"))?;
        Ok(Self {
            username: config.username.clone(),
            password_hash: config.password_hash.clone(),
        })
    }

    pub fn verify(&self, username: &str, candidate: &str) -> Result<(), AuthError> {
        if username != self.username {
            return Err(AuthError::InvalidCredentials);
        }
        let parsed = PasswordHash::new(&self.password_hash).map_err(|e| {
            AuthError::Internal(format!("Invalid password hash configuration: {e}"))
        })?;
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => AuthError::InvalidCredentials,
                other => AuthError::Internal(format!("Password verification failed: {other}")),
            })
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AuthError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = Json(AuthErrorBody {
            code: status.as_u16(),
            message,
        });
        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Basic realm=\"navfolio\""),
            );
        }
        response
    }
}

/// Splits an `Authorization: Basic ...` header value into user and password.
fn parse_basic_credentials(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Basic") {
        return None;
    }
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

pub async fn require_basic_auth(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let Some(auth) = state.auth.clone() else {
        return Ok(next.run(request).await);
    };

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthorized)?;

    let (username, password) = parse_basic_credentials(header).ok_or(AuthError::Unauthorized)?;

    // Argon2 runs on the blocking pool.
    let verified = tokio::task::spawn_blocking(move || auth.verify(&username, &password))
        .await
        .map_err(|e| AuthError::Internal(format!("Credential check aborted: {e}")))?;
    verified?;

    Ok(next.run(request).await)
}
