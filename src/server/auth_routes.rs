//! HTTP handlers for the stateless authentication routes
//!
//! - POST /auth/login  - validate credentials, issue a signed token
//! - GET  /auth/me     - verify the bearer token, return the subject claim
//!
//! No session state is held: every protected call stands alone on the
//! token's signature and expiry.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::auth::{CredentialValidator, TokenSigner};
use crate::core::error::ApiError;

/// State shared by the auth handlers
#[derive(Clone)]
pub struct AuthState {
    pub directory: Arc<dyn CredentialValidator>,
    pub signer: TokenSigner,
}

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response body for the protected identity endpoint
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get("authorization")
        .ok_or_else(|| ApiError::Unauthorized("missing authorization header".into()))?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::Unauthorized("malformed authorization header".into()))?;

    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("expected bearer token".into()))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let valid = state
        .directory
        .validate(&req.username, &req.password)
        .await
        .map_err(|e| ApiError::Storage(format!("user directory error: {e}")))?;

    if !valid {
        tracing::info!(username = %req.username, "login rejected");
        return Err(ApiError::Unauthorized("invalid credentials".into()));
    }

    let token = state
        .signer
        .issue(&req.username)
        .map_err(|e| ApiError::Storage(format!("token issuance failed: {e}")))?;

    tracing::info!(username = %req.username, "login accepted");
    Ok(Json(TokenResponse { token }))
}

/// GET /auth/me (protected)
pub async fn me(
    State(state): State<AuthState>,
    headers: HeaderMap,
) -> Result<Json<MeResponse>, ApiError> {
    let token = bearer_token(&headers)?;
    let claims = state.signer.verify(token)?;

    Ok(Json(MeResponse {
        username: claims.sub,
    }))
}

/// Build the auth routes over a user directory and a token signer
pub fn auth_routes(directory: Arc<dyn CredentialValidator>, signer: TokenSigner) -> Router {
    let state = AuthState { directory, signer };

    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic abc"));
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::Unauthorized(_))
        ));
    }
}
