//! Stateless authentication collaborators
//!
//! Two narrow interfaces, both external to the CRUD core:
//!
//! - [`CredentialValidator`]: username/password → yes/no, backed by whatever
//!   user directory the host application has.
//! - [`TokenSigner`]: issues a signed, time-bounded assertion of identity at
//!   login and verifies it on each protected call. No session state is held
//!   in-process — every verification stands alone on signature and expiry.
//!
//! The token format is deliberately minimal: `base64url(claims-json) + "." +
//! base64url(hmac-sha256(claims-json))`.

use crate::core::error::ApiError;
use anyhow::Result;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Claims embedded in a signed token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated username)
    pub sub: String,

    /// Expiry as a Unix timestamp (seconds)
    pub exp: i64,
}

/// Validates a credential pair against a user directory
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Check whether `username`/`password` identify a known user
    async fn validate(&self, username: &str, password: &str) -> Result<bool>;
}

/// In-memory user directory loaded from configuration.
///
/// Useful for development and tests. Production hosts substitute their own
/// [`CredentialValidator`] over a real directory.
pub struct StaticUserDirectory {
    users: Vec<(String, String)>,
}

impl StaticUserDirectory {
    pub fn new(users: Vec<(String, String)>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CredentialValidator for StaticUserDirectory {
    async fn validate(&self, username: &str, password: &str) -> Result<bool> {
        Ok(self
            .users
            .iter()
            .any(|(u, p)| u == username && p == password))
    }
}

/// Issues and verifies signed, time-bounded identity assertions
#[derive(Clone)]
pub struct TokenSigner {
    key: Vec<u8>,
    ttl: Duration,
}

impl TokenSigner {
    /// Create a signer with the given HMAC key and token lifetime
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            key: secret.into(),
            ttl,
        }
    }

    fn mac(&self) -> HmacSha256 {
        // A zero-length key is still a valid HMAC key; new_from_slice only
        // fails for lengths HMAC cannot handle, which is none for SHA-256.
        HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length")
    }

    /// Issue a token asserting `subject`'s identity until now + ttl
    pub fn issue(&self, subject: &str) -> Result<String> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        let payload = serde_json::to_vec(&claims)?;

        let mut mac = self.mac();
        mac.update(&payload);
        let sig = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(sig)
        ))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Signature is checked before expiry so a tampered `exp` never matters.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let (payload_b64, sig_b64) = token
            .split_once('.')
            .ok_or_else(|| ApiError::Unauthorized("malformed token".into()))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| ApiError::Unauthorized("malformed token".into()))?;
        let sig = URL_SAFE_NO_PAD
            .decode(sig_b64)
            .map_err(|_| ApiError::Unauthorized("malformed token".into()))?;

        let mut mac = self.mac();
        mac.update(&payload);
        mac.verify_slice(&sig)
            .map_err(|_| ApiError::Unauthorized("invalid signature".into()))?;

        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|_| ApiError::Unauthorized("malformed claims".into()))?;

        if claims.exp < Utc::now().timestamp() {
            return Err(ApiError::Unauthorized("token expired".into()));
        }

        Ok(claims)
    }
}
