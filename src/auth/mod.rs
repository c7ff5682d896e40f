//! Session-token authentication and credential verification.
//!
//! Logins issue an opaque bearer token held in an in-process session map.
//! Stored credentials come in two formats: legacy plaintext and SHA-256 hex
//! digests. Both are compared in constant time to mitigate timing attacks.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use crate::errors::{codes, ErrorDetails, ErrorResponse};
use crate::models::PublicUser;

/// Live sessions, keyed by bearer token.
pub type SessionStore = Arc<RwLock<HashMap<String, PublicUser>>>;

/// Verify a submitted password against the stored credential.
///
/// A stored value of 64 hex characters is treated as a SHA-256 digest of the
/// password; anything else is a legacy plaintext credential compared
/// directly.
pub fn verify_password(stored: &str, provided: &str) -> bool {
    if looks_hashed(stored) {
        let digest = hash_password(provided);
        constant_time_compare(&digest, &stored.to_lowercase())
    } else {
        constant_time_compare(stored, provided)
    }
}

/// Hex-encoded SHA-256 digest, the storage format for new credentials.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn looks_hashed(stored: &str) -> bool {
    stored.len() == 64 && stored.chars().all(|c| c.is_ascii_hexdigit())
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}

/// Session middleware: resolves the bearer token to a logged-in user and
/// stores it as a request extension for handlers.
pub async fn session_auth_layer(
    sessions: SessionStore,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string());

    let Some(token) = token else {
        return unauthorized_response("Missing session token");
    };

    let user = sessions.read().await.get(&token).cloned();
    match user {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => unauthorized_response("Invalid or expired session token"),
    }
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
        },
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_credential() {
        assert!(verify_password("password123", "password123"));
        assert!(!verify_password("password123", "password124"));
    }

    #[test]
    fn test_hashed_credential() {
        let stored = hash_password("password123");
        assert_eq!(stored.len(), 64);
        assert!(verify_password(&stored, "password123"));
        assert!(!verify_password(&stored, "wrong"));
    }

    #[test]
    fn test_hashed_credential_uppercase_storage() {
        let stored = hash_password("secret").to_uppercase();
        assert!(verify_password(&stored, "secret"));
    }

    #[test]
    fn test_hex_lookalike_plaintext_not_matched_as_hash() {
        // Exactly 64 hex chars stored means hash comparison; the literal
        // string no longer works as a plaintext password
        let stored = hash_password("secret");
        assert!(!verify_password(&stored, &stored));
    }

    #[test]
    fn test_constant_time_compare_lengths() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("short", "much-longer-value"));
    }
}
