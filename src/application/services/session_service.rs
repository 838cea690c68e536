//! Admin session management.
//!
//! Sessions are explicit objects with `issued_at` and `expires_at`; expiry
//! is checked here on every authentication, so there is exactly one owner
//! of the timeout logic. Tokens are hashed with HMAC-SHA256 (keyed by a
//! server-side secret) before storage, so a leaked session table cannot be
//! replayed.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::utils::token::generate_token;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of `raw` keyed by `secret`, as 64 lowercase hex characters.
///
/// Shared by the server (password and token hashing) and the `admin` CLI
/// (generating `ADMIN_PASSWORD_HASH`).
pub fn hmac_hex(secret: &str, raw: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(raw.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// One authenticated admin session.
#[derive(Debug, Clone)]
pub struct Session {
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Issues and validates admin session tokens.
///
/// Sessions live in process memory; the service runs as a single instance
/// and a restart simply requires logging in again.
pub struct SessionService {
    sessions: RwLock<HashMap<String, Session>>,
    signing_secret: String,
    /// HMAC-SHA256 of the admin password, keyed by `signing_secret`.
    /// Generated with the `admin` CLI.
    password_hash: String,
    ttl: Duration,
}

impl SessionService {
    /// Creates a session service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key for password and token hashing
    /// - `password_hash` - expected hex MAC of the admin password
    /// - `ttl_seconds` - session lifetime from issuance
    pub fn new(signing_secret: String, password_hash: String, ttl_seconds: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            signing_secret,
            password_hash,
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    /// Hashes a raw secret with HMAC-SHA256 using the server signing secret.
    fn hash(&self, raw: &str) -> String {
        hmac_hex(&self.signing_secret, raw)
    }

    /// Verifies the admin password and issues a new session token.
    ///
    /// Returns the raw token (sent to the client as a cookie) together with
    /// the session metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the password does not match.
    pub async fn login(&self, password: &str) -> Result<(String, Session), AppError> {
        if self.hash(password) != self.password_hash {
            return Err(AppError::unauthorized(
                "Invalid credentials",
                json!({ "reason": "password mismatch" }),
            ));
        }

        let token = generate_token();
        let issued_at = Utc::now();
        let session = Session {
            issued_at,
            expires_at: issued_at + self.ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.is_expired());
        sessions.insert(self.hash(&token), session.clone());

        tracing::info!("admin session issued");
        Ok((token, session))
    }

    /// Drops every expired session. Called periodically by the reaper task.
    pub async fn prune_expired(&self) {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::debug!(removed, "expired admin sessions pruned");
        }
    }

    /// Validates a session token.
    ///
    /// Expired sessions are pruned as they are encountered.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the token is unknown or the
    /// session has expired.
    pub async fn authenticate(&self, token: &str) -> Result<Session, AppError> {
        let key = self.hash(token);
        let mut sessions = self.sessions.write().await;

        match sessions.get(&key) {
            Some(session) if !session.is_expired() => Ok(session.clone()),
            Some(_) => {
                sessions.remove(&key);
                Err(AppError::unauthorized(
                    "Admin session has expired. Please log in again.",
                    json!({ "reason": "expired" }),
                ))
            }
            None => Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "unknown session" }),
            )),
        }
    }

    /// Revokes a session. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) {
        let key = self.hash(token);
        if self.sessions.write().await.remove(&key).is_some() {
            tracing::info!("admin session revoked");
        }
    }
}

/// Periodically prunes expired sessions so abandoned logins do not
/// accumulate between authentication attempts.
pub async fn run_session_reaper(
    sessions: std::sync::Arc<SessionService>,
    period: std::time::Duration,
) {
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        sessions.prune_expired().await;
    }
}
