//! In-memory session management.
//!
//! TRADE-OFFS
//! ==========
//! Sessions live only as long as the process. A restart signs everyone out,
//! which the page tolerates: `/api/auth/me` answers 401 and the email line
//! renders empty.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User attached to a session, serialized as the `/api/auth/me` body.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, if known.
    pub email: Option<String>,
}

/// Token -> user map shared across handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionUser>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for a new user with the given email, returning the token.
    pub async fn create(&self, email: Option<String>) -> String {
        let token = generate_token();
        let user = SessionUser { id: Uuid::new_v4(), email };
        self.inner.write().await.insert(token.clone(), user);
        token
    }

    /// Look up the user for a session token.
    pub async fn get(&self, token: &str) -> Option<SessionUser> {
        self.inner.read().await.get(token).cloned()
    }

    /// Delete a session. Returns whether it existed.
    pub async fn delete(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
