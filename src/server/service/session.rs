//! In-memory session cache for linked Discord accounts.
//!
//! This module provides the `SessionStore`, mapping a Discord user ID to the credential
//! bundle obtained when that user linked their backend account. Sessions live only as long
//! as the process. Expiry is enforced lazily: an expired bundle stays in memory until the
//! next read for its key, which removes it.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::model::credential::CredentialBundle;

/// Process-wide cache from Discord user ID to credential bundle.
///
/// Clones share the same underlying map, so a single instance created at startup is handed
/// to both the OAuth callback (writer) and the scoped client factory (reader). None of the
/// operations can fail. Concurrent writes for one key are last-write-wins.
#[derive(Clone)]
pub struct SessionStore {
    /// Linked sessions keyed by Discord user ID.
    sessions: Arc<RwLock<HashMap<String, CredentialBundle>>>,
}

impl SessionStore {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores `bundle` for `identity`, replacing any previous session.
    ///
    /// # Arguments
    /// - `identity` - Discord user ID the session belongs to
    /// - `bundle` - Credential bundle from a successful code exchange
    pub async fn put(&self, identity: impl Into<String>, bundle: CredentialBundle) {
        self.sessions.write().await.insert(identity.into(), bundle);
    }

    /// Retrieves the session for `identity` if it has not expired.
    ///
    /// An expired session is removed as part of the lookup, so once a read observes expiry
    /// the entry is gone for good.
    ///
    /// # Arguments
    /// - `identity` - Discord user ID to look up
    ///
    /// # Returns
    /// - `Some(CredentialBundle)` - Clone of the stored, unexpired bundle
    /// - `None` - Never linked, explicitly deleted, or expired and now evicted
    pub async fn get(&self, identity: &str) -> Option<CredentialBundle> {
        let mut sessions = self.sessions.write().await;

        let bundle = sessions.get(identity)?;

        if bundle.is_expired_at(Utc::now()) {
            sessions.remove(identity);
            tracing::debug!("Evicted expired session for {}", identity);
            return None;
        }

        Some(bundle.clone())
    }

    /// Removes the session for `identity`, if any.
    pub async fn delete(&self, identity: &str) {
        self.sessions.write().await.remove(identity);
    }

    /// Checks whether an entry exists for `identity` without applying expiry.
    ///
    /// Used in tests to observe eviction.
    #[cfg(test)]
    pub async fn contains(&self, identity: &str) -> bool {
        self.sessions.read().await.contains_key(identity)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
