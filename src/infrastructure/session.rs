//! In-memory cart session store
//!
//! Carts are scoped to a browser session and never persisted: the store is
//! a moka cache keyed by session id with a time-to-idle matching the
//! configured retention window. Eviction drops the session entry, which
//! also releases any pending feedback timer through its weak reference.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::cart::Cart;

/// One session's cart plus its transient view state
#[derive(Debug, Default)]
pub struct CartSession {
    pub cart: Cart,
    /// Id of the most recently added product, shown as transient feedback
    /// and auto-cleared by an owned timer.
    pub just_added: Option<String>,
    /// Cancels the pending feedback timer when a newer add replaces it or
    /// the server shuts down.
    pub feedback_guard: Option<CancellationToken>,
}

/// TTL-bound store of cart sessions
pub struct SessionStore {
    sessions: Cache<Uuid, Arc<RwLock<CartSession>>>,
}

impl SessionStore {
    /// Create a store whose sessions expire after `ttl` without any access
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Cache::builder().time_to_idle(ttl).build(),
        }
    }

    /// Look up an existing session, or mint a fresh cart.
    ///
    /// Unknown and expired ids are indistinguishable from absent ones; in
    /// either case the caller gets a brand-new session id, never the one the
    /// client supplied, so stale cookies cannot pin a session id.
    pub async fn resolve(&self, id: Option<Uuid>) -> (Uuid, Arc<RwLock<CartSession>>) {
        if let Some(id) = id {
            if let Some(entry) = self.sessions.get(&id).await {
                return (id, entry);
            }
        }

        let id = Uuid::new_v4();
        let entry = Arc::new(RwLock::new(CartSession::default()));
        self.sessions.insert(id, entry.clone()).await;
        (id, entry)
    }

    /// Approximate number of live sessions
    pub fn active_sessions(&self) -> u64 {
        self.sessions.entry_count()
    }
}
