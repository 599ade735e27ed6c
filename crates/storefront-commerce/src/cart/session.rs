//! Session scope that provides the cart store to its consumers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::cart::CartStore;
use crate::error::CommerceError;

/// Owns the cart store for the lifetime of one UI session.
///
/// Consumers receive the store from here rather than from a global; asking
/// for it before [`begin`](Self::begin) or after [`end`](Self::end) is a
/// programming error reported as [`CommerceError::StoreUninitialized`].
///
/// The check covers acquisition only. A handle obtained during the session
/// stays usable after [`end`](Self::end), but it is detached: the session
/// no longer holds it, and [`begin`](Self::begin) starts from a new, empty
/// store that never sees its changes.
#[derive(Debug, Default)]
pub struct CartSession {
    active: Option<ActiveSession>,
}

#[derive(Debug)]
struct ActiveSession {
    store: Arc<CartStore>,
    started_at: DateTime<Utc>,
}

impl CartSession {
    /// Create a session that has not started yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and start a session.
    pub fn started() -> Self {
        let mut session = Self::new();
        session.begin();
        session
    }

    /// Start the session with an empty cart, replacing any previous one.
    pub fn begin(&mut self) -> Arc<CartStore> {
        let store = Arc::new(CartStore::new());
        let started_at = Utc::now();
        tracing::debug!(%started_at, "cart session started");
        self.active = Some(ActiveSession {
            store: Arc::clone(&store),
            started_at,
        });
        store
    }

    /// End the session, discarding the cart.
    pub fn end(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!(
                started_at = %active.started_at,
                items = active.store.line_count(),
                "cart session ended"
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// When the current session started.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.active.as_ref().map(|a| a.started_at)
    }

    /// The session's cart store.
    pub fn store(&self) -> Result<Arc<CartStore>, CommerceError> {
        self.active
            .as_ref()
            .map(|a| Arc::clone(&a.store))
            .ok_or(CommerceError::StoreUninitialized)
    }
}
