//! Cart session orchestration
//!
//! Every mutation resolves the session, takes the session's write lock for
//! the duration of one synchronous cart operation and returns a consistent
//! snapshot taken under the same lock, so readers can never observe derived
//! totals that disagree with the lines.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::cart::{Cart, CartError};
use crate::domain::catalog::CatalogError;
use crate::infrastructure::catalog::ProductCatalog;
use crate::infrastructure::session::{CartSession, SessionStore};

/// Errors surfaced by cart operations
#[derive(Debug, thiserror::Error)]
pub enum CartServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Snapshot of one session's cart, taken under the session lock
#[derive(Debug, Clone)]
pub struct CartView {
    pub session_id: Uuid,
    pub cart: Cart,
    pub just_added: Option<String>,
}

/// Session-scoped cart operations
pub struct CartService {
    catalog: Arc<ProductCatalog>,
    store: SessionStore,
    feedback_clear: Duration,
    shutdown: CancellationToken,
}

impl CartService {
    pub fn new(
        catalog: Arc<ProductCatalog>,
        store: SessionStore,
        feedback_clear: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            catalog,
            store,
            feedback_clear,
            shutdown,
        }
    }

    /// Approximate number of live cart sessions
    pub fn active_sessions(&self) -> u64 {
        self.store.active_sessions()
    }

    /// Current cart for the session; a fresh empty cart when none exists
    pub async fn view(&self, session: Option<Uuid>) -> CartView {
        let (id, entry) = self.store.resolve(session).await;
        let guard = entry.read().await;
        snapshot(id, &guard)
    }

    /// Add `quantity` units of a catalog product to the session's cart
    pub async fn add_item(
        &self,
        session: Option<Uuid>,
        product_id: &str,
        quantity: u32,
    ) -> Result<CartView, CartServiceError> {
        let product = self
            .catalog
            .get(product_id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound {
                id: product_id.to_string(),
            })?;

        let (id, entry) = self.store.resolve(session).await;
        let mut guard = entry.write().await;
        guard.cart.add_item(product, quantity)?;
        guard.just_added = Some(product_id.to_string());
        self.arm_feedback_timer(&entry, &mut guard);

        tracing::debug!(session = %id, product = product_id, quantity, "Added product to cart");
        Ok(snapshot(id, &guard))
    }

    /// Set the quantity of a line; 0 or negative removes the line
    pub async fn update_quantity(
        &self,
        session: Option<Uuid>,
        product_id: &str,
        quantity: i64,
    ) -> CartView {
        let (id, entry) = self.store.resolve(session).await;
        let mut guard = entry.write().await;
        guard.cart.update_quantity(product_id, quantity);

        tracing::debug!(session = %id, product = product_id, quantity, "Updated cart quantity");
        snapshot(id, &guard)
    }

    /// Remove a line; no-op when the product is not in the cart
    pub async fn remove_item(&self, session: Option<Uuid>, product_id: &str) -> CartView {
        let (id, entry) = self.store.resolve(session).await;
        let mut guard = entry.write().await;
        guard.cart.remove_item(product_id);

        tracing::debug!(session = %id, product = product_id, "Removed product from cart");
        snapshot(id, &guard)
    }

    /// Remove all lines; the panel flag is untouched. Idempotent.
    pub async fn clear(&self, session: Option<Uuid>) -> CartView {
        let (id, entry) = self.store.resolve(session).await;
        let mut guard = entry.write().await;
        guard.cart.clear();

        tracing::debug!(session = %id, "Cleared cart");
        snapshot(id, &guard)
    }

    /// Toggle the slide-over panel visibility flag
    pub async fn set_open(&self, session: Option<Uuid>, open: bool) -> CartView {
        let (id, entry) = self.store.resolve(session).await;
        let mut guard = entry.write().await;
        if open {
            guard.cart.open();
        } else {
            guard.cart.close();
        }
        snapshot(id, &guard)
    }

    /// Arm the timer that clears the "just added" marker.
    ///
    /// Any previously pending timer is cancelled first, so only the newest
    /// add controls the marker. The task holds a weak reference to the
    /// session entry: a session evicted before the timer fires makes the
    /// upgrade fail and the timer a no-op, and a server shutdown cancels
    /// the timer through the shutdown token.
    fn arm_feedback_timer(&self, entry: &Arc<RwLock<CartSession>>, guard: &mut CartSession) {
        if let Some(previous) = guard.feedback_guard.take() {
            previous.cancel();
        }

        let token = self.shutdown.child_token();
        guard.feedback_guard = Some(token.clone());

        let weak: Weak<RwLock<CartSession>> = Arc::downgrade(entry);
        let delay = self.feedback_clear;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if let Some(entry) = weak.upgrade() {
                        let mut guard = entry.write().await;
                        guard.just_added = None;
                        guard.feedback_guard = None;
                    }
                }
            }
        });
    }
}

fn snapshot(session_id: Uuid, session: &CartSession) -> CartView {
    CartView {
        session_id,
        cart: session.cart.clone(),
        just_added: session.just_added.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn service(feedback: Duration) -> CartService {
        let catalog = Arc::new(ProductCatalog::embedded().unwrap());
        CartService::new(
            catalog,
            SessionStore::new(Duration::from_secs(60)),
            feedback,
            CancellationToken::new(),
        )
    }

    #[tokio::test]
    async fn add_item_accumulates_into_one_session() {
        let service = service(Duration::from_secs(5));

        let view = service.add_item(None, "1", 2).await.unwrap();
        let session = view.session_id;

        let view = service.add_item(Some(session), "1", 3).await.unwrap();
        assert_eq!(view.session_id, session);
        assert_eq!(view.cart.lines().len(), 1);
        assert_eq!(view.cart.lines()[0].quantity, 5);
        assert_eq!(view.just_added.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn add_item_rejects_unknown_products() {
        let service = service(Duration::from_secs(5));

        let err = service.add_item(None, "999", 1).await.unwrap_err();
        assert!(matches!(
            err,
            CartServiceError::Catalog(CatalogError::ProductNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn add_item_rejects_zero_quantity() {
        let service = service(Duration::from_secs(5));

        let err = service.add_item(None, "1", 0).await.unwrap_err();
        assert!(matches!(
            err,
            CartServiceError::Cart(CartError::InvalidQuantity { .. })
        ));
    }

    #[tokio::test]
    async fn subtotal_tracks_mutations_across_requests() {
        let service = service(Duration::from_secs(5));

        let session = service.add_item(None, "1", 2).await.unwrap().session_id;
        let view = service.add_item(Some(session), "3", 1).await.unwrap();

        assert_eq!(view.cart.subtotal(), dec!(229.70));
        assert_eq!(view.cart.item_count(), 3);

        let view = service.update_quantity(Some(session), "1", 0).await;
        assert!(!view.cart.contains("1"));
        assert_eq!(view.cart.subtotal(), dec!(49.90));

        let view = service.clear(Some(session)).await;
        assert!(view.cart.is_empty());
        let view = service.clear(Some(session)).await;
        assert!(view.cart.is_empty());
    }

    #[tokio::test]
    async fn feedback_marker_clears_after_the_configured_delay() {
        let service = service(Duration::from_millis(40));

        let session = service.add_item(None, "1", 1).await.unwrap().session_id;
        assert_eq!(
            service.view(Some(session)).await.just_added.as_deref(),
            Some("1")
        );

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(service.view(Some(session)).await.just_added, None);
    }

    #[tokio::test]
    async fn a_new_add_rearms_the_feedback_timer() {
        let service = service(Duration::from_millis(80));

        let session = service.add_item(None, "1", 1).await.unwrap().session_id;
        tokio::time::sleep(Duration::from_millis(50)).await;

        // The second add must restart the countdown and repoint the marker
        let view = service.add_item(Some(session), "3", 1).await.unwrap();
        assert_eq!(view.just_added.as_deref(), Some("3"));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            service.view(Some(session)).await.just_added.as_deref(),
            Some("3")
        );

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(service.view(Some(session)).await.just_added, None);
    }

    #[tokio::test]
    async fn panel_flag_is_independent_of_the_lines() {
        let service = service(Duration::from_secs(5));

        let session = service.add_item(None, "1", 1).await.unwrap().session_id;
        let view = service.set_open(Some(session), true).await;
        assert!(view.cart.is_open());
        assert_eq!(view.cart.item_count(), 1);

        let view = service.set_open(Some(session), false).await;
        assert!(!view.cart.is_open());
        assert_eq!(view.cart.item_count(), 1);
    }
}
