//! # Store API Delegate
//!
//! The HTTP layer owns routing and parameter binding only. Every operation is
//! forwarded to a `StoreApiDelegate`, which the hosting application supplies.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  StoreApiDelegate (trait)                   │
//! │  ├── delete_order()                                         │
//! │  ├── get_inventory()                                        │
//! │  ├── get_order_by_id()                                      │
//! │  └── place_order()                                          │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┴─────────────────┐
//!          │                                   │
//!  ┌───────┴───────┐                   ┌───────┴───────┐
//!  │ NoopStore     │                   │ application   │
//!  │   Delegate    │                   │   delegate    │
//!  └───────────────┘                   └───────────────┘
//! ```
//!
//! Every method has a default that returns `StoreResponse::empty()`, so an
//! implementation only overrides what it supports.

use crate::error::StoreResult;
use crate::order::{Inventory, Order};
use crate::response::StoreResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Business logic behind the Store routes.
#[async_trait]
pub trait StoreApiDelegate: Send + Sync {
    /// Delete purchase order by ID.
    ///
    /// `order_id` is forwarded exactly as it appeared in the path.
    async fn delete_order(&self, _order_id: String) -> StoreResult<StoreResponse<()>> {
        Ok(StoreResponse::empty())
    }

    /// Returns pet inventories by status.
    async fn get_inventory(&self) -> StoreResult<StoreResponse<Inventory>> {
        Ok(StoreResponse::empty())
    }

    /// Find purchase order by ID.
    ///
    /// Only called with IDs that passed the declared bound check.
    async fn get_order_by_id(&self, _order_id: i64) -> StoreResult<StoreResponse<Order>> {
        Ok(StoreResponse::empty())
    }

    /// Place an order for a pet.
    async fn place_order(&self, _order: Order) -> StoreResult<StoreResponse<Order>> {
        Ok(StoreResponse::empty())
    }

    /// Name used in logs
    fn delegate_name(&self) -> &'static str {
        "custom"
    }
}

/// Type alias for a shared delegate (dynamic dispatch)
pub type BoxedStoreDelegate = Arc<dyn StoreApiDelegate>;

/// Delegate that relies on the default implementation of every operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStoreDelegate;

#[async_trait]
impl StoreApiDelegate for NoopStoreDelegate {
    fn delegate_name(&self) -> &'static str {
        "noop"
    }
}

/// Default delegate, boxed
pub fn default_delegate() -> BoxedStoreDelegate {
    Arc::new(NoopStoreDelegate)
}
