//! # store-core
//!
//! Core types and traits for the pet-store Store API.
//!
//! This crate provides:
//! - `StoreApiDelegate` trait holding the business logic behind each route
//! - `NoopStoreDelegate`, the default do-nothing delegate
//! - `Order` and `Inventory` payload types
//! - `StoreResponse`, the status + body envelope
//! - `MediaType` and `Accept` negotiation for response bodies
//! - `StoreOperation` catalog and the markdown docs renderer
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use store_core::{Order, StoreApiDelegate, StoreResponse, StoreResult};
//!
//! struct EchoDelegate;
//!
//! #[async_trait::async_trait]
//! impl StoreApiDelegate for EchoDelegate {
//!     async fn place_order(&self, order: Order) -> StoreResult<StoreResponse<Order>> {
//!         Ok(StoreResponse::ok(order))
//!     }
//! }
//! ```

pub mod delegate;
pub mod docs;
pub mod error;
pub mod media;
pub mod operation;
pub mod order;
pub mod response;

// Re-exports for convenience
pub use delegate::{default_delegate, BoxedStoreDelegate, NoopStoreDelegate, StoreApiDelegate};
pub use docs::render_markdown;
pub use error::{StoreError, StoreResult};
pub use media::{negotiate, MediaType};
pub use operation::{
    parse_order_id, require_order_key, HttpMethod, OrderIdBounds, StoreOperation, ORDER_ID_BOUNDS,
};
pub use order::{Inventory, Order, OrderStatus};
pub use response::StoreResponse;
