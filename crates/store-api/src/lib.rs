//! # store-api
//!
//! HTTP API layer for the pet-store Store resource.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The four Store routes, forwarded to a pluggable delegate
//! - Health and markdown docs endpoints
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/docs/store.md` | Store API docs |
//! | DELETE | `/v2/store/order/{orderId}` | Delete purchase order by ID |
//! | GET | `/v2/store/inventory` | Returns pet inventories by status |
//! | GET | `/v2/store/order/{orderId}` | Find purchase order by ID |
//! | POST | `/v2/store/order` | Place an order for a pet |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, LogFormat};
