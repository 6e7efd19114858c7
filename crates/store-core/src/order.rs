//! # Order Types
//!
//! The purchase order payload and the inventory map exchanged by the Store API.
//! Both are passed through the HTTP layer unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inventory counts keyed by status code
pub type Inventory = HashMap<String, i32>;

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting approval
    Placed,
    /// Order approved
    Approved,
    /// Order delivered
    Delivered,
}

impl OrderStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Approved => "approved",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchase order for a pet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<DateTime<Utc>>,

    /// Order Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    #[serde(default)]
    pub complete: bool,
}

impl Order {
    /// Create an empty order for the given pet
    pub fn for_pet(pet_id: i64) -> Self {
        Self {
            pet_id: Some(pet_id),
            ..Self::default()
        }
    }

    /// Builder: set the order ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder: set the quantity
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Builder: set the ship date
    pub fn with_ship_date(mut self, ship_date: DateTime<Utc>) -> Self {
        self.ship_date = Some(ship_date);
        self
    }

    /// Builder: set the status
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: mark complete
    pub fn completed(mut self) -> Self {
        self.complete = true;
        self
    }
}
