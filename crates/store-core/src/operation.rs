//! # Store Operations
//!
//! Static description of each Store route: method, path template, media
//! types and declared responses. The router, the bound check and the
//! markdown docs all read from here.

use crate::error::{StoreError, StoreResult};
use crate::media::{negotiate, MediaType};

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Where a parameter is bound from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Body,
}

impl ParamLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Path => "path",
            ParamLocation::Body => "body",
        }
    }
}

/// A declared operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    /// Documentation type name (string, integer, Order)
    pub type_name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A declared response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSpec {
    pub code: u16,
    pub message: &'static str,
    pub body: Option<&'static str>,
}

/// Inclusive bound enforced on the getOrderById path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderIdBounds {
    pub min: i64,
    pub max: i64,
}

/// The declared `@Min(1) @Max(5)` bound
pub const ORDER_ID_BOUNDS: OrderIdBounds = OrderIdBounds { min: 1, max: 5 };

impl OrderIdBounds {
    pub fn contains(&self, order_id: i64) -> bool {
        (self.min..=self.max).contains(&order_id)
    }

    /// Reject IDs outside the bound
    pub fn check(&self, order_id: i64) -> StoreResult<i64> {
        if self.contains(order_id) {
            Ok(order_id)
        } else {
            Err(StoreError::OrderIdOutOfRange {
                order_id,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for OrderIdBounds {
    fn default() -> Self {
        ORDER_ID_BOUNDS
    }
}

/// Parse a raw path segment as an order ID for getOrderById
pub fn parse_order_id(raw: &str) -> StoreResult<i64> {
    let order_id = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| StoreError::InvalidOrderId(raw.to_string()))?;
    ORDER_ID_BOUNDS.check(order_id)
}

/// Validate the deleteOrder path parameter
pub fn require_order_key(raw: &str) -> StoreResult<&str> {
    if raw.trim().is_empty() {
        return Err(StoreError::InvalidOrderId(raw.to_string()));
    }
    Ok(raw)
}

/// The four Store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    DeleteOrder,
    GetInventory,
    GetOrderById,
    PlaceOrder,
}

const JSON: &str = "application/json";
const XML: &str = "application/xml";

impl StoreOperation {
    /// All operations in route-registration order
    pub const ALL: [StoreOperation; 4] = [
        StoreOperation::DeleteOrder,
        StoreOperation::GetInventory,
        StoreOperation::GetOrderById,
        StoreOperation::PlaceOrder,
    ];

    pub fn nickname(&self) -> &'static str {
        match self {
            StoreOperation::DeleteOrder => "deleteOrder",
            StoreOperation::GetInventory => "getInventory",
            StoreOperation::GetOrderById => "getOrderById",
            StoreOperation::PlaceOrder => "placeOrder",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            StoreOperation::DeleteOrder => "Delete purchase order by ID",
            StoreOperation::GetInventory => "Returns pet inventories by status",
            StoreOperation::GetOrderById => "Find purchase order by ID",
            StoreOperation::PlaceOrder => "Place an order for a pet",
        }
    }

    /// Notes as declared. The getOrderById note disagrees with `ORDER_ID_BOUNDS`
    /// and is kept as written.
    pub fn notes(&self) -> &'static str {
        match self {
            StoreOperation::DeleteOrder => {
                "For valid response try integer IDs with value < 1000. Anything above 1000 or nonintegers will generate API errors"
            }
            StoreOperation::GetInventory => "Returns a map of status codes to quantities",
            StoreOperation::GetOrderById => {
                "For valid response try integer IDs with value <= 5 or > 10. Other values will generated exceptions"
            }
            StoreOperation::PlaceOrder => "",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            StoreOperation::DeleteOrder => HttpMethod::Delete,
            StoreOperation::GetInventory | StoreOperation::GetOrderById => HttpMethod::Get,
            StoreOperation::PlaceOrder => HttpMethod::Post,
        }
    }

    /// Path template relative to the base path
    pub fn path(&self) -> &'static str {
        match self {
            StoreOperation::DeleteOrder | StoreOperation::GetOrderById => {
                "/store/order/{orderId}"
            }
            StoreOperation::GetInventory => "/store/inventory",
            StoreOperation::PlaceOrder => "/store/order",
        }
    }

    pub fn consumes(&self) -> &'static [&'static str] {
        match self {
            StoreOperation::PlaceOrder => &[JSON],
            _ => &[],
        }
    }

    pub fn produces(&self) -> &'static [&'static str] {
        match self {
            StoreOperation::DeleteOrder => &[],
            StoreOperation::GetInventory => &[JSON],
            StoreOperation::GetOrderById | StoreOperation::PlaceOrder => &[XML, JSON],
        }
    }

    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            StoreOperation::DeleteOrder => &[ParamSpec {
                name: "orderId",
                location: ParamLocation::Path,
                type_name: "string",
                description: "ID of the order that needs to be deleted",
                required: true,
            }],
            StoreOperation::GetInventory => &[],
            StoreOperation::GetOrderById => &[ParamSpec {
                name: "orderId",
                location: ParamLocation::Path,
                type_name: "integer",
                description: "ID of pet that needs to be fetched",
                required: true,
            }],
            StoreOperation::PlaceOrder => &[ParamSpec {
                name: "order",
                location: ParamLocation::Body,
                type_name: "Order",
                description: "order placed for purchasing the pet",
                required: true,
            }],
        }
    }

    pub fn responses(&self) -> &'static [ResponseSpec] {
        match self {
            StoreOperation::DeleteOrder => &[
                ResponseSpec {
                    code: 400,
                    message: "Invalid ID supplied",
                    body: None,
                },
                ResponseSpec {
                    code: 404,
                    message: "Order not found",
                    body: None,
                },
            ],
            StoreOperation::GetInventory => &[ResponseSpec {
                code: 200,
                message: "successful operation",
                body: Some("map[string, integer]"),
            }],
            StoreOperation::GetOrderById => &[
                ResponseSpec {
                    code: 200,
                    message: "successful operation",
                    body: Some("Order"),
                },
                ResponseSpec {
                    code: 400,
                    message: "Invalid ID supplied",
                    body: None,
                },
                ResponseSpec {
                    code: 404,
                    message: "Order not found",
                    body: None,
                },
            ],
            StoreOperation::PlaceOrder => &[
                ResponseSpec {
                    code: 200,
                    message: "successful operation",
                    body: Some("Order"),
                },
                ResponseSpec {
                    code: 400,
                    message: "Invalid Order",
                    body: None,
                },
            ],
        }
    }

    /// Declared `api_key` authorization (documented, not enforced)
    pub fn requires_api_key(&self) -> bool {
        matches!(self, StoreOperation::GetInventory)
    }

    /// Choose the response format for an `Accept` header
    pub fn negotiate(&self, accept: Option<&str>) -> StoreResult<MediaType> {
        negotiate(accept, self.produces())
    }

    /// Full route path for a base path such as `/v2`
    pub fn full_path(&self, base_path: &str) -> String {
        format!("{}{}", base_path, self.path())
    }
}

impl std::fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.nickname())
    }
}
