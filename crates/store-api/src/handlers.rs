//! # Request Handlers
//!
//! Axum request handlers for the Store API.
//! Each store handler negotiates the response format, binds its parameters,
//! applies the declared checks and forwards to the delegate. The delegate's
//! envelope is returned as-is, encoded as JSON or XML.

use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use store_core::{
    parse_order_id, render_markdown, require_order_key, MediaType, Order, StoreError,
    StoreOperation, StoreResponse, StoreResult,
};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn store_error_to_response(err: StoreError, operation: StoreOperation) -> ApiError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code).with_details(operation.nickname());
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn rejected(operation: StoreOperation, err: StoreError) -> ApiError {
    warn!("Rejected {} before delegate: {}", operation, err);
    store_error_to_response(err, operation)
}

fn delegate_failed(operation: StoreOperation, err: StoreError) -> ApiError {
    if err.is_client_error() {
        warn!("Delegate refused {}: {}", operation, err);
    } else {
        error!("Delegate failed {}: {}", operation, err);
    }
    store_error_to_response(err, operation)
}

/// Pick the response format from the `Accept` header
fn negotiate(operation: StoreOperation, headers: &HeaderMap) -> Result<MediaType, ApiError> {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    operation
        .negotiate(accept)
        .map_err(|e| rejected(operation, e))
}

fn encode_body<T: Serialize>(body: &T, media: MediaType) -> StoreResult<Response> {
    match media {
        MediaType::Json => Ok(Json(body).into_response()),
        MediaType::Xml => {
            let xml = quick_xml::se::to_string(body)
                .map_err(|e| StoreError::Internal(format!("XML encoding failed: {}", e)))?;
            Ok(([(header::CONTENT_TYPE, media.as_str())], xml).into_response())
        }
    }
}

/// Render a delegate envelope: its status, plus an encoded body when present
fn envelope_to_response<T: Serialize>(
    envelope: StoreResponse<T>,
    media: MediaType,
) -> StoreResult<Response> {
    let status = StatusCode::from_u16(envelope.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match envelope.body {
        Some(body) => Ok((status, encode_body(&body, media)?).into_response()),
        None => Ok(status.into_response()),
    }
}

fn path_rejection(rejection: PathRejection) -> StoreError {
    StoreError::InvalidOrderId(rejection.body_text())
}

fn order_body_rejection(rejection: JsonRejection) -> StoreError {
    match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            StoreError::UnsupportedMediaType(rejection.body_text())
        }
        _ => StoreError::InvalidOrder(rejection.body_text()),
    }
}

// =============================================================================
// Store Handlers
// =============================================================================

/// DELETE /store/order/{orderId}
#[instrument(skip(state, headers, order_id))]
pub async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    order_id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let operation = StoreOperation::DeleteOrder;
    let media = negotiate(operation, &headers)?;
    let Path(order_id) = order_id.map_err(|e| rejected(operation, path_rejection(e)))?;
    require_order_key(&order_id).map_err(|e| rejected(operation, e))?;

    info!("deleteOrder: order_id={}", order_id);

    let envelope = state
        .delegate
        .delete_order(order_id)
        .await
        .map_err(|e| delegate_failed(operation, e))?;

    envelope_to_response(envelope, media).map_err(|e| delegate_failed(operation, e))
}

/// GET /store/inventory
#[instrument(skip(state, headers))]
pub async fn get_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let operation = StoreOperation::GetInventory;
    let media = negotiate(operation, &headers)?;

    let envelope = state
        .delegate
        .get_inventory()
        .await
        .map_err(|e| delegate_failed(operation, e))?;

    info!(
        "getInventory: status={}, keys={}",
        envelope.status,
        envelope.body.as_ref().map_or(0, |m| m.len())
    );

    envelope_to_response(envelope, media).map_err(|e| delegate_failed(operation, e))
}

/// GET /store/order/{orderId}
#[instrument(skip(state, headers, order_id))]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    order_id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let operation = StoreOperation::GetOrderById;
    let media = negotiate(operation, &headers)?;
    let Path(raw) = order_id.map_err(|e| rejected(operation, path_rejection(e)))?;
    let order_id = parse_order_id(&raw).map_err(|e| rejected(operation, e))?;

    info!("getOrderById: order_id={}, format={}", order_id, media);

    let envelope = state
        .delegate
        .get_order_by_id(order_id)
        .await
        .map_err(|e| delegate_failed(operation, e))?;

    envelope_to_response(envelope, media).map_err(|e| delegate_failed(operation, e))
}

/// POST /store/order
#[instrument(skip(state, headers, order))]
pub async fn place_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    order: Result<Json<Order>, JsonRejection>,
) -> Result<Response, ApiError> {
    let operation = StoreOperation::PlaceOrder;
    let media = negotiate(operation, &headers)?;
    let Json(order) = order.map_err(|e| rejected(operation, order_body_rejection(e)))?;

    info!(
        "placeOrder: id={:?}, pet_id={:?}, quantity={:?}, format={}",
        order.id, order.pet_id, order.quantity, media
    );

    let envelope = state
        .delegate
        .place_order(order)
        .await
        .map_err(|e| delegate_failed(operation, e))?;

    envelope_to_response(envelope, media).map_err(|e| delegate_failed(operation, e))
}

// =============================================================================
// Ancillary Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "store-api",
        "version": env!("CARGO_PKG_VERSION"),
        "delegate": state.delegate.delegate_name(),
    }))
}

/// Markdown documentation of the store operations
pub async fn store_docs(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_markdown(state.base_path()),
    )
}
