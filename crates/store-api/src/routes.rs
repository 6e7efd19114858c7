//! # Routes
//!
//! Axum router configuration for the Store API.
//! Store routes are mounted under the configured base path (default `/v2`).

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use store_core::StoreOperation;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes (relative to the base path):
/// - DELETE /store/order/{orderId} - deleteOrder
/// - GET    /store/inventory - getInventory
/// - GET    /store/order/{orderId} - getOrderById
/// - POST   /store/order - placeOrder
///
/// Ancillary:
/// - GET /health, GET / - Health check
/// - GET /docs/store.md - Markdown docs
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .route("/docs/store.md", get(handlers::store_docs))
        .merge(store_router(state.base_path()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Store routes, nested under `base_path` unless it is the root
fn store_router(base_path: &str) -> Router<AppState> {
    let routes = Router::new()
        .route(
            StoreOperation::GetInventory.path(),
            get(handlers::get_inventory),
        )
        .route(StoreOperation::PlaceOrder.path(), post(handlers::place_order))
        .route(
            StoreOperation::GetOrderById.path(),
            get(handlers::get_order_by_id).delete(handlers::delete_order),
        );

    if base_path.is_empty() {
        routes
    } else {
        Router::new().nest(base_path, routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use async_trait::async_trait;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use store_core::{
        Inventory, Order, OrderStatus, StoreApiDelegate, StoreError, StoreResponse, StoreResult,
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Delete(String),
        Inventory,
        GetById(i64),
        Place(Order),
    }

    /// Records every forwarded call and answers with canned envelopes
    #[derive(Default)]
    struct RecordingDelegate {
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingDelegate {
        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StoreApiDelegate for RecordingDelegate {
        async fn delete_order(&self, order_id: String) -> StoreResult<StoreResponse<()>> {
            let missing = order_id == "missing";
            self.record(Call::Delete(order_id));
            if missing {
                return Ok(StoreResponse::with_status(404, None));
            }
            Ok(StoreResponse::no_content())
        }

        async fn get_inventory(&self) -> StoreResult<StoreResponse<Inventory>> {
            self.record(Call::Inventory);
            let mut inventory = Inventory::new();
            inventory.insert("available".into(), 7);
            inventory.insert("sold".into(), 2);
            Ok(StoreResponse::ok(inventory))
        }

        async fn get_order_by_id(&self, order_id: i64) -> StoreResult<StoreResponse<Order>> {
            self.record(Call::GetById(order_id));
            if order_id == 5 {
                return Err(StoreError::OrderNotFound {
                    order_id: order_id.to_string(),
                });
            }
            Ok(StoreResponse::ok(
                Order::for_pet(10)
                    .with_id(order_id)
                    .with_status(OrderStatus::Placed),
            ))
        }

        async fn place_order(&self, order: Order) -> StoreResult<StoreResponse<Order>> {
            self.record(Call::Place(order.clone()));
            Ok(StoreResponse::ok(order.with_id(99)))
        }
    }

    fn recording_server() -> (TestServer, Arc<RecordingDelegate>) {
        let recorder = Arc::new(RecordingDelegate::default());
        let state = AppState::with_delegate(AppConfig::default(), recorder.clone());
        let server = TestServer::new(create_router(state)).unwrap();
        (server, recorder)
    }

    fn noop_server() -> TestServer {
        TestServer::new(create_router(AppState::new(AppConfig::default()))).unwrap()
    }

    #[tokio::test]
    async fn test_delete_order_forwards_raw_id() {
        let (server, recorder) = recording_server();

        let response = server.delete("/v2/store/order/abc-123").await;
        response.assert_status(StatusCode::NO_CONTENT);

        let response = server.delete("/v2/store/order/missing").await;
        response.assert_status(StatusCode::NOT_FOUND);

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Delete("abc-123".into()),
                Call::Delete("missing".into())
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_order_rejects_blank_id() {
        let (server, recorder) = recording_server();

        let response = server.delete("/v2/store/order/%20").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_inventory_returns_delegate_map() {
        let (server, recorder) = recording_server();

        let response = server.get("/v2/store/inventory").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "available": 7, "sold": 2 }));
        assert_eq!(recorder.calls(), vec![Call::Inventory]);
    }

    #[tokio::test]
    async fn test_get_order_by_id_within_bound_reaches_delegate() {
        let (server, recorder) = recording_server();

        let response = server.get("/v2/store/order/3").await;
        response.assert_status_ok();
        let order = response.json::<Order>();
        assert_eq!(order.id, Some(3));
        assert_eq!(order.status, Some(OrderStatus::Placed));
        assert_eq!(recorder.calls(), vec![Call::GetById(3)]);
    }

    #[tokio::test]
    async fn test_get_order_by_id_rejects_before_delegate() {
        let (server, recorder) = recording_server();

        for path in [
            "/v2/store/order/0",
            "/v2/store/order/6",
            "/v2/store/order/11",
            "/v2/store/order/abc",
            "/v2/store/order/1.5",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body = response.json::<serde_json::Value>();
            assert_eq!(body["code"], 400);
        }

        assert!(recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_order_by_id_delegate_error() {
        let (server, recorder) = recording_server();

        let response = server.get("/v2/store/order/5").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"], "Order not found: 5");
        assert_eq!(recorder.calls(), vec![Call::GetById(5)]);
    }

    #[tokio::test]
    async fn test_get_order_by_id_as_xml() {
        let (server, recorder) = recording_server();

        let response = server
            .get("/v2/store/order/3")
            .add_header(header::ACCEPT, HeaderValue::from_static("application/xml"))
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml"
        );
        let xml = response.text();
        assert!(xml.starts_with("<Order>"));
        assert!(xml.contains("<id>3</id>"));
        assert!(xml.contains("<petId>10</petId>"));
        assert_eq!(recorder.calls(), vec![Call::GetById(3)]);
    }

    #[tokio::test]
    async fn test_unacceptable_media_type_rejected_before_delegate() {
        let (server, recorder) = recording_server();

        let response = server
            .get("/v2/store/order/3")
            .add_header(header::ACCEPT, HeaderValue::from_static("text/plain"))
            .await;
        response.assert_status(StatusCode::NOT_ACCEPTABLE);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["code"], 406);
        assert_eq!(body["details"], "getOrderById");

        // Inventory is JSON only.
        server
            .get("/v2/store/inventory")
            .add_header(header::ACCEPT, HeaderValue::from_static("application/xml"))
            .await
            .assert_status(StatusCode::NOT_ACCEPTABLE);

        assert!(recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_prefers_accepted_format() {
        let (server, recorder) = recording_server();
        let order = Order::for_pet(4).with_quantity(1);

        let response = server
            .post("/v2/store/order")
            .add_header(
                header::ACCEPT,
                HeaderValue::from_static("application/json;q=0.5, application/xml"),
            )
            .json(&order)
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml"
        );
        assert!(response.text().contains("<id>99</id>"));

        let response = server
            .post("/v2/store/order")
            .add_header(header::ACCEPT, HeaderValue::from_static("*/*"))
            .json(&order)
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Order>(), order.clone().with_id(99));

        assert_eq!(
            recorder.calls(),
            vec![Call::Place(order.clone()), Call::Place(order)]
        );
    }

    #[tokio::test]
    async fn test_place_order_forwards_exact_payload() {
        let (server, recorder) = recording_server();

        let ship_date = Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap();
        let order = Order::for_pet(42)
            .with_quantity(2)
            .with_ship_date(ship_date)
            .with_status(OrderStatus::Approved)
            .completed();

        let response = server.post("/v2/store/order").json(&order).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Order>(), order.clone().with_id(99));
        assert_eq!(recorder.calls(), vec![Call::Place(order)]);
    }

    #[tokio::test]
    async fn test_place_order_rejects_invalid_body() {
        let (server, recorder) = recording_server();

        let response = server
            .post("/v2/store/order")
            .json(&json!({ "status": "lost" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server.post("/v2/store/order").json(&json!("nope")).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server.post("/v2/store/order").text("petId=1").await;
        response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);

        assert!(recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_noop_delegate_returns_empty_success() {
        let server = noop_server();

        let response = server.delete("/v2/store/order/1").await;
        response.assert_status_ok();
        assert!(response.text().is_empty());

        let response = server.get("/v2/store/inventory").await;
        response.assert_status_ok();
        assert!(response.text().is_empty());

        let response = server.get("/v2/store/order/2").await;
        response.assert_status_ok();
        assert!(response.text().is_empty());

        let response = server.post("/v2/store/order").json(&json!({})).await;
        response.assert_status_ok();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_custom_base_path() {
        let config = AppConfig {
            base_path: "/api".to_string(),
            ..AppConfig::default()
        };
        let server = TestServer::new(create_router(AppState::new(config))).unwrap();

        server.get("/api/store/inventory").await.assert_status_ok();
        server
            .get("/v2/store/inventory")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_base_path() {
        let config = AppConfig {
            base_path: String::new(),
            ..AppConfig::default()
        };
        let server = TestServer::new(create_router(AppState::new(config))).unwrap();

        server.get("/store/inventory").await.assert_status_ok();
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_health_and_docs() {
        let server = noop_server();

        let response = server.get("/health").await;
        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["delegate"], "noop");

        let response = server.get("/docs/store.md").await;
        response.assert_status_ok();
        let doc = response.text();
        assert!(doc.contains("All URIs are relative to `/v2`"));
        assert!(doc.contains("## placeOrder"));
    }

    #[tokio::test]
    async fn test_unknown_method_is_rejected() {
        let server = noop_server();

        server
            .put("/v2/store/order/1")
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
