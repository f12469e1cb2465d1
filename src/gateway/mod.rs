pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[cfg(feature = "swagger-ui")]
use utoipa::OpenApi;
#[cfg(feature = "swagger-ui")]
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use services::OrderService;
use state::AppState;

/// Build the complete router: order routes, validation, logging and docs.
pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    let app = Router::new()
        .route("/ping", get(handlers::ping))
        .route("/place-order", post(handlers::place_order))
        .route("/get-order", get(handlers::get_order))
        .route("/get-all-orders", get(handlers::get_all_orders))
        .route(
            "/update-address/{email}/{id}",
            put(handlers::update_address),
        )
        .route("/cancel-order/{email}/{id}", delete(handlers::cancel_order))
        // Runs after routing so path params are visible
        .route_layer(from_fn(middleware::validate_request))
        .with_state(state);

    // OpenAPI / Swagger UI (stateless, added after with_state)
    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        SwaggerUi::new("/swagger").url(openapi::OPENAPI_JSON_PATH, openapi::ApiDoc::openapi()),
    );

    app.layer(from_fn(middleware::reject_unsupported_method))
        .layer(from_fn(middleware::log_request))
}

/// Start HTTP Gateway server
///
/// Serves until Ctrl+C / SIGTERM, then drains in-flight requests.
pub async fn run_server(config: &GatewayConfig, orders: Arc<OrderService>) -> anyhow::Result<()> {
    let app = build_router(AppState::new(orders));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Failed to bind to {}: {}", addr, e);
        anyhow::anyhow!("failed to bind {addr}: {e}")
    })?;

    tracing::info!("Gateway listening on http://{}", addr);
    #[cfg(feature = "swagger-ui")]
    tracing::info!("API Docs: http://{}/swagger", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Gateway shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Order;
    use crate::store::OrderStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_app() -> (Router, Arc<OrderService>) {
        let orders = Arc::new(OrderService::new(OrderStore::new()));
        (build_router(AppState::new(Arc::clone(&orders))), orders)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn place(app: &Router, email: &str, address: &str) -> Order {
        let body = serde_json::json!({ "email": email, "address": address }).to_string();
        let response = send(app, "POST", "/place-order", Some(&body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    mod ping_endpoint {
        use super::*;

        #[tokio::test]
        async fn ping_returns_plain_text() {
            let (app, _) = create_test_app();
            let response = send(&app, "GET", "/ping", None).await;

            assert_eq!(response.status(), StatusCode::OK);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(&bytes[..], handlers::PING_REPLY.as_bytes());
        }
    }

    mod place_order_endpoint {
        use super::*;

        #[tokio::test]
        async fn place_order_returns_full_order() {
            let (app, _) = create_test_app();
            let order = place(&app, "test@example.com", "123 Test St").await;

            assert!(!order.id.is_empty());
            assert_eq!(order.email, "test@example.com");
            assert_eq!(order.address, "123 Test St");
            assert!(!order.delivery_time.is_empty());
        }

        #[tokio::test]
        async fn place_order_ignores_client_id() {
            let (app, _) = create_test_app();
            let body = r#"{"id":"mine","email":"a@b.com","address":"1 Main St","items":["Tacos"],"delivery_time":"now"}"#;
            let response = send(&app, "POST", "/place-order", Some(body)).await;
            assert_eq!(response.status(), StatusCode::OK);

            let order: Order = body_json(response).await;
            assert_ne!(order.id, "mine");
            assert_ne!(order.delivery_time, "now");
            assert_eq!(order.items, vec!["Tacos"]);
        }

        #[tokio::test]
        async fn place_order_accepts_zero_valued_fields() {
            let (app, _) = create_test_app();
            let body = r#"{"id":"","name":"","email":"test@example.com","address":"123 Test St","items":null,"delivery_time":""}"#;
            let response = send(&app, "POST", "/place-order", Some(body)).await;
            assert_eq!(response.status(), StatusCode::OK);

            let order: Order = body_json(response).await;
            assert!(!order.id.is_empty());
            assert!(!order.delivery_time.is_empty());
            assert_eq!(order.address, "123 Test St");
            assert!(order.items.is_empty());
        }

        #[tokio::test]
        async fn place_order_without_content_type() {
            let (app, orders) = create_test_app();
            let request = Request::builder()
                .method("POST")
                .uri("/place-order")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(r#"{"email":"a@b.com","address":"1 Main St"}"#))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(orders.active_count().unwrap(), 1);
        }

        #[tokio::test]
        async fn place_order_malformed_json() {
            let (app, orders) = create_test_app();
            let response = send(&app, "POST", "/place-order", Some("{oops")).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(orders.active_count().unwrap(), 0);
        }

        #[tokio::test]
        async fn place_order_missing_email() {
            let (app, _) = create_test_app();
            let response = send(&app, "POST", "/place-order", Some(r#"{"address":"x"}"#)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        #[tokio::test]
        async fn place_order_empty_body() {
            let (app, _) = create_test_app();
            let response = send(&app, "POST", "/place-order", None).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    mod get_order_endpoint {
        use super::*;

        #[tokio::test]
        async fn get_order_by_email() {
            let (app, _) = create_test_app();
            let placed = place(&app, "test@example.com", "123 Test St").await;
            place(&app, "other@example.com", "9 Elm St").await;

            let response = send(&app, "GET", "/get-order?email=test@example.com", None).await;
            assert_eq!(response.status(), StatusCode::OK);

            let orders: Vec<Order> = body_json(response).await;
            assert_eq!(orders, vec![placed]);
        }

        #[tokio::test]
        async fn get_order_unknown_email_is_404() {
            let (app, _) = create_test_app();
            let response = send(&app, "GET", "/get-order?email=nobody@example.com", None).await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            let error: serde_json::Value = body_json(response).await;
            assert_eq!(error["code"], types::error_codes::ORDER_NOT_FOUND);
            assert_eq!(error["msg"], "no orders found for the given email");
        }

        #[tokio::test]
        async fn get_order_without_email_is_400() {
            let (app, _) = create_test_app();
            let response = send(&app, "GET", "/get-order", None).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    mod get_all_orders_endpoint {
        use super::*;

        #[tokio::test]
        async fn get_all_orders_empty_is_404() {
            let (app, _) = create_test_app();
            let response = send(&app, "GET", "/get-all-orders", None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        #[tokio::test]
        async fn get_all_orders_lists_everything() {
            let (app, _) = create_test_app();
            place(&app, "a@example.com", "1 A St").await;
            place(&app, "b@example.com", "2 B St").await;

            let response = send(&app, "GET", "/get-all-orders", None).await;
            assert_eq!(response.status(), StatusCode::OK);
            let orders: Vec<Order> = body_json(response).await;
            assert_eq!(orders.len(), 2);
        }
    }

    mod update_address_endpoint {
        use super::*;

        #[tokio::test]
        async fn update_address_returns_updated_order() {
            let (app, _) = create_test_app();
            let placed = place(&app, "test@example.com", "123 Test St").await;

            let uri = format!("/update-address/test@example.com/{}", placed.id);
            let response = send(&app, "PUT", &uri, Some(r#"{"new_address":"456 New St"}"#)).await;
            assert_eq!(response.status(), StatusCode::OK);

            let updated: Order = body_json(response).await;
            assert_eq!(updated.address, "456 New St");
            assert_eq!(updated.id, placed.id);
            assert_eq!(updated.email, placed.email);
        }

        #[tokio::test]
        async fn update_address_email_mismatch_is_400() {
            let (app, orders) = create_test_app();
            let placed = place(&app, "test@example.com", "123 Test St").await;

            let uri = format!("/update-address/wrong@example.com/{}", placed.id);
            let response = send(&app, "PUT", &uri, Some(r#"{"new_address":"456 New St"}"#)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let stored = orders.get_by_email("test@example.com").unwrap();
            assert_eq!(stored[0].address, "123 Test St");
        }

        #[tokio::test]
        async fn update_address_unknown_order_is_400() {
            let (app, _) = create_test_app();
            let response = send(
                &app,
                "PUT",
                "/update-address/test@example.com/nonexistentID",
                Some(r#"{"new_address":"456 New St"}"#),
            )
            .await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        #[tokio::test]
        async fn update_address_malformed_body_is_400() {
            let (app, _) = create_test_app();
            let placed = place(&app, "test@example.com", "123 Test St").await;

            let uri = format!("/update-address/test@example.com/{}", placed.id);
            let response = send(&app, "PUT", &uri, Some(r#"{"address":"wrong field"}"#)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let error: serde_json::Value = body_json(response).await;
            assert_eq!(error["msg"], "unable to update new address");
        }
    }

    mod cancel_order_endpoint {
        use super::*;

        #[tokio::test]
        async fn cancel_order_returns_confirmation() {
            let (app, _) = create_test_app();
            let placed = place(&app, "a@b.com", "1 Main St").await;

            let uri = format!("/cancel-order/a@b.com/{}", placed.id);
            let response = send(&app, "DELETE", &uri, None).await;
            assert_eq!(response.status(), StatusCode::OK);

            let message: String = body_json(response).await;
            assert_eq!(message, format!("{} Order Cancelled Successfully", placed.id));

            let response = send(&app, "GET", "/get-order?email=a@b.com", None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        #[tokio::test]
        async fn cancel_unknown_order_is_404() {
            let (app, _) = create_test_app();
            let response = send(&app, "DELETE", "/cancel-order/a@b.com/nonexistentID", None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        #[tokio::test]
        async fn cancel_with_wrong_email_is_404() {
            let (app, orders) = create_test_app();
            let placed = place(&app, "a@b.com", "1 Main St").await;

            let uri = format!("/cancel-order/wrong@b.com/{}", placed.id);
            let response = send(&app, "DELETE", &uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(orders.active_count().unwrap(), 1);
        }
    }

    mod routing {
        use super::*;

        #[tokio::test]
        async fn unsupported_method_is_405() {
            let (app, _) = create_test_app();
            let response = send(&app, "PATCH", "/place-order", None).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        }

        #[cfg(feature = "swagger-ui")]
        #[tokio::test]
        async fn openapi_document_is_served() {
            let (app, _) = create_test_app();
            let response = send(&app, "GET", openapi::OPENAPI_JSON_PATH, None).await;
            assert_eq!(response.status(), StatusCode::OK);

            let doc: serde_json::Value = body_json(response).await;
            assert!(doc["paths"].get("/place-order").is_some());
        }
    }
}
