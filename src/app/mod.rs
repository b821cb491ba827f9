//! 应用层

pub mod product;

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use product::{AppState, ProductService};

/// 组装完整路由：产品接口、健康检查以及通用中间件
///
/// 超过 `timeout` 的请求返回 408。
pub fn build_router(product_service: ProductService, timeout: Duration) -> Router {
    Router::new()
        .merge(product::handler::routes())
        .route("/health", get(health_check))
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { product_service })
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "storage": state.product_service.backend(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
