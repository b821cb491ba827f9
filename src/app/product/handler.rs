//! 产品处理器

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};

use super::{
    model::{Product, SaveMode},
    service::ProductService,
};
use crate::core::{error::CoreError, response::ServiceResponse};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_all().await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<ServiceResponse<Product>, CoreError> {
    state
        .product_service
        .create_or_update(product, SaveMode::Create)
        .await
}

pub async fn update_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<ServiceResponse<Product>, CoreError> {
    state
        .product_service
        .create_or_update(product, SaveMode::Update)
        .await
}

pub async fn remove_product(
    State(state): State<AppState>,
    Path(code): Path<i64>,
) -> Result<ServiceResponse<Product>, CoreError> {
    state.product_service.remove(code).await
}

/// 产品路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/listar", get(list_products))
        .route("/cadastrar", post(create_product))
        .route("/alterar", post(update_product).put(update_product))
        .route("/remover/:codigo", delete(remove_product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::product::{
        repository::{MockProductRepository, RepositoryError},
        service::REMOVED_MESSAGE,
    };
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::Response,
    };
    use mockall::predicate::eq;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(repo: MockProductRepository) -> Router {
        routes().with_state(AppState {
            product_service: ProductService::new(Arc::new(repo)),
        })
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn list_returns_json_array_in_order() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                Product::new("Celular", "Marca X").with_code(1),
                Product::new("Televisão", "Marca Y").with_code(2),
            ])
        });

        let response = app(repo)
            .oneshot(Request::builder().uri("/listar").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body[0]["nome"], "Celular");
        assert_eq!(body[1]["nome"], "Televisão");
    }

    #[tokio::test]
    async fn create_returns_201_with_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|p| Ok(p.with_code(7)));

        let response = app(repo)
            .oneshot(json_request(
                "POST",
                "/cadastrar",
                serde_json::json!({"nome": "Celular", "marca": "Marca X"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["nome"], "Celular");
        assert_eq!(body["codigo"], 7);
    }

    #[tokio::test]
    async fn create_with_blank_name_is_400_with_empty_body() {
        let mut repo = MockProductRepository::new();
        repo.expect_save().never();

        let response = app(repo)
            .oneshot(json_request(
                "POST",
                "/cadastrar",
                serde_json::json!({"nome": "", "marca": "Marca X"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn update_accepts_put_and_post() {
        for method in ["PUT", "POST"] {
            let mut repo = MockProductRepository::new();
            repo.expect_save().times(1).returning(|p| Ok(p));

            let response = app(repo)
                .oneshot(json_request(
                    method,
                    "/alterar",
                    serde_json::json!({"codigo": 1, "nome": "Notebook PRO", "marca": "Marca"}),
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{method} /alterar");
            let body: serde_json::Value =
                serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert_eq!(body["nome"], "Notebook PRO");
        }
    }

    #[tokio::test]
    async fn remove_returns_confirmation_text() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete_by_id()
            .with(eq(10))
            .times(1)
            .returning(|_| Ok(()));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/remover/10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, REMOVED_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn remove_with_non_numeric_code_never_reaches_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete_by_id().never();

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/remover/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn repository_failure_is_500() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all()
            .returning(|| Err(RepositoryError::Storage("offline".to_string())));

        let response = app(repo)
            .oneshot(Request::builder().uri("/listar").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
