//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::app::product::repository::RepositoryError;

/// 核心错误类型
///
/// 校验失败不走这里，见 [`crate::core::response::ServiceResponse::Rejected`]。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("repository failure: {0}")]
    Repository(#[from] RepositoryError),
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match &self {
            CoreError::Repository(e) => {
                error!(error = %e, "repository call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "Erro interno ao acessar os produtos".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}
