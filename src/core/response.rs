//! 核心响应处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 业务拒绝原因，携带缺失字段的线上名称
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingField(&'static str),
}

impl Rejection {
    pub fn reason_code(&self) -> &'static str {
        match self {
            Rejection::MissingField(field) => field,
        }
    }
}

/// 服务层响应
///
/// 每个请求由服务层新建一次，处理器原样转发给传输层。
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse<T> {
    /// 201 + JSON
    Created(T),
    /// 200 + JSON
    Ok(T),
    /// 200 + 纯文本
    Message(String),
    /// 400，空响应体
    Rejected(Rejection),
}

impl<T> ServiceResponse<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceResponse::Created(_) => StatusCode::CREATED,
            ServiceResponse::Ok(_) | ServiceResponse::Message(_) => StatusCode::OK,
            ServiceResponse::Rejected(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ServiceResponse::Created(body) | ServiceResponse::Ok(body) => {
                (status, Json(body)).into_response()
            }
            ServiceResponse::Message(text) => (status, text).into_response(),
            ServiceResponse::Rejected(_) => status.into_response(),
        }
    }
}
