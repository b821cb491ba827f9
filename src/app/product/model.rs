//! 产品数据模型

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use crate::core::response::Rejection;

/// 产品记录
///
/// 线上字段名沿用既有接口：`codigo`、`nome`、`marca`。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    /// 首次持久化前为空，由仓储分配
    #[serde(rename = "codigo", default)]
    #[cfg_attr(feature = "database", sqlx(rename = "codigo"))]
    pub code: Option<i64>,

    #[serde(rename = "nome", default)]
    #[cfg_attr(feature = "database", sqlx(rename = "nome"))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(rename = "marca", default)]
    #[cfg_attr(feature = "database", sqlx(rename = "marca"))]
    #[validate(custom(function = "not_blank"))]
    pub brand: String,
}

impl Product {
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            code: None,
            name: name.into(),
            brand: brand.into(),
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// 检查必填字段，`nome` 先于 `marca`
    pub fn check_required(&self) -> Result<(), Rejection> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let fields = errors.field_errors();
        if fields.contains_key("name") {
            Err(Rejection::MissingField("nome"))
        } else {
            Err(Rejection::MissingField("marca"))
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// 保存模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

impl fmt::Display for SaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveMode::Create => write!(f, "create"),
            SaveMode::Update => write!(f, "update"),
        }
    }
}
