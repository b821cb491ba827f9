//! 产品业务服务

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{
    model::{Product, SaveMode},
    repository::ProductRepository,
};
use crate::core::{error::CoreError, response::ServiceResponse};

pub const REMOVED_MESSAGE: &str = "Produto removido com sucesso!";

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    /// 按仓储返回的顺序列出全部产品
    pub async fn list_all(&self) -> Result<Vec<Product>, CoreError> {
        let products = self.repository.find_all().await?;
        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    /// 校验后保存
    ///
    /// 校验失败时不会调用仓储。更新模式不检查编号是否已存在，直接 upsert。
    pub async fn create_or_update(
        &self,
        product: Product,
        mode: SaveMode,
    ) -> Result<ServiceResponse<Product>, CoreError> {
        if let Err(rejection) = product.check_required() {
            warn!(%mode, field = rejection.reason_code(), "product rejected");
            return Ok(ServiceResponse::Rejected(rejection));
        }

        let saved = self.repository.save(product).await?;
        info!(%mode, code = ?saved.code, "product saved");

        Ok(match mode {
            SaveMode::Create => ServiceResponse::Created(saved),
            SaveMode::Update => ServiceResponse::Ok(saved),
        })
    }

    pub async fn remove(&self, code: i64) -> Result<ServiceResponse<Product>, CoreError> {
        self.repository.delete_by_id(code).await?;
        info!(code, "product removed");
        Ok(ServiceResponse::Message(REMOVED_MESSAGE.to_string()))
    }
}
