//! 产品仓储抽象

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::model::Product;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage error: {0}")]
    Storage(String),
}

/// 产品仓储
///
/// 所有方法只在基础设施故障时返回错误。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入或覆盖；`code` 为空时分配新编号，返回落库后的记录
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// 编号不存在时什么也不做
    async fn delete_by_id(&self, code: i64) -> Result<(), RepositoryError>;

    /// 存储后端名称，用于健康检查
    fn backend(&self) -> &'static str;
}
