//! 内存仓储

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::app::product::{
    model::Product,
    repository::{ProductRepository, RepositoryError},
};

#[derive(Debug)]
struct MemoryState {
    products: BTreeMap<i64, Product>,
    /// 下一个待分配编号，可超出 i64 一位
    next_code: i128,
}

/// 进程内产品仓储，按编号升序返回
#[derive(Debug)]
pub struct InMemoryProductRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                products: BTreeMap::new(),
                next_code: 1,
            }),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn exhausted() -> RepositoryError {
    RepositoryError::Storage("product code space exhausted".to_string())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;

        let code = match product.code {
            Some(code) => {
                // 显式编号之后不再分配更小的编号
                state.next_code = state.next_code.max(i128::from(code) + 1);
                code
            }
            None => {
                let code = i64::try_from(state.next_code).map_err(|_| exhausted())?;
                state.next_code += 1;
                code
            }
        };

        let stored = Product {
            code: Some(code),
            ..product
        };
        state.products.insert(code, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.products.values().cloned().collect())
    }

    async fn delete_by_id(&self, code: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        state.products.remove(&code);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
