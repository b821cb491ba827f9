//! 数据库基础设施

use async_trait::async_trait;
use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::{debug, info};

use crate::app::product::{
    model::Product,
    repository::{ProductRepository, RepositoryError},
};
use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// 创建产品表（已存在则跳过）
    pub async fn migrate(&self) -> Result<(), Error> {
        info!("Creating database tables...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS produtos (
                codigo BIGSERIAL PRIMARY KEY,
                nome VARCHAR(255) NOT NULL,
                marca VARCHAR(255) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Database tables ready");
        Ok(())
    }
}

/// PostgreSQL 产品仓储
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let Some(code) = product.code else {
            let saved = sqlx::query_as::<_, Product>(
                "INSERT INTO produtos (nome, marca) VALUES ($1, $2) RETURNING codigo, nome, marca",
            )
            .bind(&product.name)
            .bind(&product.brand)
            .fetch_one(&self.pool)
            .await?;
            return Ok(saved);
        };

        // 显式编号：锁表等待进行中的插入提交，upsert 后只把序列向前推进
        let mut tx = self.pool.begin().await?;

        sqlx::query("LOCK TABLE produtos IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let saved = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO produtos (codigo, nome, marca) VALUES ($1, $2, $3)
            ON CONFLICT (codigo) DO UPDATE SET nome = EXCLUDED.nome, marca = EXCLUDED.marca
            RETURNING codigo, nome, marca
            "#,
        )
        .bind(code)
        .bind(&product.name)
        .bind(&product.brand)
        .fetch_one(&mut *tx)
        .await?;

        // 小于 1 或不超过已发放编号时序列保持不变
        sqlx::query(
            r#"
            SELECT setval('produtos_codigo_seq', $1)
            FROM produtos_codigo_seq
            WHERE $1 >= 1 AND (NOT is_called OR last_value < $1)
            "#,
        )
        .bind(code)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT codigo, nome, marca FROM produtos ORDER BY codigo",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn delete_by_id(&self, code: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM produtos WHERE codigo = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        debug!(code, rows_affected = result.rows_affected(), "delete executed");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
