//! # crud-produtos
//!
//! 产品增删改查后端：
//! - `app`：产品模型、仓储抽象、业务服务与 HTTP 处理器
//! - `core`：错误、响应与中间件
//! - `infrastructure`：PostgreSQL / 内存仓储与日志
//! - `config`：TOML 配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::build_router;
pub use app::product::{Product, ProductRepository, ProductService, SaveMode};
