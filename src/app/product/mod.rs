//! 产品管理

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use handler::AppState;
pub use model::{Product, SaveMode};
pub use repository::{ProductRepository, RepositoryError};
pub use service::ProductService;
