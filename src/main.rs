use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crud_produtos::{
    build_router,
    config::{load_config, StorageBackend},
    infrastructure::{logger::Logger, memory::InMemoryProductRepository},
    ProductRepository, ProductService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    Logger::init(&config.logging.level);

    match &source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let repository: Arc<dyn ProductRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryProductRepository::new()),
        #[cfg(feature = "database")]
        StorageBackend::Postgres => {
            use crud_produtos::infrastructure::database::{DatabaseManager, PgProductRepository};

            info!(
                "Connecting to database: {}",
                config.database.url.replace(":password@", ":***@")
            );
            let db = DatabaseManager::new(&config.database)
                .await
                .context("failed to connect to database")?;
            db.migrate().await.context("failed to create tables")?;
            Arc::new(PgProductRepository::new(db.get_pool().clone()))
        }
        #[cfg(not(feature = "database"))]
        StorageBackend::Postgres => {
            anyhow::bail!("postgres backend requires the `database` feature")
        }
    };

    let app = build_router(ProductService::new(repository), config.server.timeout());

    let listener = TcpListener::bind(config.server.address()?)
        .await
        .context("failed to bind listener")?;
    let addr = listener.local_addr()?;

    info!("🚀 产品服务运行在 http://{} (storage: {:?})", addr, config.storage.backend);
    info!("📖 API 端点:");
    info!("   GET    /listar            - 列出全部产品");
    info!("   POST   /cadastrar         - 新增产品");
    info!("   PUT    /alterar           - 修改产品");
    info!("   DELETE /remover/:codigo   - 删除产品");
    info!("   GET    /health            - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
