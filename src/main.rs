use catalog_api::{
    create_routes,
    infrastructure::{DatabaseManager, Logger},
    AppState, Config,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    // 初始化日志
    Logger::init(&config.logging);

    info!("启动产品目录服务...");

    // 初始化数据库
    let db = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;

    let app = create_routes(AppState::new(db.get_pool().clone()));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 服务运行在 http://{}", addr);
    info!("📊 可用接口:");
    info!("   GET    /health           - 健康检查");
    info!("   GET    /products         - 产品列表");
    info!("   POST   /products         - 创建产品");
    info!("   GET    /products/:id     - 获取产品");
    info!("   DELETE /products/:id     - 删除产品");
    info!("   GET    /categories       - 分类列表");
    info!("   POST   /categories       - 创建分类");
    info!("   GET    /categories/:id   - 获取分类");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("服务已停止");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
