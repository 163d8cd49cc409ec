//! chirpy 服务主入口

use chirpy::{config::AppConfig, db, handlers::health, middleware::AppState, routes, telemetry};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match std::env::args().nth(1).as_deref() {
        Some("--version") => {
            println!("chirpy {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some("--help") => {
            print_help();
            return Ok(());
        }
        Some(other) => {
            eprintln!("Unknown argument: {}", other);
            print_help();
            std::process::exit(1);
        }
        None => {}
    }

    // .env 级联仅用于开发环境；生产环境直接注入环境变量
    if let Ok(env_name) = std::env::var("CHIRP_ENV") {
        dotenv::from_filename(format!(".env.{}", env_name)).ok();
    } else {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env.development").ok();
        dotenv::dotenv().ok();
    }

    health::set_start_time();

    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    telemetry::init_telemetry(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "chirpy starting...");

    let db_pool = db::connect(&config.database).await?;
    db::migrate(&db_pool).await?;
    db::publish_pool_gauges(&db_pool);

    let shutdown_timeout = config.server.graceful_shutdown_timeout_secs;
    let addr = config.server.addr.clone();

    let state = AppState::build(config, db_pool)
        .map_err(|e| anyhow::anyhow!("Failed to assemble application state: {}", e))?;
    let app = routes::create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
///
/// 信号到达后立即开始优雅关闭；另起一个看门狗任务，
/// 在排空超时后强制退出进程。
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received, starting graceful shutdown"),
        _ = terminate => tracing::info!("Terminate signal received, starting graceful shutdown"),
    }

    tokio::spawn(async move {
        tokio::time::sleep(tokio::time::Duration::from_secs(timeout_secs)).await;
        tracing::warn!("Graceful shutdown timed out, forcing exit");
        std::process::exit(1);
    });
}

fn print_help() {
    println!("chirpy {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: chirpy [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --version     Print version information and exit");
    println!("  --help        Print this help message and exit");
    println!();
    println!("Environment:");
    println!("  All configuration is read from CHIRP_* environment variables");
    println!("  See .env.example for the available options");
}
