//! 日志初始化
//! 按配置输出 JSON 或 pretty 格式

use crate::config::AppConfig;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅器
///
/// RUST_LOG 环境变量优先于配置中的 logging.level。
pub fn init_telemetry(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .pretty()
            .init();
    }

    tracing::info!(
        level = %config.logging.level,
        format = %config.logging.format,
        "Telemetry initialized"
    );
}
