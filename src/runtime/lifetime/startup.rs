use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;
use crate::system::{RunMode, init_logging, install_panic_hook};

/// Everything a mode needs once startup is done
pub struct StartupContext {
    pub config: AppConfig,
    pub mode: RunMode,
    /// Keeps the non-blocking log writer flushing until exit
    _log_guard: WorkerGuard,
}

/// 加载配置、安装 panic hook 并初始化日志
pub fn prepare_startup(config_path: Option<&Path>, mode: RunMode) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();

    install_panic_hook(mode);

    let config = AppConfig::load(config_path).context("Failed to load configuration")?;
    let guard = init_logging(&config.logging, mode).context("Failed to initialize logging")?;

    debug!("Configuration: {:?}", config);
    info!(
        "recmark v{} started in {:?} mode ({} ms)",
        env!("CARGO_PKG_VERSION"),
        mode,
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        config,
        mode,
        _log_guard: guard,
    })
}
