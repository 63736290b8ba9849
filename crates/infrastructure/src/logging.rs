use hostwarm_domain::LoggingConfig;
use tracing::info;

pub fn init_logging(config: &LoggingConfig) {
    let level = config.effective_level();
    let log_level = level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .init();

    info!("Logging initialized at level: {}", level);
}
