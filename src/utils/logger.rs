use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "lsm_verse=warn";

/// RUST_LOG 優先，其次是設定檔中的 level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref(), config)
}

pub fn filter_from(rust_log: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid {}: {}", EnvFilter::DEFAULT_ENV, e),
        }
    }

    let directive = config.level.as_deref().unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

// stdout 只留給回應內容，日誌一律寫到 stderr
pub fn init_cli_logger(config: &LoggingConfig) {
    let filter = build_filter(config);

    match config.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init(),
    }
}
