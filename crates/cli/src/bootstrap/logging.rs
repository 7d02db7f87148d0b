use dns_reverse_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout is reserved for lookup results.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(LoggingConfig::default().level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
