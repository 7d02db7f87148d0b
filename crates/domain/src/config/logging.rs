#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Explicit level wins over the default; `RUST_LOG` is handled by the subscriber.
    pub fn with_override(level: Option<&str>) -> Self {
        match level {
            Some(level) if !level.trim().is_empty() => Self {
                level: level.trim().to_lowercase(),
            },
            _ => Self::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
