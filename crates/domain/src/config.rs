mod logging;
mod lookup;
mod resolver;

pub use logging::LoggingConfig;
pub use lookup::{LookupTimeouts, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_LOOKUP_TIMEOUT_SECS};
pub use resolver::{ResolverConfig, DNS_PORT};
