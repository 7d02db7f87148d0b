mod logging;
mod resolver;

pub use logging::init_logging;
pub use resolver::resolver_config;
