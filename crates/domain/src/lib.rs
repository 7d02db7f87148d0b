//! dns-reverse domain layer
pub mod batch_summary;
pub mod config;
pub mod errors;
pub mod input_line;
pub mod lookup_row;

pub use batch_summary::BatchSummary;
pub use config::{LoggingConfig, LookupTimeouts, ResolverConfig, DNS_PORT};
pub use errors::DomainError;
pub use input_line::InputLine;
pub use lookup_row::{LookupRow, LookupStatus, HOSTNAME_SEPARATOR};
