use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS server address: {0}")]
    InvalidDnsServer(String),

    #[error("Query timeout after {timeout:?}")]
    QueryTimeout { timeout: Duration },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("DNS server answered {rcode}")]
    ServerFailure { rcode: String },

    #[error("Reverse lookup failed: {0}")]
    LookupFailed(String),

    #[error("Failed to read input: {0}")]
    InputRead(String),

    #[error("Failed to write output: {0}")]
    OutputWrite(String),
}

