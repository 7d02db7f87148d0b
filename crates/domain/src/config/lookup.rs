use std::time::Duration;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Deadlines applied to a single reverse lookup.
///
/// `connect` bounds setting up the socket towards a pinned DNS server,
/// `lookup` bounds the whole query including the connect step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTimeouts {
    pub connect: Duration,
    pub lookup: Duration,
}

impl LookupTimeouts {
    pub fn new(connect: Duration, lookup: Duration) -> Self {
        Self { connect, lookup }
    }
}

impl Default for LookupTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            lookup: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}
