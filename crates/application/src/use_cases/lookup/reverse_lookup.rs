use crate::ports::ReverseResolver;
use dns_reverse_domain::{DomainError, LookupTimeouts};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

pub struct ReverseLookupUseCase {
    resolver: Arc<dyn ReverseResolver>,
    timeouts: LookupTimeouts,
}

impl ReverseLookupUseCase {
    pub fn new(resolver: Arc<dyn ReverseResolver>, timeouts: LookupTimeouts) -> Self {
        Self { resolver, timeouts }
    }

    pub fn parse_ip(raw: &str) -> Result<IpAddr, DomainError> {
        raw.trim()
            .parse::<IpAddr>()
            .map_err(|_| DomainError::InvalidIpAddress(raw.to_string()))
    }

    /// Resolves `ip` under the overall lookup deadline.
    pub async fn resolve(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        debug!(
            ip = %ip,
            resolver = %self.resolver.describe(),
            timeout = ?self.timeouts.lookup,
            "Starting reverse lookup"
        );

        match tokio::time::timeout(self.timeouts.lookup, self.resolver.reverse_lookup(ip)).await {
            Ok(Ok(names)) => {
                debug!(ip = %ip, names = names.len(), "Reverse lookup finished");
                Ok(names)
            }
            Ok(Err(e)) => {
                debug!(ip = %ip, error = %e, "Reverse lookup failed");
                Err(e)
            }
            Err(_) => {
                debug!(ip = %ip, "Reverse lookup timed out");
                Err(DomainError::QueryTimeout {
                    timeout: self.timeouts.lookup,
                })
            }
        }
    }

    pub async fn execute(&self, raw: &str) -> Result<Vec<String>, DomainError> {
        let ip = Self::parse_ip(raw)?;
        self.resolve(ip).await
    }
}
