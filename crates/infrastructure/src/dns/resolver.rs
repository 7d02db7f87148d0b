mod upstream;

pub use upstream::UpstreamPtrResolver;

use crate::system::SystemHostnameResolver;
use async_trait::async_trait;
use dns_reverse_application::ports::ReverseResolver;
use dns_reverse_domain::{DomainError, LookupTimeouts, ResolverConfig};
use std::net::IpAddr;

/// Resolver selected for a run, one variant per [`ResolverConfig`].
pub enum Resolver {
    System(SystemHostnameResolver),
    Upstream(UpstreamPtrResolver),
}

impl Resolver {
    pub fn from_config(config: &ResolverConfig, timeouts: LookupTimeouts) -> Self {
        match config.server_addr() {
            Some(addr) => Resolver::Upstream(UpstreamPtrResolver::new(addr, timeouts.connect)),
            None => Resolver::System(SystemHostnameResolver::new(timeouts.connect)),
        }
    }
}

#[async_trait]
impl ReverseResolver for Resolver {
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        match self {
            Resolver::System(r) => r.reverse_lookup(ip).await,
            Resolver::Upstream(r) => r.reverse_lookup(ip).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Resolver::System(r) => r.describe(),
            Resolver::Upstream(r) => r.describe(),
        }
    }
}
