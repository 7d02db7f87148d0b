use dns_reverse_application::use_cases::{BatchLookupUseCase, ReverseLookupUseCase};
use dns_reverse_domain::{LookupTimeouts, ResolverConfig};
use dns_reverse_infrastructure::dns::Resolver;
use std::sync::Arc;
use tracing::info;

/// Resolver and lookup use cases for one invocation.
pub struct DnsServices {
    pub resolver: Arc<Resolver>,
    pub timeouts: LookupTimeouts,
}

impl DnsServices {
    pub fn new(config: &ResolverConfig, timeouts: LookupTimeouts) -> Self {
        match config {
            ResolverConfig::System => println!("Usando DNS server predefinito del sistema"),
            ResolverConfig::Custom(ip) => println!("Usando DNS server: {}", ip),
        }

        info!(
            resolver = %config,
            connect_timeout_secs = timeouts.connect.as_secs(),
            lookup_timeout_secs = timeouts.lookup.as_secs(),
            "Resolver configured"
        );

        Self {
            resolver: Arc::new(Resolver::from_config(config, timeouts)),
            timeouts,
        }
    }

    pub fn reverse_lookup(&self) -> ReverseLookupUseCase {
        ReverseLookupUseCase::new(self.resolver.clone(), self.timeouts)
    }

    pub fn batch_lookup(&self) -> BatchLookupUseCase {
        BatchLookupUseCase::new(self.reverse_lookup())
    }
}
