use anyhow::anyhow;
use dns_reverse_domain::ResolverConfig;
use tracing::debug;

pub fn resolver_config(dns_server: Option<&str>) -> anyhow::Result<ResolverConfig> {
    ResolverConfig::from_server_arg(dns_server).map_err(|e| {
        debug!(error = %e, "Rejected DNS server argument");
        anyhow!(
            "Errore: '{}' non è un indirizzo IP valido per il DNS server",
            dns_server.unwrap_or_default()
        )
    })
}
