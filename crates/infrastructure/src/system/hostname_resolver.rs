use super::hosts_file::{absolute_name, HostsFile, HOSTS_PATH};
use super::resolv_conf::{ResolvConf, RESOLV_CONF_PATH};
use crate::dns::UpstreamPtrResolver;
use async_trait::async_trait;
use dns_lookup::{LookupError, LookupErrorKind};
use dns_reverse_application::ports::ReverseResolver;
use dns_reverse_domain::{DomainError, DNS_PORT};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

#[cfg(unix)]
const NAMEINFO_FLAGS: i32 = libc::NI_NAMEREQD | libc::NI_NUMERICSERV;
// NI_NAMEREQD | NI_NUMERICSERV from ws2def.h
#[cfg(not(unix))]
const NAMEINFO_FLAGS: i32 = 0x04 | 0x08;

/// Reverse lookups the way the host resolves names.
///
/// The hosts file is consulted first. Otherwise each nameserver from
/// resolv.conf is asked in turn, each bounded by its own attempt timeout.
/// Hosts without a resolv.conf fall back to `getnameinfo`.
pub struct SystemHostnameResolver {
    hosts: HostsFile,
    nameservers: Vec<UpstreamPtrResolver>,
    attempt_timeout: Duration,
}

impl SystemHostnameResolver {
    /// Reads the host's hosts file and resolv.conf.
    pub fn new(connect_timeout: Duration) -> Self {
        let hosts = HostsFile::load(Path::new(HOSTS_PATH));
        let conf = ResolvConf::load(Path::new(RESOLV_CONF_PATH));
        let nameservers = conf
            .nameservers
            .iter()
            .map(|ip| SocketAddr::new(*ip, DNS_PORT))
            .collect();

        Self::with_nameservers(hosts, nameservers, conf.attempt_timeout, connect_timeout)
    }

    pub fn with_nameservers(
        hosts: HostsFile,
        nameservers: Vec<SocketAddr>,
        attempt_timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        let nameservers = nameservers
            .into_iter()
            .map(|addr| UpstreamPtrResolver::new(addr, connect_timeout))
            .collect();

        Self {
            hosts,
            nameservers,
            attempt_timeout,
        }
    }

    async fn query_nameservers(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        let mut last_error = None;

        for nameserver in &self.nameservers {
            let attempt =
                tokio::time::timeout(self.attempt_timeout, nameserver.reverse_lookup(ip)).await;

            let error = match attempt {
                Ok(Ok(names)) => return Ok(names),
                Ok(Err(e)) => e,
                Err(_) => DomainError::QueryTimeout {
                    timeout: self.attempt_timeout,
                },
            };

            debug!(
                ip = %ip,
                nameserver = %nameserver.server_addr(),
                error = %error,
                "Nameserver failed, trying next"
            );
            last_error = Some(error);
        }

        Err(last_error
            .unwrap_or_else(|| DomainError::LookupFailed("no nameserver configured".to_string())))
    }
}

#[async_trait]
impl ReverseResolver for SystemHostnameResolver {
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        let names = self.hosts.names_for(ip);
        if !names.is_empty() {
            debug!(ip = %ip, names = names.len(), "Answered from hosts file");
            return Ok(names);
        }

        if self.nameservers.is_empty() {
            return lookup_with_getnameinfo(ip).await;
        }

        self.query_nameservers(ip).await
    }

    fn describe(&self) -> String {
        if self.nameservers.is_empty() {
            return "system (getnameinfo)".to_string();
        }

        let servers: Vec<String> = self
            .nameservers
            .iter()
            .map(|n| n.server_addr().to_string())
            .collect();
        format!("system ({})", servers.join(", "))
    }
}

async fn lookup_with_getnameinfo(ip: IpAddr) -> Result<Vec<String>, DomainError> {
    debug!(ip = %ip, "Performing getnameinfo reverse lookup");

    let result = tokio::task::spawn_blocking(move || {
        dns_lookup::getnameinfo(&SocketAddr::new(ip, 0), NAMEINFO_FLAGS)
    })
    .await
    .map_err(|e| DomainError::LookupFailed(format!("lookup task failed: {}", e)))?;

    match result {
        Ok((name, _service)) => Ok(names_from_nameinfo(&name)),
        Err(e) if is_not_found(&e) => {
            debug!(ip = %ip, "No PTR record found");
            Ok(Vec::new())
        }
        Err(e) => Err(DomainError::LookupFailed(io::Error::from(e).to_string())),
    }
}

fn names_from_nameinfo(name: &str) -> Vec<String> {
    let name = name.trim();
    if name.is_empty() {
        return Vec::new();
    }
    vec![absolute_name(name)]
}

fn is_not_found(err: &LookupError) -> bool {
    matches!(err.kind(), LookupErrorKind::NoName | LookupErrorKind::NoData)
}
