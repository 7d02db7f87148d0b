use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

pub const DNS_PORT: u16 = 53;

/// Which resolver a run uses. Fixed for the whole invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverConfig {
    /// The operating system's configured resolution path.
    System,
    /// A single DNS server queried directly over UDP.
    Custom(IpAddr),
}

impl ResolverConfig {
    /// Builds the configuration from the optional DNS server argument.
    ///
    /// A missing or empty argument selects the system resolver. Anything else
    /// must be an IP literal; hostnames are rejected.
    pub fn from_server_arg(server: Option<&str>) -> Result<Self, DomainError> {
        let server = match server.map(str::trim) {
            None | Some("") => return Ok(ResolverConfig::System),
            Some(server) => server,
        };

        server
            .parse::<IpAddr>()
            .map(ResolverConfig::Custom)
            .map_err(|_| DomainError::InvalidDnsServer(server.to_string()))
    }

    pub fn server_addr(&self) -> Option<SocketAddr> {
        match self {
            ResolverConfig::System => None,
            ResolverConfig::Custom(ip) => Some(SocketAddr::new(*ip, DNS_PORT)),
        }
    }
}

impl fmt::Display for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverConfig::System => write!(f, "system"),
            ResolverConfig::Custom(ip) => write!(f, "{}", ip),
        }
    }
}
