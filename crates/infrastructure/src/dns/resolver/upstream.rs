use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use dns_reverse_application::ports::ReverseResolver;
use dns_reverse_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Sends PTR queries straight to one DNS server, bypassing the system resolver.
pub struct UpstreamPtrResolver {
    transport: UdpTransport,
}

impl UpstreamPtrResolver {
    pub fn new(server_addr: SocketAddr, connect_timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server_addr, connect_timeout),
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.transport.server_addr()
    }
}

#[async_trait]
impl ReverseResolver for UpstreamPtrResolver {
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        let (query_id, query) = MessageBuilder::build_ptr_query(&ip)?;

        debug!(
            ip = %ip,
            reverse_domain = %MessageBuilder::reverse_domain(&ip),
            server = %self.server_addr(),
            "Performing PTR lookup"
        );

        let response_bytes = self.transport.exchange(query_id, &query).await?;
        let response = ResponseParser::parse(&response_bytes)?;

        if response.is_nxdomain() {
            debug!(ip = %ip, "PTR lookup returned NXDOMAIN");
        }

        response.into_hostnames()
    }

    fn describe(&self) -> String {
        format!("udp://{}", self.server_addr())
    }
}
