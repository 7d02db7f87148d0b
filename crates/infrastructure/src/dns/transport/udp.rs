//! UDP transport towards a single pinned DNS server (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is, without framing. Truncated responses are not
//! retried over TCP.

use dns_reverse_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
    connect_timeout: Duration,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, connect_timeout: Duration) -> Self {
        Self {
            server_addr,
            connect_timeout,
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Sends `message_bytes` and waits for the response carrying `query_id`.
    ///
    /// Datagrams with another ID are dropped. There is no receive deadline
    /// here; callers bound the exchange as a whole.
    pub async fn exchange(
        &self,
        query_id: u16,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let socket = self.connect().await?;

        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| self.transport_error(format!("send failed: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = socket
                .recv(&mut recv_buf)
                .await
                .map_err(|e| self.transport_error(format!("receive failed: {}", e)))?;

            if bytes_received < 2 {
                debug!(server = %self.server_addr, "Ignoring runt UDP datagram");
                continue;
            }

            let response_id = u16::from_be_bytes([recv_buf[0], recv_buf[1]]);
            if response_id != query_id {
                debug!(
                    server = %self.server_addr,
                    expected = query_id,
                    received = response_id,
                    "Ignoring UDP response with mismatched ID"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(recv_buf);
        }
    }

    async fn connect(&self) -> Result<UdpSocket, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.transport_error(format!("failed to bind UDP socket: {}", e)))?;

        tokio::time::timeout(self.connect_timeout, socket.connect(self.server_addr))
            .await
            .map_err(|_| {
                self.transport_error(format!(
                    "connect timed out after {}s",
                    self.connect_timeout.as_secs()
                ))
            })?
            .map_err(|e| self.transport_error(format!("connect failed: {}", e)))?;

        Ok(socket)
    }

    fn transport_error(&self, reason: String) -> DomainError {
        DomainError::Transport {
            server: self.server_addr.to_string(),
            reason,
        }
    }
}
