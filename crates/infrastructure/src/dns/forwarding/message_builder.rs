//! PTR query construction
//!
//! Builds reverse-lookup queries in wire format using `hickory-proto`.

use dns_reverse_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::IpAddr;
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Reverse-mapping name for `ip`, without the trailing root label.
    ///
    /// IPv4 uses `in-addr.arpa` octets, IPv6 uses `ip6.arpa` nibbles,
    /// both least significant first.
    pub fn reverse_domain(ip: &IpAddr) -> String {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                format!(
                    "{}.{}.{}.{}.in-addr.arpa",
                    octets[3], octets[2], octets[1], octets[0]
                )
            }
            IpAddr::V6(ipv6) => {
                let mut nibbles = Vec::with_capacity(32);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.ip6.arpa", nibbles.join("."))
            }
        }
    }

    /// Build a recursive PTR query for `ip` and return its ID with the wire bytes.
    pub fn build_ptr_query(ip: &IpAddr) -> Result<(u16, Vec<u8>), DomainError> {
        let domain = Self::reverse_domain(ip);
        let name = Name::from_str(&format!("{}.", domain)).map_err(|e| {
            DomainError::InvalidIpAddress(format!("{} ({}: {})", ip, domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::PTR);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
