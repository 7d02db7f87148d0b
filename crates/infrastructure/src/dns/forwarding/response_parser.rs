use dns_reverse_domain::DomainError;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::RData;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct PtrResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// PTR targets in answer order.
    pub hostnames: Vec<String>,
}

impl PtrResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// NOERROR and NXDOMAIN both mean the server answered; anything else is a failure.
    pub fn into_hostnames(self) -> Result<Vec<String>, DomainError> {
        match self.rcode {
            ResponseCode::NoError => Ok(self.hostnames),
            ResponseCode::NXDomain => Ok(Vec::new()),
            rcode => Err(DomainError::ServerFailure {
                rcode: ResponseParser::rcode_to_status(rcode).to_string(),
            }),
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<PtrResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Received a query instead of a response".to_string(),
            ));
        }

        let rcode = message.response_code();
        let truncated = message.truncated();

        let hostnames: Vec<String> = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::PTR(ptr) => Some(ptr.to_utf8()),
                _ => None,
            })
            .collect();

        if truncated {
            warn!(
                answers = hostnames.len(),
                "Truncated PTR response, using the answers received over UDP"
            );
        }

        debug!(
            id = message.id(),
            rcode = ?rcode,
            hostnames = hostnames.len(),
            truncated = truncated,
            "PTR response parsed"
        );

        Ok(PtrResponse {
            id: message.id(),
            rcode,
            truncated,
            hostnames,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
