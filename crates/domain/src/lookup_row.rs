use crate::DomainError;
use std::fmt;

/// Separator used when several hostnames share one output field.
pub const HOSTNAME_SEPARATOR: &str = "; ";

/// Outcome of processing one input address.
///
/// `NoHostname` and `Failed` both count as errors but are reported with
/// different labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Ok,
    NoHostname,
    InvalidIp,
    Failed(String),
}

impl LookupStatus {
    pub fn label(&self) -> String {
        match self {
            LookupStatus::Ok => "OK".to_string(),
            LookupStatus::NoHostname => "Nessun hostname".to_string(),
            LookupStatus::InvalidIp => "IP non valido".to_string(),
            LookupStatus::Failed(message) => format!("Errore: {}", message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupStatus::Ok)
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One result line: the address as read, the names found and the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    pub ip: String,
    pub hostnames: Vec<String>,
    pub status: LookupStatus,
}

impl LookupRow {
    /// Row for a successful lookup. An empty name list becomes `NoHostname`.
    pub fn resolved(ip: impl Into<String>, hostnames: Vec<String>) -> Self {
        let status = if hostnames.is_empty() {
            LookupStatus::NoHostname
        } else {
            LookupStatus::Ok
        };

        Self {
            ip: ip.into(),
            hostnames,
            status,
        }
    }

    pub fn invalid(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            hostnames: Vec::new(),
            status: LookupStatus::InvalidIp,
        }
    }

    pub fn failed(ip: impl Into<String>, error: &DomainError) -> Self {
        Self {
            ip: ip.into(),
            hostnames: Vec::new(),
            status: LookupStatus::Failed(error.to_string()),
        }
    }

    pub fn hostname_field(&self) -> String {
        self.hostnames.join(HOSTNAME_SEPARATOR)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Fields in output column order: IP, Hostname, Status.
    pub fn to_record(&self) -> [String; 3] {
        [self.ip.clone(), self.hostname_field(), self.status.label()]
    }
}
