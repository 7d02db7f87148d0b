use dns_reverse_domain::{DomainError, LookupRow};

/// Destination for batch result rows.
pub trait ResultSink {
    fn write_header(&mut self) -> Result<(), DomainError>;

    fn write_row(&mut self, row: &LookupRow) -> Result<(), DomainError>;

    fn flush(&mut self) -> Result<(), DomainError>;
}
