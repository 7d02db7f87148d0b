use async_trait::async_trait;
use dns_reverse_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// Returns every name the resolution layer reports for `ip`, in its order.
    /// An address without PTR records yields an empty list, not an error.
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError>;

    fn describe(&self) -> String;
}
