use async_trait::async_trait;
use rootwalk_domain::{DnsResponse, DomainName, RecordType, ResolveError};
use std::net::IpAddr;

/// Sends one question to a set of candidate servers and returns the first
/// decoded response. Walking the set (one at a time, racing, timeouts) is
/// the implementation's concern; exhausting it without a usable response
/// is an error, never a silent empty message.
#[async_trait]
pub trait ServerQueryClient: Send + Sync {
    async fn query(
        &self,
        servers: &[IpAddr],
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, ResolveError>;
}
