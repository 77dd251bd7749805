//! Query client behind the `ServerQueryClient` port.
//!
//! One call covers one question against one server set. Per-address
//! failures (timeout, network error, ID mismatch, undecodable bytes) feed
//! the strategy's walk across the remaining addresses; only exhausting the
//! whole set surfaces as an error.

use crate::dns::codec::{MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use rootwalk_application::ports::ServerQueryClient;
use rootwalk_domain::config::QueryStrategy;
use rootwalk_domain::{DnsResponse, DomainName, RecordType, ResolveError};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

const DNS_PORT: u16 = 53;

/// Execute one query against a single server: build message, send via UDP,
/// decode and validate the response.
async fn query_server(
    server: SocketAddr,
    name: &DomainName,
    record_type: RecordType,
    timeout: Duration,
) -> Result<DnsResponse, ResolveError> {
    let (id, query_bytes) = MessageBuilder::build_query(name, record_type)?;
    let transport = UdpTransport::new(server);
    let response_bytes = transport.send(&query_bytes, timeout).await?;
    ResponseParser::parse(&response_bytes, id)
}

/// UDP-backed query client with a selectable server-walk strategy.
pub struct UdpQueryClient {
    timeout: Duration,
    strategy: QueryStrategy,
    port: u16,
}

impl UdpQueryClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            strategy: QueryStrategy::Failover,
            port: DNS_PORT,
        }
    }

    pub fn with_strategy(mut self, strategy: QueryStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Direct queries at a non-standard port, e.g. a local test server.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    async fn query_failover(
        &self,
        servers: &[IpAddr],
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, ResolveError> {
        debug!(strategy = "failover", servers = servers.len(), name = %name, "Trying servers sequentially");

        for (index, server) in servers.iter().enumerate() {
            let addr = SocketAddr::new(*server, self.port);
            match query_server(addr, name, record_type, self.timeout).await {
                Ok(response) => {
                    debug!(server = %addr, position = index, "Server responded");
                    return Ok(response);
                }
                Err(e) => {
                    warn!(server = %addr, error = %e, position = index, "Failing over");
                }
            }
        }
        Err(ResolveError::ServersExhausted {
            attempted: servers.len(),
        })
    }

    async fn query_race(
        &self,
        servers: &[IpAddr],
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, ResolveError> {
        debug!(strategy = "race", servers = servers.len(), name = %name, "Racing all servers");

        let mut abort_handles = Vec::with_capacity(servers.len());
        let mut futs = FuturesUnordered::new();

        for server in servers {
            let addr = SocketAddr::new(*server, self.port);
            let name = name.clone();
            let timeout = self.timeout;
            let handle =
                tokio::spawn(async move { query_server(addr, &name, record_type, timeout).await });
            abort_handles.push(handle.abort_handle());
            futs.push(handle);
        }

        while let Some(join_result) = futs.next().await {
            match join_result {
                Ok(Ok(response)) => {
                    for handle in &abort_handles {
                        handle.abort();
                    }
                    debug!("Fastest server won the race");
                    return Ok(response);
                }
                Ok(Err(e)) => {
                    debug!(error = %e, "Server lost the race");
                }
                Err(e) => {
                    warn!(error = %e, "Query task panicked");
                }
            }
        }
        Err(ResolveError::ServersExhausted {
            attempted: servers.len(),
        })
    }
}

#[async_trait]
impl ServerQueryClient for UdpQueryClient {
    async fn query(
        &self,
        servers: &[IpAddr],
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<DnsResponse, ResolveError> {
        if servers.is_empty() {
            return Err(ResolveError::ServersExhausted { attempted: 0 });
        }

        match self.strategy {
            QueryStrategy::Failover => self.query_failover(servers, name, record_type).await,
            QueryStrategy::Race => self.query_race(servers, name, record_type).await,
        }
    }
}
