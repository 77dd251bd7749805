use async_trait::async_trait;
use rootwalk_domain::ResolveError;
use std::net::IpAddr;

/// Supplies the bootstrap set of root server addresses. An empty set is a
/// configuration failure; resolution cannot start without it.
#[async_trait]
pub trait RootHintsProvider: Send + Sync {
    async fn root_servers(&self) -> Result<Vec<IpAddr>, ResolveError>;
}
