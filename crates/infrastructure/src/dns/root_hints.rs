//! Static root hints behind the `RootHintsProvider` port.
//!
//! Serves the built-in IANA root server table unless the configuration
//! names its own bootstrap set.

use async_trait::async_trait;
use rootwalk_application::ports::RootHintsProvider;
use rootwalk_domain::{Config, ResolveError};
use std::net::{IpAddr, Ipv4Addr};

/// The IANA root servers, a through m (IPv4).
const BUILTIN_ROOTS: [Ipv4Addr; 13] = [
    Ipv4Addr::new(198, 41, 0, 4),     // a.root-servers.net
    Ipv4Addr::new(199, 9, 14, 201),   // b.root-servers.net
    Ipv4Addr::new(192, 33, 4, 12),    // c.root-servers.net
    Ipv4Addr::new(199, 7, 91, 13),    // d.root-servers.net
    Ipv4Addr::new(192, 203, 230, 10), // e.root-servers.net
    Ipv4Addr::new(192, 5, 5, 241),    // f.root-servers.net
    Ipv4Addr::new(192, 112, 36, 4),   // g.root-servers.net
    Ipv4Addr::new(198, 97, 190, 53),  // h.root-servers.net
    Ipv4Addr::new(192, 36, 148, 17),  // i.root-servers.net
    Ipv4Addr::new(192, 58, 128, 30),  // j.root-servers.net
    Ipv4Addr::new(193, 0, 14, 129),   // k.root-servers.net
    Ipv4Addr::new(199, 7, 83, 42),    // l.root-servers.net
    Ipv4Addr::new(202, 12, 27, 33),   // m.root-servers.net
];

pub struct StaticRootHints {
    servers: Vec<IpAddr>,
}

impl StaticRootHints {
    /// The built-in IANA table.
    pub fn builtin() -> Self {
        Self {
            servers: BUILTIN_ROOTS.iter().map(|a| IpAddr::V4(*a)).collect(),
        }
    }

    pub fn with_servers(servers: Vec<IpAddr>) -> Self {
        Self { servers }
    }

    /// Configured root servers when the config names any, otherwise the
    /// built-in table. `Config::validate` has already rejected unparsable
    /// entries.
    pub fn from_config(config: &Config) -> Self {
        let servers = config.root_server_addrs();
        if servers.is_empty() {
            Self::builtin()
        } else {
            Self { servers }
        }
    }
}

impl Default for StaticRootHints {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl RootHintsProvider for StaticRootHints {
    async fn root_servers(&self) -> Result<Vec<IpAddr>, ResolveError> {
        if self.servers.is_empty() {
            return Err(ResolveError::EmptyRootHints);
        }
        Ok(self.servers.clone())
    }
}
