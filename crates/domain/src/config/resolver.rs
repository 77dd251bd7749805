use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root servers used to bootstrap resolution. Empty selects the
    /// built-in IANA set.
    #[serde(default)]
    pub root_servers: Vec<String>,

    /// Per-server wait in milliseconds before an attempt is abandoned.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Hard bound on nested queries per top-level resolution.
    #[serde(default = "default_max_depth")]
    pub max_depth: u8,

    #[serde(default)]
    pub strategy: QueryStrategy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: vec![],
            query_timeout: default_query_timeout(),
            max_depth: default_max_depth(),
            strategy: QueryStrategy::default(),
        }
    }
}

/// How the query client walks a server set: one at a time in order, or
/// all at once taking the first responder.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
pub enum QueryStrategy {
    #[default]
    Failover,

    Race,
}

impl QueryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Failover => "failover",
            Self::Race => "race",
        }
    }
}

fn default_query_timeout() -> u64 {
    2000
}

fn default_max_depth() -> u8 {
    30
}
