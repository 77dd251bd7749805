use rootwalk_application::IterativeResolver;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{StaticRootHints, UdpQueryClient};
use std::sync::Arc;
use std::time::Duration;

/// Builds the resolver and its collaborators from the loaded configuration.
pub struct ResolverServices {
    pub resolver: IterativeResolver,
}

impl ResolverServices {
    pub fn new(config: &Config) -> Self {
        let timeout = Duration::from_millis(config.resolver.query_timeout);
        let query_client =
            Arc::new(UdpQueryClient::new(timeout).with_strategy(config.resolver.strategy));
        let root_hints = Arc::new(StaticRootHints::from_config(config));

        let resolver = IterativeResolver::new(query_client, root_hints)
            .with_max_depth(config.resolver.max_depth);

        Self { resolver }
    }
}
