mod query_client;
mod root_hints;

pub use query_client::ServerQueryClient;
pub use root_hints::RootHintsProvider;
