pub mod codec;
pub mod query_client;
pub mod root_hints;
pub mod transport;

pub use codec::{MessageBuilder, RecordTypeMapper, ResponseParser};
pub use query_client::UdpQueryClient;
pub use root_hints::StaticRootHints;
pub use transport::UdpTransport;
