use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidResponse(String),

    #[error("Response id {got} does not match query id {expected}")]
    ResponseIdMismatch { expected: u16, got: u16 },

    #[error("Timed out waiting for {server}")]
    Timeout { server: String },

    #[error("Transport error talking to {server}: {detail}")]
    Transport { server: String, detail: String },

    #[error("No usable response from any of the {attempted} servers")]
    ServersExhausted { attempted: usize },

    #[error("Root hint set is empty, resolution cannot bootstrap")]
    EmptyRootHints,

    #[error("Recursion depth limit of {0} exceeded")]
    DepthLimitExceeded(u8),
}
