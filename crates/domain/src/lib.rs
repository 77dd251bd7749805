//! Rootwalk Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod lookup;
pub mod message;
pub mod name;

pub use config::{CliOverrides, Config};
pub use dns_record::{RecordData, RecordType, ResourceRecord, CLASS_IN};
pub use errors::ResolveError;
pub use lookup::{LookupKind, Resolved};
pub use message::{DnsResponse, Question};
pub use name::DomainName;
