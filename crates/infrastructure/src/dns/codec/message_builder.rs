//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.
//! Queries are built with Recursion Desired cleared: this resolver walks
//! the delegation tree itself and never asks a server to recurse for it.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::{DomainName, RecordType, ResolveError};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a single-question query and serialize it.
    ///
    /// Returns the random message ID alongside the bytes; the response
    /// parser needs it to reject answers to someone else's question.
    pub fn build_query(
        name: &DomainName,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), ResolveError> {
        let wire_name = Name::from_str(name.as_str())
            .map_err(|e| ResolveError::InvalidName(format!("'{}': {}", name, e)))?;

        let mut query = Query::new();
        query.set_name(wire_name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, ResolveError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            ResolveError::InvalidName(format!("failed to serialize DNS query: {}", e))
        })?;

        Ok(buf)
    }
}
