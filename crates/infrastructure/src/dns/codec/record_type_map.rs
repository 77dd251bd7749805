//! Mapping between `rootwalk_domain::RecordType` and `hickory_proto::rr::RecordType`
//!
//! Used in both directions: the message builder converts domain → hickory
//! when constructing queries, the response parser converts hickory → domain
//! when decoding answers.

use hickory_proto::rr::RecordType as HickoryRecordType;
use rootwalk_domain::RecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::AAAA => HickoryRecordType::AAAA,
        }
    }

    /// Returns `None` for types outside the resolver's model; the parser
    /// skips those records.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::SOA => Some(RecordType::SOA),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            _ => None,
        }
    }
}
