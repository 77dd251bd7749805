use super::RecordType;
use crate::name::DomainName;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a resource record. The resolver dispatches on
/// this tag; SOA keeps only the primary nameserver name, which is all the
/// negative-answer check needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(DomainName),
    Cname(DomainName),
    Mx {
        preference: u16,
        exchange: DomainName,
    },
    Soa {
        primary_ns: DomainName,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Soa { .. } => RecordType::SOA,
        }
    }
}
