mod record_data;
mod record_type;

pub use record_data::RecordData;
pub use record_type::RecordType;

use crate::name::DomainName;

/// The Internet class. The only class this resolver deals in.
pub const CLASS_IN: u16 = 1;

/// One decoded resource record from any section of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<DomainName>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            class: CLASS_IN,
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
