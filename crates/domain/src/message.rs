use crate::dns_record::{RecordData, RecordType, ResourceRecord, CLASS_IN};
use crate::name::DomainName;
use std::net::IpAddr;

/// The question a response claims to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub record_type: RecordType,
    pub class: u16,
}

impl Question {
    pub fn new(name: impl Into<DomainName>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: CLASS_IN,
        }
    }
}

/// A decoded DNS response: one question plus the three record sections.
/// Answer keeps wire order; CNAME-chain following depends on it. A response
/// is built once by the decoder, inspected once, and dropped.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub question: Question,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DnsResponse {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    /// First answer record owned by `name` with the given type.
    pub fn answer(&self, name: &DomainName, record_type: RecordType) -> Option<&ResourceRecord> {
        self.answers
            .iter()
            .find(|r| r.record_type() == record_type && r.name == *name)
    }

    /// Address of the first A answer owned by `name`.
    pub fn address_answer(&self, name: &DomainName) -> Option<IpAddr> {
        self.answers.iter().find_map(|r| match &r.data {
            RecordData::A(addr) if r.name == *name => Some(IpAddr::V4(*addr)),
            _ => None,
        })
    }

    /// Exchange of the lowest-preference MX answer owned by `name`.
    /// Equal preferences keep the record that appears first.
    pub fn lowest_mx(&self, name: &DomainName) -> Option<&DomainName> {
        let mut best: Option<(u16, &DomainName)> = None;
        for record in &self.answers {
            if record.name != *name {
                continue;
            }
            if let RecordData::Mx {
                preference,
                exchange,
            } = &record.data
            {
                if best.map_or(true, |(p, _)| *preference < p) {
                    best = Some((*preference, exchange));
                }
            }
        }
        best.map(|(_, exchange)| exchange)
    }

    /// Target of a CNAME answer owned by `name`.
    pub fn alias_target(&self, name: &DomainName) -> Option<&DomainName> {
        self.answers.iter().find_map(|r| match &r.data {
            RecordData::Cname(target) if r.name == *name => Some(target),
            _ => None,
        })
    }

    /// Nameserver targets from Authority whose owner zone covers `name`,
    /// in wire order. NS records for unrelated zones are not referrals.
    pub fn referrals(&self, name: &DomainName) -> Vec<&DomainName> {
        self.authorities
            .iter()
            .filter_map(|r| match &r.data {
                RecordData::Ns(target) if r.name.covers(name) => Some(target),
                _ => None,
            })
            .collect()
    }

    /// Glue: Additional-section A addresses for the given referral targets.
    /// Target order is preserved and duplicates dropped, so the caller can
    /// walk the addresses in the order the authority listed its servers.
    pub fn glue_addresses(&self, targets: &[&DomainName]) -> Vec<IpAddr> {
        let mut addresses = Vec::new();
        for target in targets {
            for record in &self.additionals {
                if let RecordData::A(addr) = &record.data {
                    if record.name == **target {
                        let addr = IpAddr::V4(*addr);
                        if !addresses.contains(&addr) {
                            addresses.push(addr);
                        }
                    }
                }
            }
        }
        addresses
    }

    /// Whether Additional carries at least one A record for `target`.
    pub fn has_glue(&self, target: &DomainName) -> bool {
        self.additionals
            .iter()
            .any(|r| matches!(r.data, RecordData::A(_)) && r.name == *target)
    }

    /// An SOA in Authority alongside an empty Answer is an authoritative
    /// statement that the name or type does not exist.
    pub fn has_soa_authority(&self) -> bool {
        self.authorities
            .iter()
            .any(|r| matches!(r.data, RecordData::Soa { .. }))
    }
}
