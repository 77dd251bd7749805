#![allow(dead_code)]
use rootwalk_domain::{DnsResponse, Question, RecordData, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, Ipv6Addr};

const DEFAULT_TTL: u32 = 300;

pub fn a(owner: &str, address: &str) -> ResourceRecord {
    let address: Ipv4Addr = address.parse().unwrap();
    ResourceRecord::new(owner, DEFAULT_TTL, RecordData::A(address))
}

pub fn aaaa(owner: &str, address: &str) -> ResourceRecord {
    let address: Ipv6Addr = address.parse().unwrap();
    ResourceRecord::new(owner, DEFAULT_TTL, RecordData::Aaaa(address))
}

pub fn ns(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(owner, DEFAULT_TTL, RecordData::Ns(target.into()))
}

pub fn cname(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(owner, DEFAULT_TTL, RecordData::Cname(target.into()))
}

pub fn mx(owner: &str, preference: u16, exchange: &str) -> ResourceRecord {
    ResourceRecord::new(
        owner,
        DEFAULT_TTL,
        RecordData::Mx {
            preference,
            exchange: exchange.into(),
        },
    )
}

pub fn soa(owner: &str, primary_ns: &str) -> ResourceRecord {
    ResourceRecord::new(
        owner,
        DEFAULT_TTL,
        RecordData::Soa {
            primary_ns: primary_ns.into(),
        },
    )
}

pub struct ResponseBuilder {
    response: DnsResponse,
}

impl ResponseBuilder {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            response: DnsResponse::new(Question::new(name, record_type)),
        }
    }

    pub fn answer(mut self, record: ResourceRecord) -> Self {
        self.response.answers.push(record);
        self
    }

    pub fn authority(mut self, record: ResourceRecord) -> Self {
        self.response.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.response.additionals.push(record);
        self
    }

    pub fn build(self) -> DnsResponse {
        self.response
    }
}
