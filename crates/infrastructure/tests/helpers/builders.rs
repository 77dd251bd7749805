#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, SOA, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub const DEFAULT_TTL: u32 = 300;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

// ── wire records ───────────────────────────────────────────────────────────

pub fn a(owner: &str, address: &str) -> Record {
    let ip: Ipv4Addr = address.parse().unwrap();
    Record::from_rdata(name(owner), DEFAULT_TTL, RData::A(A(ip)))
}

pub fn aaaa(owner: &str, address: &str) -> Record {
    let ip: Ipv6Addr = address.parse().unwrap();
    Record::from_rdata(name(owner), DEFAULT_TTL, RData::AAAA(AAAA(ip)))
}

pub fn ns(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), DEFAULT_TTL, RData::NS(NS(name(target))))
}

pub fn cname(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), DEFAULT_TTL, RData::CNAME(CNAME(name(target))))
}

pub fn mx(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(
        name(owner),
        DEFAULT_TTL,
        RData::MX(MX::new(preference, name(exchange))),
    )
}

pub fn soa(owner: &str, primary_ns: &str) -> Record {
    let rname = name(&format!("hostmaster.{}", owner));
    Record::from_rdata(
        name(owner),
        DEFAULT_TTL,
        RData::SOA(SOA::new(name(primary_ns), rname, 1, 3600, 900, 604800, 300)),
    )
}

pub fn txt(owner: &str, value: &str) -> Record {
    Record::from_rdata(
        name(owner),
        DEFAULT_TTL,
        RData::TXT(TXT::new(vec![value.to_string()])),
    )
}

// ── wire responses ─────────────────────────────────────────────────────────

/// Assembles a serialized DNS response the way a nameserver would emit it.
pub struct WireResponseBuilder {
    message: Message,
}

impl WireResponseBuilder {
    pub fn new(id: u16, qname: &str, qtype: RecordType) -> Self {
        let mut query = Query::new();
        query.set_name(name(qname));
        query.set_query_type(qtype);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Response, OpCode::Query);
        message.add_query(query);

        Self { message }
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.message.add_answer(record);
        self
    }

    pub fn authority(mut self, record: Record) -> Self {
        self.message.add_name_server(record);
        self
    }

    pub fn additional(mut self, record: Record) -> Self {
        self.message.add_additional(record);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.message.to_vec().unwrap()
    }

    /// A response with no question section at all.
    pub fn questionless(id: u16) -> Vec<u8> {
        Message::new(id, MessageType::Response, OpCode::Query)
            .to_vec()
            .unwrap()
    }
}
