#![allow(dead_code)]
use hickory_proto::rr::rdata::{A, CNAME, MX, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const DEFAULT_TTL: u32 = 300;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn a(owner: &str, address: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), DEFAULT_TTL, RData::A(A(address)))
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
