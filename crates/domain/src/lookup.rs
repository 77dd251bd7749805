use crate::dns_record::RecordType;
use crate::name::DomainName;
use std::fmt;
use std::net::IpAddr;

/// What the caller asked for: a host address or the responsible mail
/// server. Propagated unchanged through every recursion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Address,
    MailExchange,
}

impl LookupKind {
    pub fn record_type(&self) -> RecordType {
        match self {
            LookupKind::Address => RecordType::A,
            LookupKind::MailExchange => RecordType::MX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Address => "address",
            LookupKind::MailExchange => "mail-exchange",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final value of a successful resolution. A mail-exchange lookup yields a
/// hostname, never an address; resolving that hostname is a separate step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Address(IpAddr),
    MailExchange(DomainName),
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Address(addr) => write!(f, "{}", addr),
            Resolved::MailExchange(name) => write!(f, "{}", name),
        }
    }
}
