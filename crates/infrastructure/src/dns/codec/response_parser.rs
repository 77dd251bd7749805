use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use rootwalk_domain::{DnsResponse, DomainName, Question, RecordData, ResolveError, ResourceRecord};
use tracing::debug;

/// Decodes wire bytes into the domain response model.
///
/// A response is only usable when it decodes, its ID matches the query it
/// claims to answer, and it carries a question section. Records of types
/// outside the domain model are dropped; section order is preserved.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<DnsResponse, ResolveError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| ResolveError::InvalidResponse(format!("undecodable message: {}", e)))?;

        if message.id() != expected_id {
            return Err(ResolveError::ResponseIdMismatch {
                expected: expected_id,
                got: message.id(),
            });
        }

        let query = message.queries().first().ok_or_else(|| {
            ResolveError::InvalidResponse("response carries no question section".to_string())
        })?;
        let question_type = RecordTypeMapper::from_hickory(query.query_type()).ok_or_else(|| {
            ResolveError::InvalidResponse(format!(
                "unsupported question type {}",
                query.query_type()
            ))
        })?;
        let question = Question::new(DomainName::new(query.name().to_utf8()), question_type);

        let mut response = DnsResponse::new(question);
        response.answers = Self::convert_records(message.answers());
        response.authorities = Self::convert_records(message.name_servers());
        response.additionals = Self::convert_records(message.additionals());

        debug!(
            id = message.id(),
            answers = response.answers.len(),
            authorities = response.authorities.len(),
            additionals = response.additionals.len(),
            "DNS response decoded"
        );

        Ok(response)
    }

    fn convert_records(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().filter_map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> Option<ResourceRecord> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::Aaaa(aaaa.0),
            RData::NS(ns) => RecordData::Ns(DomainName::new(ns.to_utf8())),
            RData::CNAME(cname) => RecordData::Cname(DomainName::new(cname.to_utf8())),
            RData::MX(mx) => RecordData::Mx {
                preference: mx.preference(),
                exchange: DomainName::new(mx.exchange().to_utf8()),
            },
            RData::SOA(soa) => RecordData::Soa {
                primary_ns: DomainName::new(soa.mname().to_utf8()),
            },
            _ => {
                debug!(record_type = %record.record_type(), "Skipping unsupported record");
                return None;
            }
        };

        Some(ResourceRecord::new(
            DomainName::new(record.name().to_utf8()),
            record.ttl(),
            data,
        ))
    }
}
