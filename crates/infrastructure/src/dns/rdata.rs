//! Shapes hickory answer data into the adapter's raw-value vocabulary.

use dns_adapter_domain::{RecordType, ZoneValue};
use hickory_resolver::proto::rr::RData;

use super::record_type_map::SPF_TYPE_CODE;

/// Extracts the raw value for `record_type` from one answer's data.
///
/// Answers of other types (e.g. CNAMEs interleaved into an A response)
/// return `None` and are skipped by the caller. Text bytes outside UTF-8
/// are replaced rather than failing the lookup.
pub fn extract(record_type: RecordType, rdata: &RData) -> Option<ZoneValue> {
    match (record_type, rdata) {
        (RecordType::A, RData::A(a)) => Some(ZoneValue::One(a.0.to_string())),
        (RecordType::AAAA, RData::AAAA(aaaa)) => Some(ZoneValue::One(aaaa.0.to_string())),
        (RecordType::MX, RData::MX(mx)) => Some(ZoneValue::Many(vec![
            mx.preference().to_string(),
            mx.exchange().to_utf8(),
        ])),
        (RecordType::NS, RData::NS(ns)) => Some(ZoneValue::One(ns.to_utf8())),
        (RecordType::CNAME, RData::CNAME(cname)) => Some(ZoneValue::One(cname.to_utf8())),
        (RecordType::PTR, RData::PTR(ptr)) => Some(ZoneValue::One(ptr.to_utf8())),
        (RecordType::TXT, RData::TXT(txt)) => Some(ZoneValue::Many(
            txt.iter()
                .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                .collect(),
        )),
        (RecordType::SPF, RData::Unknown { code, rdata }) if u16::from(*code) == SPF_TYPE_CODE => {
            Some(ZoneValue::Many(character_strings(rdata.anything())))
        }
        _ => None,
    }
}

/// SPF shares the TXT wire format: a run of length-prefixed
/// character-strings.
fn character_strings(mut bytes: &[u8]) -> Vec<String> {
    let mut chunks = Vec::new();
    while let Some((&len, rest)) = bytes.split_first() {
        let len = len as usize;
        if rest.len() < len {
            break;
        }
        chunks.push(String::from_utf8_lossy(&rest[..len]).into_owned());
        bytes = &rest[len..];
    }
    chunks
}
