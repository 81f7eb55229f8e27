//! Mapping between `dns_adapter_domain::RecordType` and hickory's record
//! types, in one place for both query building and answer filtering.

use dns_adapter_domain::RecordType;
use hickory_resolver::proto::rr::RecordType as HickoryRecordType;

/// SPF kept its own RR code (99) even though modern zones publish the
/// policy in TXT; hickory has no named variant for it.
pub const SPF_TYPE_CODE: u16 = 99;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::SPF => HickoryRecordType::Unknown(SPF_TYPE_CODE),
            RecordType::PTR => HickoryRecordType::PTR,
        }
    }

    /// Convert hickory RecordType → domain RecordType.
    ///
    /// Returns `None` for record types outside the adapter's contract.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::Unknown(SPF_TYPE_CODE) => Some(RecordType::SPF),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            _ => None,
        }
    }
}
