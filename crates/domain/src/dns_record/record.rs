use super::RecordType;

/// Per-type payload of a normalized record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// A / AAAA
    Address(String),
    /// NS / CNAME / PTR
    Name(String),
    /// TXT / SPF, chunks already joined
    Text(String),
    /// MX; `preference` is only present when the raw data supplied one
    Mx {
        preference: Option<u16>,
        exchange: String,
    },
}

/// One normalized DNS answer.
///
/// `record_type` always equals the type that was queried, even when the
/// answer was reached through CNAME indirection. `ttl` is carried on
/// records from a live upstream; zone-data lookups leave it unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub record_type: RecordType,
    pub data: RecordData,
    pub ttl: Option<u32>,
}

impl ResourceRecord {
    pub fn new(record_type: RecordType, data: RecordData) -> Self {
        Self {
            record_type,
            data,
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn address(&self) -> Option<&str> {
        match &self.data {
            RecordData::Address(address) => Some(address),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.data {
            RecordData::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.data {
            RecordData::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn exchange(&self) -> Option<&str> {
        match &self.data {
            RecordData::Mx { exchange, .. } => Some(exchange),
            _ => None,
        }
    }

    pub fn preference(&self) -> Option<u16> {
        match &self.data {
            RecordData::Mx { preference, .. } => *preference,
            _ => None,
        }
    }
}
