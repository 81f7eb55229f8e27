use thiserror::Error;

use crate::dns_record::RecordType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("time-out on DNS '{record_type}' lookup of '{domain}'")]
    Timeout {
        record_type: RecordType,
        domain: String,
    },

    /// Reserved for callers that want to signal a missing domain
    /// explicitly; the adapter itself reports missing domains as empty
    /// record sets.
    #[error("domain does not exist: {0}")]
    NxDomain(String),

    #[error("error on DNS '{record_type}' lookup of '{domain}': {reason}")]
    Lookup {
        record_type: RecordType,
        domain: String,
        reason: String,
    },

    #[error("invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("CNAME chain revisits '{0}'")]
    CnameLoop(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl DnsError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DnsError::Timeout { .. })
    }
}
