//! In-memory zone data for the synthetic resolver.
//!
//! Fixtures describe, per domain, an ordered set of record entries. Two
//! sentinels are part of the vocabulary: a whole-entry timeout (the lookup
//! itself times out) and a per-value timeout or explicit absence.

use std::collections::HashMap;

use crate::dns_record::RecordType;
use crate::domain_name;

/// One raw value as authored in zone data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneValue {
    /// Simulates a timeout on this specific record.
    Timeout,
    /// Explicitly "no record of this type here".
    Absent,
    One(String),
    Many(Vec<String>),
}

impl ZoneValue {
    pub fn one(value: impl Into<String>) -> Self {
        ZoneValue::One(value.into())
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ZoneValue::Many(values.into_iter().map(Into::into).collect())
    }
}

/// One element of a domain's record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneEntry {
    /// Record-set level sentinel: any query against this domain that finds
    /// no usable records times out instead of answering empty.
    Timeout,
    Records(HashMap<RecordType, ZoneValue>),
}

impl ZoneEntry {
    pub fn record(record_type: RecordType, value: ZoneValue) -> Self {
        ZoneEntry::Records(HashMap::from([(record_type, value)]))
    }

    pub fn records<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (RecordType, ZoneValue)>,
    {
        ZoneEntry::Records(pairs.into_iter().collect())
    }

    pub fn value_for(&self, record_type: RecordType) -> Option<&ZoneValue> {
        match self {
            ZoneEntry::Timeout => None,
            ZoneEntry::Records(map) => map.get(&record_type),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ZoneEntry::Timeout)
    }
}

/// The zone table. Built once by the test author, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ZoneData {
    records: HashMap<String, Vec<ZoneEntry>>,
}

impl ZoneData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys are normalized on insert, so fixtures may be authored in any
    /// case and with or without a trailing dot.
    pub fn insert(&mut self, domain: impl AsRef<str>, entries: Vec<ZoneEntry>) {
        self.records
            .insert(domain_name::normalize(domain.as_ref()), entries);
    }

    pub fn lookup(&self, domain: &str) -> Option<&[ZoneEntry]> {
        if domain_name::is_blank(domain) {
            return None;
        }
        self.records
            .get(&domain_name::normalize(domain))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
