use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use dns_adapter_application::ports::RecordResolver;
use dns_adapter_application::services::RecordFormatter;
use dns_adapter_domain::{
    domain_name, DnsError, RecordType, ResourceRecord, ZoneData, ZoneEntry, ZoneValue,
};
use tracing::debug;

/// Record resolver answering from an immutable in-memory zone table.
///
/// Stands in for [`super::HickoryRecordResolver`] in tests: zone data can
/// express CNAME indirection and simulated timeouts without touching the
/// network. Lookups never carry a TTL.
pub struct ZoneRecordResolver {
    zone: ZoneData,
}

impl ZoneRecordResolver {
    pub fn new(zone: ZoneData) -> Self {
        Self { zone }
    }

    /// Collects the raw values answering `record_type` at `domain`,
    /// following CNAME indirection for non-CNAME queries. `visited` holds
    /// every normalized name seen on this chain; revisiting one means the
    /// fixture is cyclic.
    fn raw_records(
        &self,
        domain: &str,
        record_type: RecordType,
        visited: &mut HashSet<String>,
    ) -> Result<Vec<ZoneValue>, DnsError> {
        if domain_name::is_blank(domain) {
            return Ok(Vec::new());
        }
        let name = domain_name::normalize(domain);
        if !visited.insert(name.clone()) {
            return Err(DnsError::CnameLoop(name));
        }
        let Some(record_set) = self.zone.lookup(&name) else {
            return Ok(Vec::new());
        };

        if record_type != RecordType::CNAME {
            if let Some(target) = self.cname_target(record_set, &name)? {
                return self.raw_records(&target, record_type, visited);
            }
        }

        Ok(values_for_type(record_set, record_type)
            .into_iter()
            .cloned()
            .collect())
    }

    /// The first CNAME in a record set redirects every non-CNAME query to
    /// its target, shadowing any local records.
    fn cname_target(
        &self,
        record_set: &[ZoneEntry],
        domain: &str,
    ) -> Result<Option<String>, DnsError> {
        let Some(value) = values_for_type(record_set, RecordType::CNAME)
            .into_iter()
            .next()
        else {
            return Ok(None);
        };
        let record = RecordFormatter::format(RecordType::CNAME, domain, value, None)?;
        Ok(record
            .as_ref()
            .and_then(|r| r.name())
            .filter(|target| !domain_name::is_blank(target))
            .map(str::to_owned))
    }

    /// An empty answer re-scans the queried domain's own record set (not a
    /// CNAME target's) for the bare timeout sentinel.
    fn check_for_timeout(&self, domain: &str, record_type: RecordType) -> Result<(), DnsError> {
        let Some(record_set) = self.zone.lookup(domain) else {
            return Ok(());
        };
        if record_set.iter().any(ZoneEntry::is_timeout) {
            return Err(DnsError::Timeout {
                record_type,
                domain: domain_name::normalize(domain),
            });
        }
        Ok(())
    }
}

fn values_for_type(record_set: &[ZoneEntry], record_type: RecordType) -> Vec<&ZoneValue> {
    record_set
        .iter()
        .filter_map(|entry| entry.value_for(record_type))
        .filter(|value| !matches!(value, ZoneValue::Absent))
        .collect()
}

#[async_trait]
impl RecordResolver for ZoneRecordResolver {
    async fn fetch_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DnsError> {
        let name = domain_name::normalize(domain);
        let mut visited = HashSet::new();
        let raw = self.raw_records(domain, record_type, &mut visited)?;

        if raw.is_empty() {
            self.check_for_timeout(domain, record_type)?;
            debug!(domain = %name, record_type = %record_type, "zone lookup found no records");
            return Ok(Vec::new());
        }

        let mut records = Vec::with_capacity(raw.len());
        for value in &raw {
            if let Some(record) = RecordFormatter::format(record_type, &name, value, None)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// The zone table has no provider; accepted for interface parity.
    fn set_timeout(&self, _timeout: Duration) {}
}
