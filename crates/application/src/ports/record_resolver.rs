use std::time::Duration;

use async_trait::async_trait;
use dns_adapter_domain::{DnsError, RecordType, ResourceRecord};

/// One resolver contract for every record type the adapter speaks.
///
/// Implementations answer from a live upstream or from in-memory zone
/// data; callers pick one at construction time and program against this
/// trait. The per-type operations are provided methods over the shared
/// lookup, so implementations only supply `fetch_records`.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn fetch_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DnsError>;

    /// Forwarded to the underlying provider. Implementations without a
    /// provider accept it as a no-op so they stay substitutable.
    fn set_timeout(&self, timeout: Duration);

    async fn fetch_a_records(&self, domain: &str) -> Result<Vec<ResourceRecord>, DnsError> {
        self.fetch_records(domain, RecordType::A).await
    }

    async fn fetch_aaaa_records(&self, domain: &str) -> Result<Vec<ResourceRecord>, DnsError> {
        self.fetch_records(domain, RecordType::AAAA).await
    }

    async fn fetch_mx_records(&self, domain: &str) -> Result<Vec<ResourceRecord>, DnsError> {
        self.fetch_records(domain, RecordType::MX).await
    }

    async fn fetch_ns_records(&self, domain: &str) -> Result<Vec<ResourceRecord>, DnsError> {
        self.fetch_records(domain, RecordType::NS).await
    }

    async fn fetch_cname_records(&self, domain: &str) -> Result<Vec<ResourceRecord>, DnsError> {
        self.fetch_records(domain, RecordType::CNAME).await
    }

    async fn fetch_txt_records(&self, domain: &str) -> Result<Vec<ResourceRecord>, DnsError> {
        self.fetch_records(domain, RecordType::TXT).await
    }

    async fn fetch_spf_records(&self, domain: &str) -> Result<Vec<ResourceRecord>, DnsError> {
        self.fetch_records(domain, RecordType::SPF).await
    }

    /// PTR lookups take an already-reversed name, e.g.
    /// `"1.2.0.192.in-addr.arpa"`.
    async fn fetch_ptr_records(
        &self,
        reverse_address: &str,
    ) -> Result<Vec<ResourceRecord>, DnsError> {
        self.fetch_records(reverse_address, RecordType::PTR).await
    }
}
