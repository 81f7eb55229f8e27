use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use dns_adapter_application::ports::RecordResolver;
use dns_adapter_application::services::RecordFormatter;
use dns_adapter_domain::{domain_name, DnsError, RecordType, ResourceRecord, Upstream, UpstreamConfig};
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::Resolver;
use tracing::{debug, warn};

use super::rdata;
use super::record_type_map::RecordTypeMapper;

/// Record resolver backed by a hickory upstream client.
///
/// The provider handle is swapped atomically when the timeout changes, so
/// in-flight lookups keep the resolver they started with and no lock sits
/// on the query path.
pub struct HickoryRecordResolver {
    resolver: ArcSwap<Resolver<TokioConnectionProvider>>,
    upstream: ResolverConfig,
    attempts: usize,
}

impl HickoryRecordResolver {
    pub fn new(upstream: ResolverConfig, query_timeout: Duration, attempts: usize) -> Self {
        let resolver = Self::build(upstream.clone(), query_timeout, attempts);
        Self {
            resolver: ArcSwap::from_pointee(resolver),
            upstream,
            attempts,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        let upstream = match config.upstream {
            Upstream::Google => ResolverConfig::google(),
            Upstream::Cloudflare => ResolverConfig::cloudflare(),
        };
        Self::new(
            upstream,
            Duration::from_secs(config.query_timeout),
            config.attempts,
        )
    }

    /// Resolver against Google public DNS.
    pub fn with_google() -> Self {
        Self::from_config(&UpstreamConfig::default())
    }

    /// Resolver against Cloudflare public DNS.
    pub fn with_cloudflare() -> Self {
        Self::from_config(&UpstreamConfig {
            upstream: Upstream::Cloudflare,
            ..UpstreamConfig::default()
        })
    }

    fn build(
        upstream: ResolverConfig,
        query_timeout: Duration,
        attempts: usize,
    ) -> Resolver<TokioConnectionProvider> {
        let mut builder =
            Resolver::builder_with_config(upstream, TokioConnectionProvider::default());
        builder.options_mut().timeout = query_timeout;
        builder.options_mut().attempts = attempts;
        builder.build()
    }
}

#[async_trait]
impl RecordResolver for HickoryRecordResolver {
    async fn fetch_records(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DnsError> {
        let name = domain_name::normalize(domain);
        let rr_type = RecordTypeMapper::to_hickory(record_type);

        debug!(domain = %name, record_type = %record_type, "upstream lookup");

        let resolver = self.resolver.load_full();
        let lookup = match resolver.lookup(name.as_str(), rr_type).await {
            Ok(lookup) => lookup,
            Err(e) => return lookup_failure(record_type, &name, &e.to_string()),
        };

        let mut records = Vec::new();
        for record in lookup.record_iter() {
            let Some(value) = rdata::extract(record_type, record.data()) else {
                continue;
            };
            if let Some(formatted) =
                RecordFormatter::format(record_type, &name, &value, Some(record.ttl()))?
            {
                records.push(formatted);
            }
        }

        debug!(
            domain = %name,
            record_type = %record_type,
            count = records.len(),
            "upstream lookup complete"
        );
        Ok(records)
    }

    fn set_timeout(&self, timeout: Duration) {
        let resolver = Self::build(self.upstream.clone(), timeout, self.attempts);
        self.resolver.store(Arc::new(resolver));
    }
}

/// Classifies a failed provider call. "No records found" covers both
/// NODATA and NXDOMAIN and is a valid empty answer, not a failure.
fn lookup_failure(
    record_type: RecordType,
    domain: &str,
    message: &str,
) -> Result<Vec<ResourceRecord>, DnsError> {
    if message.contains("no records found") || message.contains("NoRecordsFound") {
        debug!(domain = %domain, record_type = %record_type, "no records found");
        return Ok(Vec::new());
    }

    warn!(
        domain = %domain,
        record_type = %record_type,
        error = %message,
        "upstream lookup failed"
    );

    if message.contains("timed out") || message.contains("timeout") {
        return Err(DnsError::Timeout {
            record_type,
            domain: domain.to_string(),
        });
    }

    Err(DnsError::Lookup {
        record_type,
        domain: domain.to_string(),
        reason: message.to_string(),
    })
}
