//! DNS Adapter Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod zone;

pub use config::{Upstream, UpstreamConfig};
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use errors::DnsError;
pub use zone::{ZoneData, ZoneEntry, ZoneValue};
