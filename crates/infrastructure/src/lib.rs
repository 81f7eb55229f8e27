//! DNS Adapter Infrastructure Layer
pub mod dns;

pub use dns::{HickoryRecordResolver, ZoneRecordResolver};
