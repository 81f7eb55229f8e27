use dns_adapter_domain::{DnsError, RecordData, RecordType, ResourceRecord, ZoneValue};

/// Shapes one raw record value into the normalized record for its type.
///
/// Both resolver implementations route their raw data through here, so the
/// per-type field rules live in exactly one place.
pub struct RecordFormatter;

impl RecordFormatter {
    /// `domain` is only used for error context. Returns `Ok(None)` for a
    /// value that is explicitly absent.
    pub fn format(
        record_type: RecordType,
        domain: &str,
        value: &ZoneValue,
        ttl: Option<u32>,
    ) -> Result<Option<ResourceRecord>, DnsError> {
        let data = match value {
            ZoneValue::Timeout => {
                return Err(DnsError::Timeout {
                    record_type,
                    domain: domain.to_string(),
                })
            }
            ZoneValue::Absent => return Ok(None),
            ZoneValue::One(value) => Self::from_scalar(record_type, value),
            ZoneValue::Many(values) => Self::from_sequence(record_type, values)?,
        };

        let mut record = ResourceRecord::new(record_type, data);
        record.ttl = ttl;
        Ok(Some(record))
    }

    fn from_scalar(record_type: RecordType, value: &str) -> RecordData {
        match record_type {
            RecordType::A | RecordType::AAAA => RecordData::Address(value.to_string()),
            RecordType::NS | RecordType::CNAME | RecordType::PTR => {
                RecordData::Name(value.to_string())
            }
            RecordType::TXT | RecordType::SPF => RecordData::Text(value.to_string()),
            RecordType::MX => RecordData::Mx {
                preference: None,
                exchange: value.to_string(),
            },
        }
    }

    fn from_sequence(record_type: RecordType, values: &[String]) -> Result<RecordData, DnsError> {
        match record_type {
            // Multi-chunk text is joined with no separator.
            RecordType::TXT | RecordType::SPF => Ok(RecordData::Text(values.concat())),
            RecordType::MX => Self::mx_from_sequence(values),
            other => Err(DnsError::InvalidRecordData(format!(
                "{} record expects a single value, got a sequence of {}",
                other,
                values.len()
            ))),
        }
    }

    /// More than one element: the first is the preference, the last the
    /// exchange. Exactly one element: an exchange with no preference.
    fn mx_from_sequence(values: &[String]) -> Result<RecordData, DnsError> {
        let exchange = values
            .last()
            .ok_or_else(|| DnsError::InvalidRecordData("empty MX record".to_string()))?;

        let preference = if values.len() > 1 {
            let raw = &values[0];
            let parsed = raw.parse::<u16>().map_err(|_| {
                DnsError::InvalidRecordData(format!("MX preference '{}' is not an integer", raw))
            })?;
            Some(parsed)
        } else {
            None
        };

        Ok(RecordData::Mx {
            preference,
            exchange: exchange.clone(),
        })
    }
}
