use dns_adapter_application::ports::RecordResolver;
use dns_adapter_domain::{DnsError, RecordType, ZoneData, ZoneEntry, ZoneValue};
use dns_adapter_infrastructure::ZoneRecordResolver;
use std::time::Duration;

fn resolver_for(entries: Vec<(&str, Vec<ZoneEntry>)>) -> ZoneRecordResolver {
    let mut zone = ZoneData::new();
    for (domain, records) in entries {
        zone.insert(domain, records);
    }
    ZoneRecordResolver::new(zone)
}

fn a_record(address: &str) -> ZoneEntry {
    ZoneEntry::record(RecordType::A, ZoneValue::one(address))
}

fn cname_record(target: &str) -> ZoneEntry {
    ZoneEntry::record(RecordType::CNAME, ZoneValue::one(target))
}

#[tokio::test]
async fn test_fetch_a_records() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![a_record("192.0.2.1"), a_record("192.0.2.2")],
    )]);

    let records = resolver.fetch_a_records("example.com").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].record_type, RecordType::A);
    assert_eq!(records[0].address(), Some("192.0.2.1"));
    assert_eq!(records[1].address(), Some("192.0.2.2"));
    assert_eq!(records[0].ttl, None);
}

#[tokio::test]
async fn test_lookup_is_case_and_trailing_dot_insensitive() {
    let resolver = resolver_for(vec![("example.com", vec![a_record("192.0.2.1")])]);

    let canonical = resolver.fetch_a_records("example.com").await.unwrap();
    let decorated = resolver.fetch_a_records("Example.com.").await.unwrap();

    assert_eq!(canonical, decorated);
}

#[tokio::test]
async fn test_blank_domain_returns_empty() {
    let resolver = resolver_for(vec![("example.com", vec![a_record("192.0.2.1")])]);

    assert!(resolver.fetch_a_records("").await.unwrap().is_empty());
    assert!(resolver.fetch_a_records("  ").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_domain_returns_empty() {
    let resolver = resolver_for(vec![("example.com", vec![a_record("192.0.2.1")])]);

    let records = resolver.fetch_a_records("missing.example.org").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_domain_present_but_no_records_of_that_type() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![ZoneEntry::record(
            RecordType::MX,
            ZoneValue::many(["10", "mail.example.com."]),
        )],
    )]);

    let records = resolver.fetch_a_records("example.com").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_absent_sentinel_is_excluded() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![ZoneEntry::record(RecordType::A, ZoneValue::Absent)],
    )]);

    let records = resolver.fetch_a_records("example.com").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_bare_timeout_sentinel_raises() {
    let resolver = resolver_for(vec![("example.com", vec![ZoneEntry::Timeout])]);

    let err = resolver.fetch_a_records("example.com").await.unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_timeout_value_on_a_record_raises() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![ZoneEntry::record(RecordType::A, ZoneValue::Timeout)],
    )]);

    let err = resolver.fetch_a_records("example.com").await.unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_timeout_mid_record_set_discards_partial_results() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![
            a_record("192.0.2.1"),
            ZoneEntry::record(RecordType::A, ZoneValue::Timeout),
        ],
    )]);

    let err = resolver.fetch_a_records("example.com").await.unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_timeout_on_other_type_does_not_affect_query() {
    // The sentinel sits on an MX value; an A query never formats it.
    let resolver = resolver_for(vec![(
        "example.com",
        vec![
            a_record("192.0.2.1"),
            ZoneEntry::record(RecordType::MX, ZoneValue::Timeout),
        ],
    )]);

    let records = resolver.fetch_a_records("example.com").await.unwrap();

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_cname_indirection_is_transparent() {
    let resolver = resolver_for(vec![
        ("www.example.com", vec![cname_record("example.com")]),
        ("example.com", vec![a_record("192.0.2.1")]),
    ]);

    let via_alias = resolver.fetch_a_records("www.example.com").await.unwrap();
    let direct = resolver.fetch_a_records("example.com").await.unwrap();

    assert_eq!(via_alias, direct);
    assert_eq!(via_alias[0].record_type, RecordType::A);
}

#[tokio::test]
async fn test_cname_chain_across_multiple_domains() {
    let resolver = resolver_for(vec![
        ("a.example.com", vec![cname_record("b.example.com")]),
        ("b.example.com", vec![cname_record("c.example.com")]),
        ("c.example.com", vec![a_record("192.0.2.9")]),
    ]);

    let records = resolver.fetch_a_records("a.example.com").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].address(), Some("192.0.2.9"));
    assert_eq!(records[0].record_type, RecordType::A);
}

#[tokio::test]
async fn test_cname_shadows_local_records() {
    let resolver = resolver_for(vec![
        (
            "www.example.com",
            vec![cname_record("example.com"), a_record("198.51.100.7")],
        ),
        ("example.com", vec![a_record("192.0.2.1")]),
    ]);

    let records = resolver.fetch_a_records("www.example.com").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].address(), Some("192.0.2.1"));
}

#[tokio::test]
async fn test_cname_query_does_not_follow_indirection() {
    let resolver = resolver_for(vec![
        ("www.example.com", vec![cname_record("example.com")]),
        ("example.com", vec![cname_record("other.example.com")]),
    ]);

    let records = resolver.fetch_cname_records("www.example.com").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type, RecordType::CNAME);
    assert_eq!(records[0].name(), Some("example.com"));
}

#[tokio::test]
async fn test_cname_to_unknown_domain_returns_empty() {
    let resolver = resolver_for(vec![(
        "www.example.com",
        vec![cname_record("gone.example.com")],
    )]);

    let records = resolver.fetch_a_records("www.example.com").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_cyclic_cname_chain_fails_instead_of_looping() {
    let resolver = resolver_for(vec![
        ("a.example.com", vec![cname_record("b.example.com")]),
        ("b.example.com", vec![cname_record("a.example.com")]),
    ]);

    let err = resolver.fetch_a_records("a.example.com").await.unwrap_err();

    assert!(matches!(err, DnsError::CnameLoop(_)));
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_fetch_mx_records() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![ZoneEntry::record(
            RecordType::MX,
            ZoneValue::many(["20", "mail.example.com."]),
        )],
    )]);

    let records = resolver.fetch_mx_records("example.com").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].preference(), Some(20));
    assert_eq!(records[0].exchange(), Some("mail.example.com."));
}

#[tokio::test]
async fn test_fetch_txt_records_joins_chunks() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![ZoneEntry::record(
            RecordType::TXT,
            ZoneValue::many(["ab", "cd"]),
        )],
    )]);

    let records = resolver.fetch_txt_records("example.com").await.unwrap();

    assert_eq!(records[0].text(), Some("abcd"));
}

#[tokio::test]
async fn test_fetch_spf_records() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![ZoneEntry::record(
            RecordType::SPF,
            ZoneValue::one("v=spf1 -all"),
        )],
    )]);

    let records = resolver.fetch_spf_records("example.com").await.unwrap();

    assert_eq!(records[0].record_type, RecordType::SPF);
    assert_eq!(records[0].text(), Some("v=spf1 -all"));
}

#[tokio::test]
async fn test_fetch_ptr_records() {
    let resolver = resolver_for(vec![(
        "1.2.0.192.in-addr.arpa",
        vec![ZoneEntry::record(
            RecordType::PTR,
            ZoneValue::one("host.example.com."),
        )],
    )]);

    let records = resolver
        .fetch_ptr_records("1.2.0.192.in-addr.arpa")
        .await
        .unwrap();

    assert_eq!(records[0].record_type, RecordType::PTR);
    assert_eq!(records[0].name(), Some("host.example.com."));
}

#[tokio::test]
async fn test_mixed_record_set_only_answers_the_queried_type() {
    let resolver = resolver_for(vec![(
        "example.com",
        vec![ZoneEntry::records([
            (RecordType::A, ZoneValue::one("192.0.2.1")),
            (RecordType::TXT, ZoneValue::one("hello")),
        ])],
    )]);

    let a_records = resolver.fetch_a_records("example.com").await.unwrap();
    let txt_records = resolver.fetch_txt_records("example.com").await.unwrap();

    assert_eq!(a_records.len(), 1);
    assert_eq!(a_records[0].address(), Some("192.0.2.1"));
    assert_eq!(txt_records.len(), 1);
    assert_eq!(txt_records[0].text(), Some("hello"));
}

#[tokio::test]
async fn test_set_timeout_is_a_noop() {
    let resolver = resolver_for(vec![("example.com", vec![a_record("192.0.2.1")])]);

    resolver.set_timeout(Duration::from_secs(1));

    let records = resolver.fetch_a_records("example.com").await.unwrap();
    assert_eq!(records.len(), 1);
}
