use rstest::rstest;
use serde_json::{Value, json};
use verple::version::document::{self, DOCUMENT_TYPE};
use verple::{Format, Protocol, ProtocolError, Version};

/// A document as archived by a registry using protocol 1.0.0
const ARCHIVED_V1: &str = r#"{
  "@context": "https://gitlab.com/willynilly/verple/-/raw/main/src/verple/context/v1.0.0.jsonld",
  "@type": "Verple",
  "verple": "1.0.0",
  "sourceFormat": "semver",
  "sourceInput": "2.1.0-rc.3+linux.amd64",
  "release": [2, 1, 0],
  "prerelease": ["rc", 3],
  "postrelease": null,
  "devrelease": null,
  "local": "linux.amd64"
}"#;

#[test]
fn archived_document_decodes_with_provenance() {
    let version = document::from_json_str(ARCHIVED_V1).unwrap();

    assert_eq!(version.to_canonical_string(), "2.1.0-rc3+linux.amd64");
    assert_eq!(version.source_format(), Format::SemVer);
    assert_eq!(version.source_input(), "2.1.0-rc.3+linux.amd64");
    assert_eq!(
        version,
        Version::parse_as("2.1.0-rc.3+linux.amd64", Format::SemVer).unwrap()
    );
}

#[test]
fn written_documents_use_the_current_protocol() {
    let document = Version::parse("24.04").unwrap().to_document();

    assert_eq!(document["verple"], json!(Protocol::CURRENT.tag()));
    assert_eq!(document["@context"], json!(Protocol::CURRENT.context()));
    assert_eq!(document["@type"], json!(DOCUMENT_TYPE));
    assert_eq!(document["sourceFormat"], json!("pep440"));
    assert_eq!(document["sourceInput"], json!("24.04"));
}

#[test]
fn document_from_a_future_protocol_is_rejected() {
    let mut document: Value = serde_json::from_str(ARCHIVED_V1).unwrap();
    document["verple"] = json!("2.0.0");
    document["release"] = json!({"components": [2, 1, 0]});

    assert_eq!(
        Version::from_document(&document),
        Err(ProtocolError::UnsupportedVersion("2.0.0".to_string()))
    );
}

#[test]
fn additive_fields_within_a_protocol_are_tolerated() {
    let mut document: Value = serde_json::from_str(ARCHIVED_V1).unwrap();
    document["epoch"] = json!(0);
    document["registry"] = json!("crates.io");

    let version = Version::from_document(&document).unwrap();

    assert_eq!(version.release(), &[2, 1, 0]);
}

#[rstest]
#[case("1.2.3a1.post2.dev3+build99", false)]
#[case("2024_01_15.7", true)]
#[case("1.0.0-beta+exp.sha.5114f85", true)]
fn json_text_round_trip(#[case] input: &str, #[case] pretty: bool) {
    let version = Version::parse(input).unwrap();

    let json = document::to_json_string(&version, pretty);
    let decoded = document::from_json_str(&json).unwrap();

    assert_eq!(decoded, version);
    assert_eq!(decoded.source_input(), input);
    assert_eq!(decoded.source_format(), version.source_format());
}

#[test]
fn null_required_field_is_malformed_not_missing() {
    let mut document: Value = serde_json::from_str(ARCHIVED_V1).unwrap();
    document["release"] = Value::Null;

    assert!(matches!(
        Version::from_document(&document),
        Err(ProtocolError::MalformedDocument(_))
    ));
}
