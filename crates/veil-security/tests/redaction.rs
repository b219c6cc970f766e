use std::io::Write;

use veil_core::RedactionBackend;
use veil_security::{EntityRedactor, InitError, Redaction, redact_patterns};

#[cfg(feature = "entities")]
use veil_security::{GazetteerModel, ModelSource};

const SAMPLES: &[&str] = &[
    "My name is John Smith, SSN 123-45-6789",
    "Hi, I'm Luke Skywalker from Tatooine, reach me at luke.skywalker@rebelalliance.org",
    "Card 4111 1111 1111 1111, call 555-123-4567",
    "Account ACT-77421 belongs to Leia Organa in Aldera",
    "What is my balance?",
    "",
];

#[test]
fn test_email_never_survives() {
    let redaction = Redaction::default();

    for email in ["han.solo@millenniumfalcon.net", "a+b@x.io", "Din_Djarin@mandalore.net"] {
        let redacted = redaction.redact(&format!("contact {} now", email));
        assert!(redacted.contains("<EMAIL>"), "{}", redacted);
        assert!(!redacted.contains(email), "{}", redacted);
    }
}

#[test]
fn test_forced_unavailable_redacts_patterns_only() {
    let redaction = Redaction::with_entities(EntityRedactor::unavailable(InitError::ModelMissing));

    assert_eq!(
        redaction.redact("My name is John Smith, SSN 123-45-6789"),
        "My name is John Smith, SSN <SSN>"
    );
    assert!(!redaction.entities_available());
    assert!(!redaction.entities_available());
}

#[test]
fn test_pattern_order_consumes_email_first() {
    let redacted = redact_patterns("write to 555.123.4567@example.com or 555-123-4567");

    assert_eq!(redacted, "write to <EMAIL> or <PHONE>");
}

#[test]
fn test_idempotent() {
    let redaction = Redaction::default();

    for sample in SAMPLES {
        let once = redaction.redact(sample);
        assert_eq!(redaction.redact(&once), once, "sample: {}", sample);
    }
}

#[cfg(feature = "bundled-model")]
#[test]
fn test_bundled_entities() {
    let redaction = Redaction::default();

    assert!(redaction.entities_available());
    assert_eq!(redaction.backend(), RedactionBackend::PatternPlusEntity);
    assert_eq!(
        redaction.redact("John Smith lives in Seattle"),
        "<PERSON> lives in <LOCATION>"
    );
    assert_eq!(
        redaction.redact(SAMPLES[1]),
        "Hi, I'm <PERSON> from <LOCATION>, reach me at <EMAIL>"
    );
    assert_eq!(
        redaction.redact(SAMPLES[3]),
        "Account <ACCOUNT_ID> belongs to <PERSON> in <LOCATION>"
    );
}

#[cfg(feature = "entities")]
#[test]
fn test_model_file() {
    let model = GazetteerModel {
        name: "custom".to_string(),
        language: "en".to_string(),
        first_names: vec!["John".to_string(), "Rey".to_string()],
        last_names: vec![],
        locations: vec!["Seattle".to_string(), "Jakku".to_string()],
    };
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&model).unwrap().as_bytes())
        .unwrap();

    let redaction = Redaction::with_entities(EntityRedactor::gazetteer(ModelSource::File(
        file.path().to_path_buf(),
    )));

    assert!(redaction.entities_available());
    assert_eq!(redaction.redact("Rey from Jakku"), "<PERSON> from <LOCATION>");
}

#[cfg(feature = "entities")]
#[test]
fn test_model_without_canary_entities_is_unavailable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"name": "empty", "first_names": [], "locations": []}"#)
        .unwrap();

    let redaction = Redaction::with_entities(EntityRedactor::gazetteer(ModelSource::File(
        file.path().to_path_buf(),
    )));

    assert!(!redaction.entities_available());
    assert!(matches!(
        redaction.entity_error(),
        Some(InitError::CanaryFailed { .. })
    ));
    assert_eq!(redaction.redact("John Smith lives in Seattle"), "John Smith lives in Seattle");
}

#[cfg(feature = "entities")]
#[test]
fn test_malformed_model_is_unavailable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();

    let redactor = EntityRedactor::gazetteer(ModelSource::File(file.path().to_path_buf()));

    assert!(!redactor.available());
    assert!(matches!(redactor.init_error(), Some(InitError::ModelParse(_))));
}
