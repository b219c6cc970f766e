//! PII redaction for outbound trace payloads
//!
//! Two layers run in a fixed order:
//! 1. [`PatternRedactor`]: structured PII (email, SSN, phone, credit card,
//!    account id) replaced by fixed placeholders
//! 2. [`EntityRedactor`]: unstructured PII (names, locations) found by an
//!    [`EntityEngine`], initialized once and skipped when unavailable
//!
//! [`Redaction`] composes both and is what the trace client calls.

pub mod engine;
pub mod entity;
pub mod error;
#[cfg(feature = "entities")]
pub mod gazetteer;
pub mod pattern;
pub mod redaction;

pub use engine::{CANARY_TEXT, EntityEngine};
pub use entity::EntityRedactor;
pub use error::InitError;
#[cfg(feature = "entities")]
pub use gazetteer::{GazetteerEngine, GazetteerModel, ModelSource};
pub use pattern::{PatternKind, PatternRedactor, RedactionInfo, redact_patterns};
pub use redaction::{RedactFn, Redaction};
