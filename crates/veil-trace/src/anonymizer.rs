//! Payload anonymization hook

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use veil_security::RedactFn;

/// Applies a text transform to every string leaf of a JSON payload.
/// Object keys, numbers, booleans and nulls are left untouched.
#[derive(Clone)]
pub struct Anonymizer {
    transform: RedactFn,
}

/// Wrap a text transform (typically `Redaction::redact`) as an anonymizer
pub fn create_anonymizer<F>(transform: F) -> Anonymizer
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Anonymizer {
        transform: Arc::new(transform),
    }
}

impl Anonymizer {
    pub fn from_transform(transform: RedactFn) -> Self {
        Self { transform }
    }

    pub fn apply_text(&self, text: &str) -> String {
        (self.transform)(text)
    }

    pub fn apply(&self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.apply_text(text)),
            Value::Array(items) => Value::Array(items.iter().map(|item| self.apply(item)).collect()),
            Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, field)| (key.clone(), self.apply(field)))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

impl fmt::Debug for Anonymizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Anonymizer").finish_non_exhaustive()
    }
}
