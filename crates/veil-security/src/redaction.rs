//! Two-layer redaction facade

use std::sync::Arc;

use veil_core::RedactionBackend;

use crate::entity::EntityRedactor;
use crate::error::InitError;
use crate::pattern::PatternRedactor;

/// Text transform handed to the trace client
pub type RedactFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Patterns first, then entities. Never fails: at worst the input comes back
/// with only pattern placeholders applied.
pub struct Redaction {
    patterns: PatternRedactor,
    entities: Option<EntityRedactor>,
}

impl Redaction {
    /// Regex layer only
    pub fn pattern_only() -> Self {
        Self {
            patterns: PatternRedactor::new(),
            entities: None,
        }
    }

    pub fn with_entities(entities: EntityRedactor) -> Self {
        Self {
            patterns: PatternRedactor::new(),
            entities: Some(entities),
        }
    }

    pub fn redact(&self, text: &str) -> String {
        let scrubbed = self.patterns.redact(text);

        match &self.entities {
            Some(entities) => entities.redact(&scrubbed),
            None => scrubbed,
        }
    }

    /// Whether the entity layer is live. Triggers its one-time init.
    pub fn entities_available(&self) -> bool {
        self.entities.as_ref().is_some_and(EntityRedactor::available)
    }

    pub fn entity_error(&self) -> Option<&InitError> {
        self.entities.as_ref().and_then(EntityRedactor::init_error)
    }

    pub fn backend(&self) -> RedactionBackend {
        if self.entities_available() {
            RedactionBackend::PatternPlusEntity
        } else {
            RedactionBackend::PatternOnly
        }
    }

    /// Operator-facing description of each layer and whether it is active
    pub fn layers(&self) -> Vec<String> {
        let mut layers = vec!["Regex (email, SSN, phone, credit card, account ID)".to_string()];

        match &self.entities {
            Some(entities) if entities.available() => layers.push(format!(
                "Entity NLP via {} (names, locations)",
                entities.engine_name().unwrap_or("engine")
            )),
            Some(entities) => layers.push(format!(
                "Entity NLP unavailable ({}), regex only",
                entities
                    .init_error()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "unknown".to_string())
            )),
            None => layers.push("Entity NLP not enabled, regex only".to_string()),
        }

        layers
    }

    /// Bind [`redact`](Self::redact) as a shareable transform
    pub fn as_transform(self: &Arc<Self>) -> RedactFn {
        let redaction = Arc::clone(self);
        Arc::new(move |text: &str| redaction.redact(text))
    }
}

impl Default for Redaction {
    /// Bundled gazetteer
    #[cfg(feature = "entities")]
    fn default() -> Self {
        Self::with_entities(EntityRedactor::gazetteer(crate::gazetteer::ModelSource::Bundled))
    }

    #[cfg(not(feature = "entities"))]
    fn default() -> Self {
        Self::pattern_only()
    }
}
