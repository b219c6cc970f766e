//! Entity redaction layer
//!
//! Wraps an [`EntityEngine`] that is built lazily on first use. Construction
//! and the canary probe run at most once per redactor; the outcome, success or
//! [`InitError`], is kept for the redactor's lifetime. An unavailable engine
//! turns [`EntityRedactor::redact`] into the identity function.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::OnceLock;

use tracing::{debug, info, warn};
use veil_core::EntityKind;

use crate::engine::{CANARY_TEXT, EntityEngine};
use crate::error::InitError;

type EngineResult = Result<Box<dyn EntityEngine>, InitError>;
type EngineFactory = Box<dyn Fn() -> EngineResult + Send + Sync>;

pub struct EntityRedactor {
    factory: EngineFactory,
    state: OnceLock<EngineResult>,
}

impl EntityRedactor {
    /// Create a redactor whose engine is built by `factory` on first use
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> EngineResult + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            state: OnceLock::new(),
        }
    }

    /// Gazetteer engine loaded from `source`
    #[cfg(feature = "entities")]
    pub fn gazetteer(source: crate::gazetteer::ModelSource) -> Self {
        Self::new(move || {
            let engine = crate::gazetteer::GazetteerEngine::from_source(&source)?;
            Ok(Box::new(engine) as Box<dyn EntityEngine>)
        })
    }

    /// A redactor that is already resolved as unavailable
    pub fn unavailable(reason: InitError) -> Self {
        let state = OnceLock::new();
        let _ = state.set(Err(reason));
        Self {
            factory: Box::new(|| Err(InitError::Disabled)),
            state,
        }
    }

    /// Whether the engine built and passed the canary. Runs init on first call.
    pub fn available(&self) -> bool {
        self.engine().is_some()
    }

    /// Why the engine is unavailable, if it is
    pub fn init_error(&self) -> Option<&InitError> {
        self.state().as_ref().err()
    }

    /// Name of the loaded engine
    pub fn engine_name(&self) -> Option<&str> {
        self.engine().map(|engine| engine.name())
    }

    /// Replace detected entities; returns `text` unchanged if the engine is unavailable
    pub fn redact(&self, text: &str) -> String {
        let Some(engine) = self.engine() else {
            return text.to_string();
        };

        let results = engine.analyze(text, &EntityKind::ALLOWED);
        if results.is_empty() {
            return text.to_string();
        }

        debug!(entities = results.len(), "Anonymizing detected entities");
        engine.anonymize(text, &results)
    }

    fn engine(&self) -> Option<&dyn EntityEngine> {
        self.state().as_ref().ok().map(|engine| engine.as_ref())
    }

    fn state(&self) -> &EngineResult {
        self.state.get_or_init(|| {
            let outcome = catch_unwind(AssertUnwindSafe(|| self.initialize()))
                .unwrap_or(Err(InitError::Panicked));

            match &outcome {
                Ok(engine) => info!(engine = engine.name(), "Entity redaction available"),
                Err(e) => warn!(error = %e, "Entity redaction unavailable, using patterns only"),
            }

            outcome
        })
    }

    fn initialize(&self) -> EngineResult {
        let engine = (self.factory)()?;

        // Building can succeed without a usable model; the canary proves it works
        let found: Vec<EntityKind> = engine
            .analyze(CANARY_TEXT, &EntityKind::ALLOWED)
            .into_iter()
            .map(|result| result.kind)
            .collect();

        if !found.contains(&EntityKind::Person) || !found.contains(&EntityKind::Location) {
            return Err(InitError::CanaryFailed { found });
        }

        Ok(engine)
    }
}
