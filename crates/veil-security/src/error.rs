//! Entity backend initialization failures

use std::path::PathBuf;

use thiserror::Error;
use veil_core::EntityKind;

/// Why the entity layer is unavailable. Cached for the lifetime of the
/// [`EntityRedactor`](crate::EntityRedactor) that produced it.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("entity layer disabled by configuration")]
    Disabled,

    #[error("no bundled entity model in this build")]
    ModelMissing,

    #[error("failed to read entity model {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse entity model: {0}")]
    ModelParse(#[from] serde_json::Error),

    #[error("entity engine construction failed: {0}")]
    Engine(String),

    #[error("canary analysis found {found:?}, expected PERSON and LOCATION")]
    CanaryFailed { found: Vec<EntityKind> },

    #[error("entity engine panicked during initialization")]
    Panicked,
}
