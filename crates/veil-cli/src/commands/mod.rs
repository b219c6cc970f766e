pub mod lookup;
pub mod redact;
pub mod status;
pub mod trace;

use veil_config::Config;
use veil_security::{EntityRedactor, InitError, ModelSource, Redaction};

/// Build the redaction facade described by `config`
pub fn build_redaction(config: &Config) -> Redaction {
    if !config.entities.enabled {
        return Redaction::with_entities(EntityRedactor::unavailable(InitError::Disabled));
    }

    let source = match &config.entities.model {
        Some(path) => ModelSource::File(path.clone()),
        None => ModelSource::Bundled,
    };
    Redaction::with_entities(EntityRedactor::gazetteer(source))
}
