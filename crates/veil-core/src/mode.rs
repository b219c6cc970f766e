use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Per-session switch deciding whether traces go through the redaction facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedactionMode {
    #[default]
    On,
    Off,
}

impl RedactionMode {
    pub fn is_enabled(&self) -> bool {
        matches!(self, RedactionMode::On)
    }

    /// Value of the `redaction_mode` metadata tag
    pub fn as_str(&self) -> &'static str {
        match self {
            RedactionMode::On => "on",
            RedactionMode::Off => "off",
        }
    }
}

impl From<bool> for RedactionMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            RedactionMode::On
        } else {
            RedactionMode::Off
        }
    }
}

impl fmt::Display for RedactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedactionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "1" => Ok(RedactionMode::On),
            "off" | "false" | "0" => Ok(RedactionMode::Off),
            _ => Err(Error::InvalidRedactionMode(s.to_string())),
        }
    }
}

/// Which redaction layers are in effect, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionBackend {
    PatternOnly,
    PatternPlusEntity,
}

impl RedactionBackend {
    pub fn has_entities(&self) -> bool {
        matches!(self, RedactionBackend::PatternPlusEntity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(RedactionMode::from(true), RedactionMode::On);
        assert_eq!(RedactionMode::from(false), RedactionMode::Off);
        assert!(RedactionMode::default().is_enabled());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("ON".parse::<RedactionMode>().unwrap(), RedactionMode::On);
        assert_eq!("off".parse::<RedactionMode>().unwrap(), RedactionMode::Off);
        assert!("maybe".parse::<RedactionMode>().is_err());
    }

    #[test]
    fn test_mode_tag() {
        assert_eq!(RedactionMode::On.to_string(), "on");
        assert_eq!(RedactionMode::Off.as_str(), "off");
    }
}
