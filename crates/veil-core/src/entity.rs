use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Unstructured and structured PII kinds the entity layer is allowed to substitute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Person,
    PhoneNumber,
    EmailAddress,
    UsSsn,
    CreditCard,
    Location,
}

impl EntityKind {
    /// The fixed allow-list, in the order it is passed to the analyzer
    pub const ALLOWED: [EntityKind; 6] = [
        EntityKind::Person,
        EntityKind::PhoneNumber,
        EntityKind::EmailAddress,
        EntityKind::UsSsn,
        EntityKind::CreditCard,
        EntityKind::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "PERSON",
            EntityKind::PhoneNumber => "PHONE_NUMBER",
            EntityKind::EmailAddress => "EMAIL_ADDRESS",
            EntityKind::UsSsn => "US_SSN",
            EntityKind::CreditCard => "CREDIT_CARD",
            EntityKind::Location => "LOCATION",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALLOWED
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownEntityKind(s.to_string()))
    }
}

/// One detected span. Offsets are byte offsets into the analyzed string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerResult {
    pub kind: EntityKind,
    pub start: usize,
    pub end: usize,
    pub score: f32,
}

impl RecognizerResult {
    pub fn new(kind: EntityKind, start: usize, end: usize, score: f32) -> Self {
        Self {
            kind,
            start,
            end,
            score,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn overlaps(&self, other: &RecognizerResult) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in EntityKind::ALLOWED {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
        assert_eq!("person".parse::<EntityKind>().unwrap(), EntityKind::Person);
        assert!("ORGANIZATION".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_as_engine_name() {
        let json = serde_json::to_string(&EntityKind::UsSsn).unwrap();
        assert_eq!(json, "\"US_SSN\"");
    }

    #[test]
    fn test_overlap() {
        let a = RecognizerResult::new(EntityKind::Person, 0, 10, 0.85);
        let b = RecognizerResult::new(EntityKind::Location, 5, 12, 0.85);
        let c = RecognizerResult::new(EntityKind::Location, 10, 12, 0.85);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.len(), 10);
    }
}
