//! Structured PII redaction

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Email,
    Ssn,
    Phone,
    CreditCard,
    AccountId,
}

impl PatternKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            PatternKind::Email => "<EMAIL>",
            PatternKind::Ssn => "<SSN>",
            PatternKind::Phone => "<PHONE>",
            PatternKind::CreditCard => "<CREDIT_CARD>",
            PatternKind::AccountId => "<ACCOUNT_ID>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub kind: PatternKind,
    pub count: usize,
}

struct PatternRule {
    kind: PatternKind,
    regex: Regex,
}

impl PatternRule {
    fn new(kind: PatternKind, pattern: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

lazy_static! {
    // Order matters: email first so its local part is never eaten by the
    // digit patterns below.
    static ref RULES: Vec<PatternRule> = vec![
        PatternRule::new(
            PatternKind::Email,
            r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
        ),
        PatternRule::new(PatternKind::Ssn, r"\b\d{3}-\d{2}-\d{4}\b"),
        PatternRule::new(
            PatternKind::Phone,
            r"\b(\+1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
        ),
        PatternRule::new(
            PatternKind::CreditCard,
            r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b",
        ),
        PatternRule::new(PatternKind::AccountId, r"\bACT-\d{4,6}\b"),
    ];
}

/// Replace structured PII with fixed placeholders
pub fn redact_patterns(text: &str) -> String {
    PatternRedactor::new().redact(text)
}

/// Regex layer over a fixed, ordered rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRedactor;

impl PatternRedactor {
    pub fn new() -> Self {
        Self
    }

    /// Kinds in application order
    pub fn kinds(&self) -> impl Iterator<Item = PatternKind> {
        RULES.iter().map(|rule| rule.kind)
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        for rule in RULES.iter() {
            if rule.regex.is_match(&result) {
                result = rule
                    .regex
                    .replace_all(&result, NoExpand(rule.kind.placeholder()))
                    .into_owned();
            }
        }

        result
    }

    /// Same as [`redact`](Self::redact), also reporting how many matches each rule replaced
    pub fn redact_with_report(&self, text: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = text.to_string();
        let mut redactions = Vec::new();

        for rule in RULES.iter() {
            let count = rule.regex.find_iter(&result).count();

            if count > 0 {
                result = rule
                    .regex
                    .replace_all(&result, NoExpand(rule.kind.placeholder()))
                    .into_owned();

                redactions.push(RedactionInfo {
                    kind: rule.kind,
                    count,
                });
            }
        }

        (result, redactions)
    }
}
