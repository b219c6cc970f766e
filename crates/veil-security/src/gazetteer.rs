//! Gazetteer-backed entity engine
//!
//! A lightweight stand-in for a statistical NER model: names and places come
//! from word lists shipped as a JSON model, structured kinds from regexes.
//! The model is loaded once; a model without names or places still builds,
//! and is then rejected by the canary analysis.

use std::collections::HashSet;
use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use veil_core::{EntityKind, RecognizerResult};

use crate::engine::{EntityEngine, replace_spans};
use crate::error::InitError;

#[cfg(feature = "bundled-model")]
const BUNDLED_MODEL: &str = include_str!("../assets/en_gazetteer.json");

const FULL_NAME_SCORE: f32 = 0.85;
const FIRST_NAME_SCORE: f32 = 0.6;
const HONORIFIC_SCORE: f32 = 0.6;
const LOCATION_SCORE: f32 = 0.85;
const EMAIL_SCORE: f32 = 1.0;
const PHONE_SCORE: f32 = 0.75;
const SSN_SCORE: f32 = 0.85;
const CREDIT_CARD_SCORE: f32 = 1.0;

/// Maximum number of capitalized words that may follow a first name
const MAX_NAME_TAIL: usize = 2;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"\b[A-Z][a-z]+(?:['-][A-Za-z]+)*\b").unwrap();
    static ref HONORIFIC_REGEX: Regex =
        Regex::new(r"\b(?:Mr|Mrs|Ms|Miss|Dr)\.?\s+([A-Z][a-z]+(?:['-][A-Za-z]+)*)\b").unwrap();
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref PHONE_REGEX: Regex =
        Regex::new(r"(?:\+1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]\d{4}\b").unwrap();
    static ref SSN_REGEX: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    static ref CREDIT_CARD_REGEX: Regex = Regex::new(r"\b(?:\d[ -]?){12,18}\d\b").unwrap();
}

/// Word lists the engine recognizes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GazetteerModel {
    pub name: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub first_names: Vec<String>,
    #[serde(default)]
    pub last_names: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

/// Where to load the model from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    Bundled,
    File(PathBuf),
}

impl ModelSource {
    pub fn load(&self) -> Result<GazetteerModel, InitError> {
        match self {
            ModelSource::Bundled => bundled_model(),
            ModelSource::File(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| InitError::ModelLoad {
                        path: path.clone(),
                        source,
                    })?;
                Ok(serde_json::from_str(&content)?)
            }
        }
    }
}

#[cfg(feature = "bundled-model")]
fn bundled_model() -> Result<GazetteerModel, InitError> {
    Ok(serde_json::from_str(BUNDLED_MODEL)?)
}

#[cfg(not(feature = "bundled-model"))]
fn bundled_model() -> Result<GazetteerModel, InitError> {
    Err(InitError::ModelMissing)
}

pub struct GazetteerEngine {
    name: String,
    first_names: HashSet<String>,
    last_names: HashSet<String>,
    locations: Option<Regex>,
}

impl GazetteerEngine {
    pub fn new(model: GazetteerModel) -> Result<Self, InitError> {
        let locations = location_regex(&model.locations)?;

        debug!(
            model = %model.name,
            first_names = model.first_names.len(),
            last_names = model.last_names.len(),
            locations = model.locations.len(),
            "Built gazetteer engine"
        );

        Ok(Self {
            name: model.name,
            first_names: model.first_names.into_iter().collect(),
            last_names: model.last_names.into_iter().collect(),
            locations,
        })
    }

    pub fn from_source(source: &ModelSource) -> Result<Self, InitError> {
        Self::new(source.load()?)
    }

    fn find_locations(&self, text: &str) -> Vec<RecognizerResult> {
        let Some(regex) = &self.locations else {
            return Vec::new();
        };

        regex
            .find_iter(text)
            .map(|m| RecognizerResult::new(EntityKind::Location, m.start(), m.end(), LOCATION_SCORE))
            .collect()
    }

    fn find_persons(&self, text: &str, locations: &[RecognizerResult]) -> Vec<RecognizerResult> {
        let words: Vec<_> = WORD_REGEX.find_iter(text).collect();
        let starts_location = |start: usize| locations.iter().any(|loc| loc.start == start);

        let mut results = Vec::new();
        let mut i = 0;
        while i < words.len() {
            let first = words[i];
            if !self.first_names.contains(first.as_str()) {
                i += 1;
                continue;
            }

            let mut end = first.end();
            let mut j = i + 1;
            while j < words.len() && j - i <= MAX_NAME_TAIL {
                let next = words[j];
                if &text[end..next.start()] != " " || starts_location(next.start()) {
                    break;
                }
                end = next.end();
                j += 1;
            }

            let score = if j > i + 1 {
                FULL_NAME_SCORE
            } else {
                FIRST_NAME_SCORE
            };
            results.push(RecognizerResult::new(EntityKind::Person, first.start(), end, score));
            i = j;
        }

        for caps in HONORIFIC_REGEX.captures_iter(text) {
            if let Some(surname) = caps.get(1) {
                let score = if self.last_names.contains(surname.as_str()) {
                    FULL_NAME_SCORE
                } else {
                    HONORIFIC_SCORE
                };
                results.push(RecognizerResult::new(
                    EntityKind::Person,
                    surname.start(),
                    surname.end(),
                    score,
                ));
            }
        }

        results
    }
}

impl EntityEngine for GazetteerEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, text: &str, entities: &[EntityKind]) -> Vec<RecognizerResult> {
        let wants = |kind: EntityKind| entities.contains(&kind);
        let mut results = Vec::new();

        // Persons are cut short at location boundaries, so locations are
        // always computed even when only PERSON is requested.
        let locations = self.find_locations(text);

        if wants(EntityKind::Person) {
            results.extend(self.find_persons(text, &locations));
        }
        if wants(EntityKind::Location) {
            results.extend(locations);
        }
        if wants(EntityKind::EmailAddress) {
            results.extend(regex_results(&EMAIL_REGEX, text, EntityKind::EmailAddress, EMAIL_SCORE));
        }
        if wants(EntityKind::PhoneNumber) {
            results.extend(regex_results(&PHONE_REGEX, text, EntityKind::PhoneNumber, PHONE_SCORE));
        }
        if wants(EntityKind::UsSsn) {
            results.extend(regex_results(&SSN_REGEX, text, EntityKind::UsSsn, SSN_SCORE));
        }
        if wants(EntityKind::CreditCard) {
            results.extend(
                CREDIT_CARD_REGEX
                    .find_iter(text)
                    .filter(|m| luhn_valid(m.as_str()))
                    .map(|m| {
                        RecognizerResult::new(
                            EntityKind::CreditCard,
                            m.start(),
                            m.end(),
                            CREDIT_CARD_SCORE,
                        )
                    }),
            );
        }

        results
    }

    fn anonymize(&self, text: &str, results: &[RecognizerResult]) -> String {
        replace_spans(text, results)
    }
}

fn regex_results(regex: &Regex, text: &str, kind: EntityKind, score: f32) -> Vec<RecognizerResult> {
    regex
        .find_iter(text)
        .map(|m| RecognizerResult::new(kind, m.start(), m.end(), score))
        .collect()
}

fn location_regex(locations: &[String]) -> Result<Option<Regex>, InitError> {
    let mut phrases: Vec<&str> = locations
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if phrases.is_empty() {
        return Ok(None);
    }

    // Longest first so "New York City" wins over "New York"
    phrases.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    phrases.dedup();

    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"\b(?:{})\b", alternation))
        .map(Some)
        .map_err(|e| InitError::Engine(e.to_string()))
}

fn luhn_valid(candidate: &str) -> bool {
    let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
    if !(13..=19).contains(&digits.len()) {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
