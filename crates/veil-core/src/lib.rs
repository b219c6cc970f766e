//! Core domain types for veil
//!
//! This crate contains:
//! - Entity kinds and detection results shared by the redaction layers
//! - Redaction mode and backend capability flags
//! - The common error type

pub mod entity;
pub mod error;
pub mod mode;

pub use entity::{EntityKind, RecognizerResult};
pub use error::{Error, Result};
pub use mode::{RedactionBackend, RedactionMode};
