//! Trace submission with PII anonymization
//!
//! This crate provides:
//! - [`Run`]: the trace payload sent for each step of a conversation
//! - [`Anonymizer`]: applies a text transform to every string in a payload
//! - [`Client`]: prepares and submits runs, anonymizing them when configured
//! - [`build_tracing_client`]: binds the redaction facade according to the session's mode

pub mod anonymizer;
pub mod client;
pub mod error;
pub mod run;

pub use anonymizer::{Anonymizer, create_anonymizer};
pub use client::{Client, ClientConfig, build_tracing_client};
pub use error::{Result, TraceError};
pub use run::{Run, RunType};
