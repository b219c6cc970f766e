//! Trace client

use std::sync::Arc;

use tracing::{debug, info};
use veil_core::RedactionMode;
use veil_security::Redaction;

use crate::anonymizer::Anonymizer;
use crate::error::{Result, TraceError};
use crate::run::Run;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub project: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.smith.langchain.com".to_string(),
            api_key: None,
            project: "compliance-demo".to_string(),
        }
    }
}

/// Build a client for one session. With redaction on, every outbound run
/// passes through `redaction` first; with it off, runs are sent unmodified.
pub fn build_tracing_client(
    config: ClientConfig,
    mode: RedactionMode,
    redaction: &Arc<Redaction>,
) -> Client {
    let client = Client::new(config);
    match mode {
        RedactionMode::On => {
            client.with_anonymizer(Anonymizer::from_transform(redaction.as_transform()))
        }
        RedactionMode::Off => client,
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    anonymizer: Option<Anonymizer>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            anonymizer: None,
        }
    }

    pub fn with_anonymizer(mut self, anonymizer: Anonymizer) -> Self {
        self.anonymizer = Some(anonymizer);
        self
    }

    pub fn is_anonymizing(&self) -> bool {
        self.anonymizer.is_some()
    }

    pub fn project(&self) -> &str {
        &self.config.project
    }

    /// The run exactly as it would leave the process
    pub fn prepare_run(&self, mut run: Run) -> Run {
        if run.session_name.is_none() {
            run.session_name = Some(self.config.project.clone());
        }

        if let Some(anonymizer) = &self.anonymizer {
            run.inputs = anonymizer.apply(&run.inputs);
            run.outputs = run.outputs.as_ref().map(|outputs| anonymizer.apply(outputs));
            run.error = run.error.as_deref().map(|error| anonymizer.apply_text(error));
        }

        run
    }

    /// Prepare `run` and post it to the trace endpoint. Returns what was sent.
    pub async fn create_run(&self, run: Run) -> Result<Run> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(TraceError::MissingApiKey)?;

        let run = self.prepare_run(run);
        let url = format!("{}/runs", self.config.api_url.trim_end_matches('/'));
        debug!(run_id = %run.id, url = %url, anonymized = self.is_anonymizing(), "Submitting run");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", api_key)
            .json(&run)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TraceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!(run_id = %run.id, project = %self.config.project, "Run submitted");
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymizer::create_anonymizer;
    use crate::run::RunType;
    use serde_json::json;

    #[test]
    fn test_plain_client_sends_unmodified() {
        let client = Client::new(ClientConfig::default());
        let run = Run::new("turn", RunType::Chain, json!({"input": "SSN 123-45-6789"}));

        let prepared = client.prepare_run(run.clone());

        assert!(!client.is_anonymizing());
        assert_eq!(prepared.inputs, run.inputs);
        assert_eq!(prepared.session_name.as_deref(), Some("compliance-demo"));
    }

    #[test]
    fn test_anonymizes_inputs_outputs_error_not_metadata() {
        let client = Client::new(ClientConfig::default())
            .with_anonymizer(create_anonymizer(|text| text.replace("Leia", "<P>")));
        let run = Run::new("turn", RunType::Chain, json!({"input": "I am Leia"}))
            .with_metadata("note", "Leia")
            .finish(json!({"output": "Hello Leia"}))
            .fail("Leia not found");

        let prepared = client.prepare_run(run);

        assert_eq!(prepared.inputs, json!({"input": "I am <P>"}));
        assert_eq!(prepared.outputs, Some(json!({"output": "Hello <P>"})));
        assert_eq!(prepared.error.as_deref(), Some("<P> not found"));
        assert_eq!(prepared.metadata("note"), Some(&json!("Leia")));
    }

    #[test]
    fn test_factory_respects_mode() {
        let redaction = Arc::new(Redaction::pattern_only());

        let on = build_tracing_client(ClientConfig::default(), RedactionMode::On, &redaction);
        let off = build_tracing_client(ClientConfig::default(), RedactionMode::Off, &redaction);

        assert!(on.is_anonymizing());
        assert!(!off.is_anonymizing());
    }

    #[tokio::test]
    async fn test_create_run_requires_api_key() {
        let client = Client::new(ClientConfig::default());
        let run = Run::new("turn", RunType::Chain, json!({}));

        assert!(matches!(
            client.create_run(run).await,
            Err(TraceError::MissingApiKey)
        ));
    }
}
