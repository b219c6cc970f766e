//! Trace run payload

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunType {
    Chain,
    Llm,
    Tool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunExtra {
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// One traced step. `inputs`, `outputs` and `error` are the fields the
/// client anonymizes; `extra.metadata` is sent as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: Uuid,
    pub name: String,
    pub run_type: RunType,
    pub inputs: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_run_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
    #[serde(default)]
    pub extra: RunExtra,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Run {
    pub fn new(name: impl Into<String>, run_type: RunType, inputs: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            run_type,
            inputs,
            outputs: None,
            error: None,
            start_time: OffsetDateTime::now_utc(),
            end_time: None,
            parent_run_id: None,
            session_name: None,
            extra: RunExtra::default(),
            tags: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: &Run) -> Self {
        self.parent_run_id = Some(parent.id);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Record outputs and close the run
    pub fn finish(mut self, outputs: Value) -> Self {
        self.outputs = Some(outputs);
        self.end_time = Some(OffsetDateTime::now_utc());
        self
    }

    /// Record a failure and close the run
    pub fn fail(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self.end_time = Some(OffsetDateTime::now_utc());
        self
    }

    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.extra.metadata.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let parent = Run::new("support_agent", RunType::Chain, json!({}));
        let run = Run::new("lookup_customer_account", RunType::Tool, json!({"identifier": "x"}))
            .with_parent(&parent)
            .with_metadata("redaction_mode", "on")
            .with_tag("demo")
            .finish(json!({"output": "ok"}));

        assert_eq!(run.parent_run_id, Some(parent.id));
        assert_eq!(run.metadata("redaction_mode"), Some(&json!("on")));
        assert!(run.end_time.is_some());
        assert_eq!(run.tags, vec!["demo".to_string()]);
    }

    #[test]
    fn test_serialized_shape() {
        let run = Run::new("model", RunType::Llm, json!({"prompt": "hi"})).fail("boom");
        let value = serde_json::to_value(&run).unwrap();

        assert_eq!(value["run_type"], "llm");
        assert_eq!(value["error"], "boom");
        assert!(value.get("outputs").is_none());
        assert!(value["start_time"].is_string());

        let parsed: Run = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.id, run.id);
    }
}
