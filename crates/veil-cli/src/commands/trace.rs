use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use tracing::info;
use veil_accounts::lookup_customer_account;
use veil_config::Config;
use veil_core::RedactionMode;
use veil_trace::{ClientConfig, Run, RunType, build_tracing_client};

pub async fn handle(
    message: String,
    lookup: Option<String>,
    redaction: Option<RedactionMode>,
    thread_id: Option<String>,
    send: bool,
    config: &Config,
) -> Result<()> {
    let mode = redaction.unwrap_or_else(|| RedactionMode::from(config.redaction.enabled));
    let thread_id = thread_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let client_config = ClientConfig {
        api_url: config.tracing.api_url.clone(),
        api_key: config.api_key(),
        project: config.tracing.project.clone(),
    };
    let facade = Arc::new(super::build_redaction(config));
    let client = build_tracing_client(client_config, mode, &facade);

    let runs = support_turn(&message, lookup.as_deref(), mode, &thread_id);

    let mut outbound = Vec::with_capacity(runs.len());
    for run in runs {
        let run = if send {
            client.create_run(run).await?
        } else {
            client.prepare_run(run)
        };
        outbound.push(run);
    }

    if send {
        info!(
            runs = outbound.len(),
            project = client.project(),
            redaction_mode = %mode,
            "Trace submitted"
        );
    }
    println!("{}", serde_json::to_string_pretty(&outbound)?);

    Ok(())
}

/// Runs for one customer turn: the agent chain and, if requested, its lookup tool call
fn support_turn(message: &str, lookup: Option<&str>, mode: RedactionMode, thread_id: &str) -> Vec<Run> {
    let user = json!({"role": "user", "content": message});
    let agent = Run::new(
        "support_agent",
        RunType::Chain,
        json!({"messages": [user.clone()]}),
    )
    .with_metadata("redaction_mode", mode.as_str())
    .with_metadata("thread_id", thread_id);

    let Some(identifier) = lookup else {
        return vec![agent.finish(json!({"messages": [user]}))];
    };

    let tool_output = lookup_customer_account(identifier);
    let tool = Run::new(
        "lookup_customer_account",
        RunType::Tool,
        json!({"identifier": identifier}),
    )
    .with_parent(&agent)
    .with_metadata("redaction_mode", mode.as_str())
    .with_metadata("thread_id", thread_id)
    .finish(json!({"output": tool_output}));

    let agent = agent.finish(json!({
        "messages": [user, {"role": "tool", "content": tool_output}]
    }));

    vec![agent, tool]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_without_lookup() {
        let runs = support_turn("hello", None, RedactionMode::On, "t-1");

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].metadata("redaction_mode"), Some(&json!("on")));
        assert_eq!(runs[0].metadata("thread_id"), Some(&json!("t-1")));
    }

    #[test]
    fn test_turn_with_lookup() {
        let runs = support_turn("what's my balance?", Some("ACT-55320"), RedactionMode::Off, "t-2");

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].parent_run_id, Some(runs[0].id));
        assert_eq!(runs[1].run_type, RunType::Tool);

        let output = runs[1].outputs.as_ref().unwrap()["output"].as_str().unwrap();
        assert!(output.contains("Han Solo"));
    }
}
