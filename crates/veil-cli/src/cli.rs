use clap::{Parser, Subcommand};
use veil_core::RedactionMode;

#[derive(Parser)]
#[command(name = "veil")]
#[command(about = "PII redaction for LLM support traces", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Redact text given as an argument or on stdin
    Redact {
        /// Text to redact (reads stdin when omitted)
        text: Option<String>,

        /// Skip the entity layer
        #[arg(long)]
        patterns_only: bool,

        /// Print per-pattern match counts to stderr
        #[arg(long)]
        report: bool,
    },

    /// Show which redaction layers are active
    Status,

    /// Look up a mock customer account by name, email, or account ID
    Lookup {
        identifier: String,

        /// Redact the tool output
        #[arg(long)]
        redact: bool,
    },

    /// Build a traced support turn and print the payload that would be sent
    Trace {
        /// The customer's message
        message: String,

        /// Identifier passed to the account lookup tool
        #[arg(long)]
        lookup: Option<String>,

        /// Redaction mode: on or off (default from config)
        #[arg(long)]
        redaction: Option<RedactionMode>,

        /// Conversation thread ID (random when omitted)
        #[arg(long)]
        thread_id: Option<String>,

        /// Submit the runs to the trace endpoint
        #[arg(long)]
        send: bool,
    },
}
