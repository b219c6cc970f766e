use std::io::Read;

use anyhow::Result;
use veil_config::Config;
use veil_security::{PatternRedactor, Redaction};

pub fn handle(text: Option<String>, patterns_only: bool, report: bool, config: &Config) -> Result<()> {
    let input = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let redaction = if patterns_only {
        Redaction::pattern_only()
    } else {
        super::build_redaction(config)
    };

    if report {
        let (_, redactions) = PatternRedactor::new().redact_with_report(&input);
        if redactions.is_empty() {
            eprintln!("No structured PII found");
        }
        for info in redactions {
            eprintln!("  {:<12} {}", info.kind.placeholder(), info.count);
        }
        eprintln!("Backend: {:?}", redaction.backend());
    }

    print!("{}", redaction.redact(&input));
    if !input.ends_with('\n') {
        println!();
    }

    Ok(())
}
