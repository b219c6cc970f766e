use anyhow::Result;
use veil_config::Config;

pub fn handle(config: &Config) -> Result<()> {
    println!("Config: {}", Config::config_path().display());

    if !config.redaction.enabled {
        println!("PII Redaction: off");
        println!("Traces contain raw PII - for demo comparison only.");
        return Ok(());
    }

    println!("PII Redaction: on");
    println!("Traces are redacted before leaving this process.");

    let redaction = super::build_redaction(config);
    println!("Active redaction layers:");
    for layer in redaction.layers() {
        println!("  \u{2022} {}", layer);
    }

    Ok(())
}
