use anyhow::Result;
use veil_accounts::lookup_customer_account;
use veil_config::Config;

pub fn handle(identifier: &str, redact: bool, config: &Config) -> Result<()> {
    let output = lookup_customer_account(identifier);

    if redact {
        println!("{}", super::build_redaction(config).redact(&output));
    } else {
        println!("{}", output);
    }

    Ok(())
}
