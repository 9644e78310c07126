use anyhow::{anyhow, Result};

use vitrine_core::{AppConfig, RelayClient};

pub async fn run(config: &AppConfig) -> Result<()> {
    let client = RelayClient::new(&config.contact.relay_url)?;

    match client.health().await {
        Ok(status) => {
            println!("Relay OK: {}", status);
            Ok(())
        }
        Err(e) => Err(anyhow!(
            "Relay unreachable at {}: {}",
            config.contact.relay_url,
            e
        )),
    }
}
