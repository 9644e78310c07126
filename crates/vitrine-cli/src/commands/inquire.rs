use anyhow::Result;
use chrono::Local;

use vitrine_core::inquiry::format_subject;
use vitrine_core::{AppConfig, Inquiry, RelayClient};

pub async fn run(
    config: &AppConfig,
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
) -> Result<()> {
    let inquiry = Inquiry {
        name,
        email,
        phone,
        subject,
        message,
    };
    inquiry.validate()?;

    let client = RelayClient::new(&config.contact.relay_url)?;
    let response = client.send(&inquiry).await?;

    println!("{}", response.message);
    println!("Subject: {}", format_subject(&inquiry.subject));
    println!("Submitted: {}", Local::now().format("%Y-%m-%d %H:%M"));

    Ok(())
}
