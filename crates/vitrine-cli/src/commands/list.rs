use anyhow::Result;

use vitrine_core::{AppConfig, Showcase};

pub async fn run(config: &AppConfig) -> Result<()> {
    let showcase = Showcase::load_or_sample(&config.content_path()).await?;

    println!("{}", showcase.store.name);
    if let Some(tagline) = &showcase.store.tagline {
        println!("{}", tagline);
    }

    for section in &showcase.sections {
        println!();
        println!("{} ({} products)", section.title, section.products.len());
        for product in &section.products {
            let tag = product
                .tag
                .as_deref()
                .map(|t| format!(" [{}]", t))
                .unwrap_or_default();
            println!("  {} - {}{}", product.name, product.price, tag);
        }
    }

    if !showcase.faq.is_empty() {
        println!();
        println!("FAQ: {} entries", showcase.faq.len());
    }

    Ok(())
}
