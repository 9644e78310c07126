use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "A terminal product showcase with looping carousels")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List showcase sections and products
    List,
    /// Send a contact inquiry through the relay server
    Inquire {
        /// Your name
        #[arg(short = 'n', long)]
        name: String,
        /// Your email address
        #[arg(short = 'e', long)]
        email: String,
        /// Your phone number
        #[arg(short = 'p', long)]
        phone: String,
        /// Subject slug: custom-furniture, interior-design, product-inquiry,
        /// order-status, warranty-support, or other
        #[arg(short = 's', long, default_value = "other")]
        subject: String,
        /// Message body
        #[arg(short = 'm', long)]
        message: String,
    },
    /// Check the inquiry relay health endpoint
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize logging (RUST_LOG overrides the configured level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::List) => commands::list::run(&config).await,
        Some(Commands::Inquire {
            name,
            email,
            phone,
            subject,
            message,
        }) => commands::inquire::run(&config, name, email, phone, subject, message).await,
        Some(Commands::Health) => commands::health::run(&config).await,
    }
}
