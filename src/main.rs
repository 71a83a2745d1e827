use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payswitch::application::processor::OrderProcessor;
use payswitch::domain::order::ProviderKind;
use payswitch::infrastructure::provider_factory;
use payswitch::interfaces::csv::order_reader::OrderReader;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file (columns: provider, amount)
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut active = ProviderKind::Stripe;
    let mut processor = OrderProcessor::new(provider_factory(active));

    // Process orders, switching the provider factory whenever a row names a
    // different backend than the active one.
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    for order_result in reader.orders() {
        match order_result {
            Ok(order) => {
                if order.provider != active {
                    processor.set_provider_factory(provider_factory(order.provider));
                    active = order.provider;
                }
                if let Err(e) = processor.process_order(order.amount).await {
                    eprintln!("Error processing order: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading order: {}", e);
            }
        }
    }

    Ok(())
}
