//! Synthetic-dataset seeder for Spendcast development and testing.
//!
//! Generates a personal-spending history over the configured date range
//! and writes it as a JSON array of transaction records, the same shape
//! the transactions endpoint serves.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendcast_core::generator::{FakeTextSource, TransactionGenerator, monthly_totals};
use spendcast_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendcast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    let run = &config.generator;

    let seed = run.seed.unwrap_or_else(|| rand::rng().next_u64());
    info!(seed, start = %run.start_date, end = %run.end_date, "Generating synthetic transactions");

    // Amounts/ids and vendor text run on separate streams.
    let rng = StdRng::seed_from_u64(seed);
    let text = FakeTextSource::seeded(seed.wrapping_add(1));

    let mut generator = TransactionGenerator::new(rng, text)?;
    let transactions = generator.generate(run.start_date, run.end_date)?;
    info!(count = transactions.len(), "Generation complete");

    for ((year, month), total) in monthly_totals(&transactions) {
        debug!(year, month, %total, "Monthly spending total");
    }

    let json = serde_json::to_string_pretty(&transactions)?;
    match &run.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Dataset written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
