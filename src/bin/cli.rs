use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use odds_arb::api::odds_api::OddsApiClient;
use odds_arb::store::QuoteStore;
use odds_arb::utils::arbitrage::find_arbitrage;
use odds_arb::utils::data::{
    load_quotes_from_file, save_opportunities_to_csv, save_quotes_to_file,
};

#[derive(Parser)]
#[command(name = "odds_arb", about = "Sportsbook odds arbitrage scanner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch current odds from The Odds API and save a quote snapshot
    Fetch {
        /// Sport key, e.g. soccer_epl or americanfootball_nfl
        #[arg(long, default_value = "soccer_epl")]
        sport: String,
        /// Snapshot file to write
        #[arg(long, default_value = "cache/quotes.json")]
        out: String,
    },
    /// Scan a quote snapshot for arbitrage opportunities
    Scan {
        /// Snapshot file to read
        #[arg(long, default_value = "cache/quotes.json")]
        input: String,
        /// Also export the opportunities to a CSV file
        #[arg(long)]
        csv: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Fetch { sport, out } => fetch(&sport, &out).await,
        Command::Scan { input, csv } => scan(&input, csv.as_deref()),
    }
}

async fn fetch(sport: &str, out: &str) -> Result<()> {
    let api_key = std::env::var("ODDS_API_KEY").context("ODDS_API_KEY not set in .env file")?;
    let client = OddsApiClient::new(api_key);

    println!("Fetching {} odds...\n", sport);
    let submissions = client
        .fetch_quotes(sport)
        .await
        .context("Failed to fetch odds")?;

    // Run everything through the store so snapshots only ever contain
    // validated quotes
    let store = QuoteStore::new();
    let mut rejected = 0usize;
    for submission in submissions {
        if let Err(err) = store.insert_quote(submission).await {
            tracing::warn!("rejected quote: {}", err);
            rejected += 1;
        }
    }

    let quotes = store.list_all_quotes().await;
    save_quotes_to_file(&quotes, out)?;
    println!("Saved {} quotes to {}", quotes.len(), out);
    if rejected > 0 {
        println!("Rejected {} malformed quotes", rejected);
    }

    client.check_usage().await?;

    Ok(())
}

fn scan(input: &str, csv: Option<&str>) -> Result<()> {
    let quotes = load_quotes_from_file(input)?;
    println!("Loaded {} quotes from {}\n", quotes.len(), input);

    println!("ARBITRAGE OPPORTUNITIES\n");
    let opportunities = find_arbitrage(&quotes, Utc::now());
    if opportunities.is_empty() {
        println!("No arbitrage opportunities found.");
    } else {
        println!(
            "Found {} Arbitrage Opportunities:\n",
            opportunities.len()
        );
        for (i, arb) in opportunities.iter().enumerate() {
            println!("{}. {}", i + 1, arb.format());
        }
    }

    if let Some(csv_file) = csv {
        if !opportunities.is_empty() {
            save_opportunities_to_csv(&opportunities, csv_file)?;
            println!("\nSaved opportunities to {}", csv_file);
        }
    }

    Ok(())
}
