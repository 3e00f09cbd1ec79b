use crate::models::{ArbitrageOpportunity, OddsQuote};
use anyhow::{Context, Result};

/// Save a quote snapshot to a JSON file
pub fn save_quotes_to_file(quotes: &[OddsQuote], path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(quotes).context("Failed to serialize quotes")?;
    std::fs::write(path, json).context("Failed to write quotes file")?;
    Ok(())
}

/// Load a quote snapshot from a JSON file
pub fn load_quotes_from_file(path: &str) -> Result<Vec<OddsQuote>> {
    let json = std::fs::read_to_string(path).context("Failed to read quotes file")?;
    let quotes: Vec<OddsQuote> =
        serde_json::from_str(&json).context("Failed to deserialize quotes")?;
    Ok(quotes)
}

/// Save arbitrage opportunities to CSV, one row per leg
pub fn save_opportunities_to_csv(
    opportunities: &[ArbitrageOpportunity],
    filename: &str,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(filename).context("Failed to create CSV file")?;

    writer.write_record([
        "Event",
        "Market",
        "Line",
        "Profit Margin (%)",
        "Sportsbook",
        "Outcome",
        "Odds (Decimal)",
        "Odds (American)",
        "Stake (%)",
        "Date",
    ])?;

    for arb in opportunities {
        for leg in &arb.best_odds {
            writer.write_record([
                arb.event.clone(),
                arb.market.clone(),
                format!("{}", arb.line),
                format!("{:.2}", arb.profit_margin),
                leg.sportsbook.clone(),
                leg.outcome.clone(),
                format!("{}", leg.odds),
                format!("{:+}", leg.odds_american),
                format!("{:.2}", leg.stake_pct),
                leg.date.clone().unwrap_or_default(),
            ])?;
        }
    }

    writer.flush().context("Failed to flush CSV file")?;
    Ok(())
}
