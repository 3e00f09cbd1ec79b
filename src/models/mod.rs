use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single price offered by a sportsbook, as submitted by a client or an
/// ingestion job. The store assigns an id and fills in `odds_american` when
/// it is not supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSubmission {
    pub sportsbook: String,
    pub league: String,
    pub event: String,
    pub market: String,
    /// Numeric threshold for the market (e.g. 2.5 for a totals line).
    /// Moneyline-style markets use 0.0.
    pub line: f64,
    pub outcome: String,
    /// Decimal odds; payout = stake * odds_decimal. Must be > 1.0.
    pub odds_decimal: f64,
    /// American odds (e.g. -110, +150), display only.
    #[serde(default)]
    pub odds_american: Option<i32>,
    /// Scheduled start of the event; quotes without one never enter a scan.
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    /// Display-only date string, independent of `commence_time`.
    #[serde(default)]
    pub event_date: Option<String>,
}

/// A stored odds quote. Immutable once inserted; the detector only ever
/// reads snapshots of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsQuote {
    pub id: u64,
    pub sportsbook: String,
    pub league: String,
    pub event: String,
    pub market: String,
    pub line: f64,
    pub outcome: String,
    pub odds_decimal: f64,
    pub odds_american: i32,
    pub commence_time: Option<DateTime<Utc>>,
    pub event_date: Option<String>,
}

/// The winning price for one outcome inside an arbitrage opportunity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestOdds {
    pub sportsbook: String,
    pub outcome: String,
    /// Decimal odds of the best price found for this outcome.
    pub odds: f64,
    pub odds_american: i32,
    /// Fraction of the total bankroll to stake on this outcome, as a
    /// percentage. Stakes across an opportunity sum to 100.
    pub stake_pct: f64,
    pub date: Option<String>,
}

/// A guaranteed-profit combination of quotes across sportsbooks for one
/// (event, market, line) group. Computed fresh on every scan, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageOpportunity {
    pub event: String,
    pub market: String,
    pub line: f64,
    /// Guaranteed profit as a percentage of total stake, rounded to two
    /// decimal places.
    pub profit_margin: f64,
    pub best_odds: Vec<BestOdds>,
    /// Earliest commence_time among the quotes in the group.
    pub commence_time: Option<DateTime<Utc>>,
}

impl ArbitrageOpportunity {
    pub fn format(&self) -> String {
        let legs: Vec<String> = self
            .best_odds
            .iter()
            .map(|leg| {
                format!(
                    "{} @ {:.2} ({:+}) on {} [{:.2}%]",
                    leg.outcome, leg.odds, leg.odds_american, leg.sportsbook, leg.stake_pct
                )
            })
            .collect();
        format!(
            "{} | {} {} | {} | Profit: {:.2}%",
            self.event,
            self.market,
            self.line,
            legs.join(" / "),
            self.profit_margin
        )
    }
}
