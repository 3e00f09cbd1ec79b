use crate::models::{ArbitrageOpportunity, BestOdds, OddsQuote};
use crate::utils::odds::implied_probability;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tracing::warn;

/// Events starting within this window are considered too close to tip-off:
/// their prices move too fast to act on, so their quotes are skipped.
const CUTOFF_HOURS: i64 = 24;

/// Grouping key for quotes that price the same set of complementary
/// outcomes. `line` must be part of the key: Over 2.5 and Over 3.5 are not
/// complements of each other's Unders. f64 is not `Hash`, so the key carries
/// the bit pattern; distinct line values stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    event: String,
    market: String,
    line_bits: u64,
}

impl GroupKey {
    fn for_quote(quote: &OddsQuote) -> Self {
        Self {
            event: quote.event.clone(),
            market: quote.market.clone(),
            line_bits: quote.line.to_bits(),
        }
    }
}

/// Scan a snapshot of stored quotes for arbitrage opportunities.
///
/// A group of quotes for the same (event, market, line) is profitable when
/// the best available decimal price per outcome gives
/// `sum(1 / odds) < 1.0` across at least two outcomes: staking each outcome
/// in proportion to its implied probability then pays out more than the
/// total stake no matter the result.
///
/// Only quotes with a known `commence_time` more than 24 hours out are
/// considered. The returned opportunities are sorted by profit margin,
/// best first.
pub fn find_arbitrage(quotes: &[OddsQuote], now: DateTime<Utc>) -> Vec<ArbitrageOpportunity> {
    let cutoff = now + Duration::hours(CUTOFF_HOURS);

    // Group upcoming quotes by (event, market, line). Quotes without a
    // commence_time cannot be verified as safely in the future, so they are
    // dropped here along with anything starting at or before the cutoff.
    let mut grouped: HashMap<GroupKey, Vec<&OddsQuote>> = HashMap::new();
    for quote in quotes {
        match quote.commence_time {
            Some(t) if t > cutoff => {}
            _ => continue,
        }
        grouped
            .entry(GroupKey::for_quote(quote))
            .or_default()
            .push(quote);
    }

    let mut opportunities = Vec::new();

    for (key, group) in &grouped {
        // Best decimal price per outcome across all books in the group.
        // Exact ties keep the quote seen first.
        let mut best_per_outcome: HashMap<&str, &OddsQuote> = HashMap::new();
        for &quote in group {
            if quote.odds_decimal <= 1.0 {
                // Should have been rejected at ingestion; skip the quote
                // rather than poisoning the whole scan.
                warn!(
                    quote_id = quote.id,
                    odds = quote.odds_decimal,
                    "skipping quote with degenerate decimal odds"
                );
                continue;
            }
            match best_per_outcome.get(quote.outcome.as_str()) {
                Some(current) if current.odds_decimal >= quote.odds_decimal => {}
                _ => {
                    best_per_outcome.insert(quote.outcome.as_str(), quote);
                }
            }
        }

        // An arbitrage needs at least two complementary sides covered.
        if best_per_outcome.len() < 2 {
            continue;
        }

        let inv_sum: f64 = best_per_outcome
            .values()
            .map(|quote| implied_probability(quote.odds_decimal))
            .sum();

        if inv_sum >= 1.0 {
            continue;
        }

        // Percentage profit on total stake, rounded half-away-from-zero to
        // two decimal places.
        let profit_margin = ((1.0 - inv_sum) * 100.0 * 100.0).round() / 100.0;

        let best_odds: Vec<BestOdds> = best_per_outcome
            .values()
            .map(|quote| BestOdds {
                sportsbook: quote.sportsbook.clone(),
                outcome: quote.outcome.clone(),
                odds: quote.odds_decimal,
                odds_american: quote.odds_american,
                stake_pct: implied_probability(quote.odds_decimal) / inv_sum * 100.0,
                date: quote.event_date.clone(),
            })
            .collect();

        // Earliest start among the group's quotes, so the caller sees the
        // soonest moment any leg of the combination goes live.
        let commence_time = group.iter().filter_map(|quote| quote.commence_time).min();

        opportunities.push(ArbitrageOpportunity {
            event: key.event.clone(),
            market: key.market.clone(),
            line: f64::from_bits(key.line_bits),
            profit_margin,
            best_odds,
            commence_time,
        });
    }

    // Sort by profit margin (descending)
    opportunities.sort_by(|a, b| {
        b.profit_margin
            .partial_cmp(&a.profit_margin)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    opportunities
}
