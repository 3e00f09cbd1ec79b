pub mod api;
pub mod models;
pub mod store;
pub mod utils;

pub use api::*;
pub use models::*;
pub use store::*;
pub use utils::*;

use chrono::Utc;

/// Transport-facing entry point: scan a snapshot of stored quotes against
/// the current clock. Pure apart from reading the clock; callers that need
/// a fixed reference time use [`utils::arbitrage::find_arbitrage`] directly.
pub fn detect_opportunities(
    all_quotes: &[models::OddsQuote],
) -> Vec<models::ArbitrageOpportunity> {
    utils::arbitrage::find_arbitrage(all_quotes, Utc::now())
}
