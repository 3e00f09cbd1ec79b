use crate::models::{OddsQuote, QuoteSubmission};
use crate::utils::odds::decimal_to_american;
use thiserror::Error;
use tokio::sync::RwLock;

/// Validation failures at the ingestion boundary. Everything past this
/// boundary can assume well-formed quotes.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("odds_decimal must be greater than 1.0, got {0}")]
    InvalidOdds(f64),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// In-memory quote storage. Quotes are append-only: once inserted they are
/// never mutated or deleted, and scans work off cloned snapshots.
#[derive(Debug, Default)]
pub struct QuoteStore {
    quotes: RwLock<Vec<OddsQuote>>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submission, assign it an id, and persist it. American
    /// odds are derived from the decimal price when the submitter left
    /// them out.
    pub async fn insert_quote(&self, submission: QuoteSubmission) -> Result<OddsQuote, QuoteError> {
        if submission.odds_decimal <= 1.0 {
            return Err(QuoteError::InvalidOdds(submission.odds_decimal));
        }
        for (name, value) in [
            ("sportsbook", &submission.sportsbook),
            ("league", &submission.league),
            ("event", &submission.event),
            ("market", &submission.market),
            ("outcome", &submission.outcome),
        ] {
            if value.trim().is_empty() {
                return Err(QuoteError::MissingField(name));
            }
        }

        let odds_american = submission
            .odds_american
            .unwrap_or_else(|| decimal_to_american(submission.odds_decimal));

        let mut quotes = self.quotes.write().await;
        let quote = OddsQuote {
            id: quotes.len() as u64 + 1,
            sportsbook: submission.sportsbook,
            league: submission.league,
            event: submission.event,
            market: submission.market,
            line: submission.line,
            outcome: submission.outcome,
            odds_decimal: submission.odds_decimal,
            odds_american,
            commence_time: submission.commence_time,
            event_date: submission.event_date,
        };
        quotes.push(quote.clone());
        Ok(quote)
    }

    /// Snapshot of every stored quote, in insertion order.
    pub async fn list_all_quotes(&self) -> Vec<OddsQuote> {
        self.quotes.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(odds_decimal: f64) -> QuoteSubmission {
        QuoteSubmission {
            sportsbook: "BookX".to_string(),
            league: "EPL".to_string(),
            event: "E1".to_string(),
            market: "totals".to_string(),
            line: 2.5,
            outcome: "Over".to_string(),
            odds_decimal,
            odds_american: None,
            commence_time: None,
            event_date: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_derives_american_odds() {
        let store = QuoteStore::new();

        let first = store.insert_quote(submission(2.5)).await.unwrap();
        let second = store.insert_quote(submission(1.5)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.odds_american, 150);
        assert_eq!(second.odds_american, -200);

        let all = store.list_all_quotes().await;
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_supplied_american_odds_kept() {
        let store = QuoteStore::new();
        let mut sub = submission(1.91);
        sub.odds_american = Some(-110);

        let stored = store.insert_quote(sub).await.unwrap();
        assert_eq!(stored.odds_american, -110);
    }

    #[tokio::test]
    async fn test_rejects_sub_unity_odds() {
        let store = QuoteStore::new();

        assert!(matches!(
            store.insert_quote(submission(1.0)).await,
            Err(QuoteError::InvalidOdds(_))
        ));
        assert!(matches!(
            store.insert_quote(submission(0.0)).await,
            Err(QuoteError::InvalidOdds(_))
        ));
        assert!(store.list_all_quotes().await.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_blank_identifying_fields() {
        let store = QuoteStore::new();
        let mut sub = submission(2.0);
        sub.event = "  ".to_string();

        assert!(matches!(
            store.insert_quote(sub).await,
            Err(QuoteError::MissingField("event"))
        ));
    }
}
