use crate::models::QuoteSubmission;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const ODDS_API_BASE_URL: &str = "https://api.the-odds-api.com/v4";

/// Response from The Odds API for a single game
#[derive(Debug, Deserialize)]
struct OddsApiGame {
    sport_title: String,
    commence_time: DateTime<Utc>,
    home_team: String,
    away_team: String,
    bookmakers: Vec<OddsApiBookmaker>,
}

/// Bookmaker data from The Odds API
#[derive(Debug, Deserialize)]
struct OddsApiBookmaker {
    title: String,
    markets: Vec<OddsApiMarket>,
}

/// Market data (e.g., h2h, totals) from The Odds API
#[derive(Debug, Deserialize)]
struct OddsApiMarket {
    key: String,
    outcomes: Vec<OddsApiOutcome>,
}

/// Outcome data for a specific side of a market
#[derive(Debug, Deserialize)]
struct OddsApiOutcome {
    name: String,
    price: f64,
    /// Line for totals/spreads markets; absent for moneyline
    point: Option<f64>,
}

pub struct OddsApiClient {
    api_key: String,
    client: reqwest::Client,
}

impl OddsApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch current odds for a sport and flatten the game/bookmaker/market
    /// tree into one quote submission per priced outcome.
    pub async fn fetch_quotes(&self, sport_key: &str) -> Result<Vec<QuoteSubmission>> {
        let url = format!("{}/sports/{}/odds", ODDS_API_BASE_URL, sport_key);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("regions", "us"),
                ("markets", "h2h,totals"),
                ("oddsFormat", "decimal"),
            ])
            .send()
            .await
            .context("Failed to fetch odds from The Odds API")?;

        if !response.status().is_success() {
            anyhow::bail!("Odds API returned error: {}", response.status());
        }

        let api_games: Vec<OddsApiGame> = response
            .json()
            .await
            .context("Failed to parse Odds API response")?;

        let mut quotes = Vec::new();
        for game in api_games {
            let event = format!("{} @ {}", game.away_team, game.home_team);
            let event_date = game.commence_time.format("%Y-%m-%d").to_string();

            for bookmaker in game.bookmakers {
                for market in &bookmaker.markets {
                    for outcome in &market.outcomes {
                        quotes.push(QuoteSubmission {
                            sportsbook: bookmaker.title.clone(),
                            league: game.sport_title.clone(),
                            event: event.clone(),
                            market: market.key.clone(),
                            line: outcome.point.unwrap_or(0.0),
                            outcome: outcome.name.clone(),
                            odds_decimal: outcome.price,
                            odds_american: None,
                            commence_time: Some(game.commence_time),
                            event_date: Some(event_date.clone()),
                        });
                    }
                }
            }
        }

        Ok(quotes)
    }

    /// Check how many API requests you have remaining
    pub async fn check_usage(&self) -> Result<()> {
        let url = format!("{}/sports", ODDS_API_BASE_URL);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        if let Some(remaining) = response.headers().get("x-requests-remaining") {
            println!("API requests remaining: {:?}", remaining);
        }

        if let Some(used) = response.headers().get("x-requests-used") {
            println!("API requests used: {:?}", used);
        }

        Ok(())
    }
}
