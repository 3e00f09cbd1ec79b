use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use odds_arb::models::QuoteSubmission;
use odds_arb::store::QuoteStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

// Shared store across handlers
type SharedStore = Arc<QuoteStore>;

async fn add_quote(
    State(store): State<SharedStore>,
    Json(submission): Json<QuoteSubmission>,
) -> impl IntoResponse {
    match store.insert_quote(submission).await {
        Ok(quote) => (StatusCode::CREATED, Json(quote)).into_response(),
        Err(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response(),
    }
}

async fn list_quotes(State(store): State<SharedStore>) -> impl IntoResponse {
    Json(store.list_all_quotes().await)
}

async fn arbitrage(State(store): State<SharedStore>) -> impl IntoResponse {
    let quotes = store.list_all_quotes().await;
    let opportunities = odds_arb::detect_opportunities(&quotes);
    tracing::info!(
        quotes = quotes.len(),
        opportunities = opportunities.len(),
        "arbitrage scan complete"
    );
    Json(opportunities)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let store: SharedStore = Arc::new(QuoteStore::new());

    // Permissive CORS so a local frontend can hit the API during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with routes
    let app = Router::new()
        .route("/odds", post(add_quote).get(list_quotes))
        .route("/arbitrage", get(arbitrage))
        .layer(cors)
        .with_state(store);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    println!("Starting web server at http://{}", addr);
    println!("Press Ctrl+C to stop\n");

    // Run server
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    axum::serve(listener, app).await.unwrap();
}
