pub mod arbitrage;
pub mod data;
pub mod odds;
