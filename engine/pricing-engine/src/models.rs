use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Artist record supplied by the caller for one pricing round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    pub current_followers: f64,
    pub previous_followers: f64,
    pub supply: f64,
    pub previous_raw_value: f64,
}

/// Per-artist pricing result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistQuote {
    pub artist: String,
    pub success_index: f64,
    pub raw_value: f64,
    pub required_funding: f64,
    pub final_price: f64,
}

/// Result of one batch computation: per-artist quotes in input order
/// plus the market-wide aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub results: Vec<ArtistQuote>,
    pub total_required_funding: f64,
    pub scaling_factor: f64,
    pub total_paid: f64,
}

/// Events emitted by the pricing engine
#[derive(Debug, Clone, Serialize)]
pub enum PricingEvent {
    /// An artist's final price moved past the configured threshold
    PriceUpdated {
        artist: String,
        final_price: f64,
        delta: f64,
        timestamp: DateTime<Utc>,
    },

    /// Batch processing completed
    BatchCompleted {
        processed_count: usize,
        updated_count: usize,
        timestamp: DateTime<Utc>,
    },
}

impl Artist {
    /// Roll this artist forward into the next round: the measured followers
    /// become the new baseline and the quoted raw value becomes the new seed.
    pub fn advanced(&self, quote: &ArtistQuote) -> Artist {
        Artist {
            name: self.name.clone(),
            current_followers: self.current_followers,
            previous_followers: self.current_followers,
            supply: self.supply,
            previous_raw_value: quote.raw_value,
        }
    }
}

impl BatchResult {
    /// Share of the treasury actually paid out, in percent. Zero when the
    /// treasury is empty.
    pub fn treasury_utilization(&self, treasury: f64) -> f64 {
        if treasury > 0.0 {
            (self.total_paid / treasury) * 100.0
        } else {
            0.0
        }
    }
}
