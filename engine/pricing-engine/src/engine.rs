use anyhow::Context;
use chrono::Utc;
use std::collections::HashMap;
use std::fs;
use tracing::info;

use crate::{
    calculator::run_batch,
    config::EngineConfig,
    models::{Artist, BatchResult, PricingEvent},
    validation::validate_batch,
};

/// Service wrapper around the pure pricing core.
///
/// Validates inputs, prices the batch, and emits events for prices that
/// moved past the configured threshold. The threshold memory is the only
/// state held between calls and never affects the prices themselves.
pub struct PricingEngine {
    config: EngineConfig,
    last_prices: HashMap<String, f64>,
}

impl PricingEngine {
    pub fn new(config: EngineConfig) -> Self {
        info!("🔧 Creating pricing engine");
        Self {
            config,
            last_prices: HashMap::new(),
        }
    }

    /// Validate and price one batch, returning the result plus any events
    pub fn process_batch(
        &mut self,
        artists: &[Artist],
        treasury: f64,
    ) -> anyhow::Result<(BatchResult, Vec<PricingEvent>)> {
        validate_batch(artists, treasury).context("Invalid pricing input")?;

        info!(
            "🔄 Pricing {} artists against a treasury of {:.2}",
            artists.len(),
            treasury
        );

        let batch = run_batch(artists, treasury);

        info!(
            "💰 Batch priced: total required {:.2}, scaling factor {:.4}, total paid {:.2}",
            batch.total_required_funding, batch.scaling_factor, batch.total_paid
        );

        let mut events = Vec::new();
        let mut updated_count = 0;

        if self.config.events.enabled {
            for quote in &batch.results {
                let last_price = self.last_prices.get(&quote.artist).copied().unwrap_or(0.0);
                let delta = quote.final_price - last_price;

                if delta.abs() >= self.config.events.min_change {
                    self.last_prices
                        .insert(quote.artist.clone(), quote.final_price);
                    updated_count += 1;

                    events.push(PricingEvent::PriceUpdated {
                        artist: quote.artist.clone(),
                        final_price: quote.final_price,
                        delta,
                        timestamp: Utc::now(),
                    });
                }
            }

            events.push(PricingEvent::BatchCompleted {
                processed_count: batch.results.len(),
                updated_count,
                timestamp: Utc::now(),
            });
        }

        Ok((batch, events))
    }
}

/// Roll every artist forward into the next round using the quotes just
/// produced for it. Pure: returns a fresh artist list and touches nothing.
pub fn advance_round(artists: &[Artist], batch: &BatchResult) -> Vec<Artist> {
    artists
        .iter()
        .zip(&batch.results)
        .map(|(artist, quote)| artist.advanced(quote))
        .collect()
}

/// The three-artist roster the original simulator seeds with
pub fn demo_roster() -> Vec<Artist> {
    vec![
        Artist {
            name: "Emerging Artist".to_string(),
            current_followers: 3000.0,
            previous_followers: 1500.0,
            supply: 2000.0,
            previous_raw_value: 3.0,
        },
        Artist {
            name: "Rising Star".to_string(),
            current_followers: 5000.0,
            previous_followers: 2000.0,
            supply: 1000.0,
            previous_raw_value: 2.0,
        },
        Artist {
            name: "Hidden Gem".to_string(),
            current_followers: 1000.0,
            previous_followers: 333.33,
            supply: 1000.0,
            previous_raw_value: 1.0,
        },
    ]
}

/// Load an artist roster from a JSON file
pub fn load_roster(path: &str) -> anyhow::Result<Vec<Artist>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path))?;
    let artists: Vec<Artist> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roster file {}", path))?;
    Ok(artists)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_update_per_artist_plus_batch_completed() {
        let mut engine = PricingEngine::new(EngineConfig::default());
        let artists = demo_roster();

        let (batch, events) = engine.process_batch(&artists, 9000.0).unwrap();
        assert_eq!(batch.results.len(), 3);
        // every price moved from the initial 0, plus the batch marker
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events.last().unwrap(),
            PricingEvent::BatchCompleted {
                processed_count: 3,
                updated_count: 3,
                ..
            }
        ));
    }

    #[test]
    fn repeat_batch_emits_no_price_updates() {
        let mut engine = PricingEngine::new(EngineConfig::default());
        let artists = demo_roster();

        engine.process_batch(&artists, 9000.0).unwrap();
        let (_, events) = engine.process_batch(&artists, 9000.0).unwrap();

        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            PricingEvent::BatchCompleted { updated_count: 0, .. }
        ));
    }

    #[test]
    fn disabled_events_stay_silent() {
        let mut config = EngineConfig::default();
        config.events.enabled = false;
        let mut engine = PricingEngine::new(config);

        let (_, events) = engine.process_batch(&demo_roster(), 9000.0).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn rejects_out_of_domain_input() {
        let mut engine = PricingEngine::new(EngineConfig::default());
        let mut artists = demo_roster();
        artists[0].supply = f64::NAN;

        assert!(engine.process_batch(&artists, 9000.0).is_err());
    }

    #[test]
    fn threshold_memory_does_not_change_prices() {
        let mut engine = PricingEngine::new(EngineConfig::default());
        let artists = demo_roster();

        let (first, _) = engine.process_batch(&artists, 9000.0).unwrap();
        let (second, _) = engine.process_batch(&artists, 9000.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn advanced_roster_settles_at_flat_growth() {
        let artists = demo_roster();
        let batch = run_batch(&artists, 1_000_000.0);
        let next = advance_round(&artists, &batch);

        // followers are now flat, so the next round compounds by exactly 1
        let next_batch = run_batch(&next, 1_000_000.0);
        for (quote, prev_quote) in next_batch.results.iter().zip(&batch.results) {
            assert_eq!(quote.success_index, 1.0);
            assert_eq!(quote.raw_value, prev_quote.raw_value);
        }
    }

    #[test]
    fn advance_round_preserves_order_and_length() {
        let artists = demo_roster();
        let batch = run_batch(&artists, 9000.0);
        let next = advance_round(&artists, &batch);
        assert_eq!(next.len(), artists.len());
        for (n, a) in next.iter().zip(&artists) {
            assert_eq!(n.name, a.name);
        }
    }
}
