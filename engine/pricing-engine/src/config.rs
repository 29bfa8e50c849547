use serde::{Deserialize, Serialize};

/// Configuration for the pricing engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Event emission configuration
    pub events: EventConfig,

    /// Defaults for the simulator binaries
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    /// Enable event emission
    pub enabled: bool,

    /// Minimum final-price change (in funding units) to emit an event
    pub min_change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Treasury used when the caller does not supply one
    pub treasury: f64,

    /// Number of rounds the round simulator runs
    pub rounds: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            events: EventConfig {
                enabled: true,
                min_change: 0.0001, // Emit on any visible change
            },
            simulation: SimulationConfig {
                treasury: 9000.0,
                rounds: 4,
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(treasury) = std::env::var("PRICING_TREASURY") {
            config.simulation.treasury = treasury.parse().unwrap_or(9000.0);
        }

        if let Ok(rounds) = std::env::var("PRICING_ROUNDS") {
            config.simulation.rounds = rounds.parse().unwrap_or(4);
        }

        if let Ok(min_change) = std::env::var("PRICING_EVENT_MIN_CHANGE") {
            config.events.min_change = min_change.parse().unwrap_or(0.0001);
        }

        if let Ok(enabled) = std::env::var("PRICING_EVENTS_ENABLED") {
            config.events.enabled = enabled.parse().unwrap_or(true);
        }

        Ok(config)
    }
}
