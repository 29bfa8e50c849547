//! Creator token pricing engine
//!
//! Converts social-growth signals (follower counts) into token prices,
//! rationed against a funding treasury: each artist's value compounds with
//! its follower growth, and one market-wide scaling factor keeps the total
//! payout within the treasury budget.

pub mod calculator;
pub mod config;
pub mod engine;
pub mod models;
pub mod validation;

pub use calculator::run_batch;
pub use config::EngineConfig;
pub use engine::{advance_round, demo_roster, load_roster, PricingEngine};
pub use models::*;
pub use validation::{validate_batch, ValidationError};
