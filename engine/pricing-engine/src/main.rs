use pricing_engine::{demo_roster, load_roster, EngineConfig, PricingEngine, PricingEvent};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("🚀 Pricing engine starting...");
    info!("Starting pricing engine");

    let config = EngineConfig::from_env()?;
    let treasury = config.simulation.treasury;

    // Roster file path as the first argument, demo roster otherwise
    let artists = match std::env::args().nth(1) {
        Some(path) => {
            println!("📋 Loading roster from {}...", path);
            load_roster(&path)?
        }
        None => {
            println!("📋 No roster file given, using the demo roster");
            demo_roster()
        }
    };

    let mut engine = PricingEngine::new(config);
    let (batch, events) = engine.process_batch(&artists, treasury)?;

    println!("\n  {:<20} {:>8} {:>10} {:>12} {:>10}", "Artist", "SI", "Raw", "Required", "Final");
    for quote in &batch.results {
        println!(
            "  {:<20} {:>8.4} {:>10.4} {:>12.2} {:>10.4}",
            quote.artist, quote.success_index, quote.raw_value, quote.required_funding, quote.final_price
        );
    }

    println!("\n  Treasury:               {:.2}", treasury);
    println!("  Total required funding: {:.2}", batch.total_required_funding);
    println!("  Scaling factor:         {:.4}", batch.scaling_factor);
    println!("  Total paid:             {:.2}", batch.total_paid);
    println!("  Treasury utilization:   {:.1}%", batch.treasury_utilization(treasury));

    let mut price_events = 0;
    for event in &events {
        if let PricingEvent::PriceUpdated { artist, final_price, delta, .. } = event {
            price_events += 1;
            println!("  {} -> {:.4} (Δ {:+.4})", artist, final_price, delta);
        }
    }
    println!("\n✅ Batch complete: {} price events", price_events);
    info!("Pricing engine run completed");

    Ok(())
}
