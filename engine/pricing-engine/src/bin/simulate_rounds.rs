// Multi-round market simulation: prices the demo roster, rolls every
// artist forward (followers become the new baseline, raw value becomes
// the new seed), and reprices, for a configurable number of rounds.

use pricing_engine::{advance_round, demo_roster, run_batch, EngineConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = EngineConfig::from_env()?;
    let treasury = config.simulation.treasury;
    let rounds = config.simulation.rounds;

    println!("🚀 Simulating {} rounds with treasury {:.2}", rounds, treasury);

    let mut artists = demo_roster();
    for round in 1..=rounds {
        let batch = run_batch(&artists, treasury);

        println!("\n📅 Round {}", round);
        for quote in &batch.results {
            println!(
                "  {:<20} SI {:>7.4}  raw {:>9.4}  final {:>9.4}",
                quote.artist, quote.success_index, quote.raw_value, quote.final_price
            );
        }
        println!(
            "  required {:.2}  scaling {:.4}  paid {:.2} ({:.1}% of treasury)",
            batch.total_required_funding,
            batch.scaling_factor,
            batch.total_paid,
            batch.treasury_utilization(treasury)
        );

        artists = advance_round(&artists, &batch);
    }

    println!("\n🎉 Simulation complete");
    Ok(())
}
