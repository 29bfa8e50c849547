use crate::models::{Artist, ArtistQuote, BatchResult};
use tracing::debug;

/// Calculate the Success Index (SI) from current and previous followers
///
/// SI = current followers / previous followers. A baseline of zero (or below)
/// means there is no measurable prior audience, so the index is pinned to 1
/// (flat growth) rather than dividing by zero.
pub fn compute_success_index(current_followers: f64, previous_followers: f64) -> f64 {
    if previous_followers <= 0.0 {
        1.0
    } else {
        current_followers / previous_followers
    }
}

/// Calculate the Raw Value by compounding the previous raw value with the
/// current success index
pub fn compute_raw_value(previous_raw_value: f64, success_index: f64) -> f64 {
    previous_raw_value * success_index
}

/// Calculate the funding required to pay out an artist's entire supply at
/// its raw value
pub fn compute_required_funding(raw_value: f64, supply: f64) -> f64 {
    raw_value * supply
}

/// Calculate the market-wide scaling factor from the treasury and the total
/// required funding
///
/// When total demand exceeds the treasury, every price is scaled down by the
/// same proportion so the total payout stays within budget. Prices are never
/// scaled up: the factor is capped at 1, and a zero-demand batch gets 1.
pub fn compute_scaling_factor(treasury: f64, total_required_funding: f64) -> f64 {
    if total_required_funding <= 0.0 {
        1.0
    } else {
        (treasury / total_required_funding).min(1.0)
    }
}

/// Calculate the final per-unit price from the raw value and the scaling
/// factor
pub fn compute_final_price(raw_value: f64, scaling_factor: f64) -> f64 {
    raw_value * scaling_factor
}

/// Price a whole batch of artists against one treasury.
///
/// Two phases with a strict barrier between them: first every artist's
/// success index, raw value, and required funding are computed from its own
/// fields only; then one scaling factor is derived from the treasury and the
/// summed demand, and applied uniformly to every raw value. Quotes come back
/// in input order. Pure and stateless: the same inputs always produce the
/// same result.
pub fn run_batch(artists: &[Artist], treasury: f64) -> BatchResult {
    // Phase 1: per-artist values, no cross-artist dependency
    let mut quotes: Vec<ArtistQuote> = artists
        .iter()
        .map(|artist| {
            let success_index =
                compute_success_index(artist.current_followers, artist.previous_followers);
            let raw_value = compute_raw_value(artist.previous_raw_value, success_index);
            let required_funding = compute_required_funding(raw_value, artist.supply);

            ArtistQuote {
                artist: artist.name.clone(),
                success_index,
                raw_value,
                required_funding,
                final_price: 0.0, // filled in after the scaling factor is known
            }
        })
        .collect();

    let total_required_funding: f64 = quotes.iter().map(|q| q.required_funding).sum();

    // Phase 2: one clearing adjustment for the whole market
    let scaling_factor = compute_scaling_factor(treasury, total_required_funding);

    for quote in &mut quotes {
        quote.final_price = compute_final_price(quote.raw_value, scaling_factor);
    }

    // total_paid sums over the same snapshot the quotes were produced from
    let total_paid: f64 = quotes
        .iter()
        .zip(artists)
        .map(|(quote, artist)| quote.final_price * artist.supply)
        .sum();

    debug!(
        "Priced batch of {} artists: required {:.2}, scaling {:.4}, paid {:.2}",
        artists.len(),
        total_required_funding,
        scaling_factor,
        total_paid
    );

    BatchResult {
        results: quotes,
        total_required_funding,
        scaling_factor,
        total_paid,
    }
}
