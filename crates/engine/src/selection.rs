//! Mixed sort and smart selection.
//!
//! The mixed sort orders by quadrant priority, then final score, then movie
//! id, so the front of the list is fully deterministic. Smart selection then
//! keeps a guaranteed prefix and fills the rest by sampling a window behind
//! it, which is what keeps repeated identical queries from returning the
//! same ten movies forever.

use crate::scoring::RankedCandidate;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use std::cmp::Ordering;

/// Sort in place: quadrant priority asc, final score desc, movie id asc.
pub fn mixed_sort(ranked: &mut [RankedCandidate]) {
    ranked.sort_by(|a, b| {
        a.quadrant
            .priority()
            .cmp(&b.quadrant.priority())
            .then_with(|| {
                b.final_score
                    .partial_cmp(&a.final_score)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.candidate.movie_id.cmp(&b.candidate.movie_id))
    });
}

/// Pick the final `count` entries from a mixed-sorted list.
///
/// ## Algorithm
/// 1. Keep the first `guaranteed_top` entries verbatim
/// 2. Sample the shortfall without replacement from the next
///    `random_pool_size` entries
/// 3. If the pool cannot cover the shortfall, extend deterministically with
///    the entries after the pool window
pub fn smart_select(
    sorted: Vec<RankedCandidate>,
    count: usize,
    guaranteed_top: usize,
    random_pool_size: usize,
    rng: &mut StdRng,
) -> Vec<RankedCandidate> {
    let prefix_len = guaranteed_top.min(count).min(sorted.len());
    let mut result: Vec<RankedCandidate> = sorted[..prefix_len].to_vec();

    let needed = count - prefix_len;
    if needed == 0 {
        return result;
    }

    let pool_start = prefix_len;
    let pool_len = random_pool_size.min(sorted.len().saturating_sub(pool_start));
    let picks = needed.min(pool_len);
    if picks > 0 {
        for index in sample(rng, pool_len, picks) {
            result.push(sorted[pool_start + index]);
        }
    }

    // Pool exhausted but more entries wanted: continue past the window.
    let mut overflow = pool_start + pool_len;
    while result.len() < count && overflow < sorted.len() {
        result.push(sorted[overflow]);
        overflow += 1;
    }
    result
}
