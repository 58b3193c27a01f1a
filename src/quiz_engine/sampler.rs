use rand::{rngs::StdRng, Rng, SeedableRng};
use crate::quiz_engine::models::QuestionId;

/// Seeded generator when `seed` is set, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Draw `n` distinct ids uniformly at random from `pool` without replacement.
///
/// Runs a partial Fisher-Yates shuffle over the pool, so the result is fully
/// determined by the pool order and the RNG state.  Asking for more ids than
/// the pool holds returns the whole pool in shuffled order.
pub fn draw<R: Rng>(rng: &mut R, mut pool: Vec<QuestionId>, n: usize) -> Vec<QuestionId> {
    let take = n.min(pool.len());
    for i in 0..take {
        let j = rng.gen_range(i..pool.len());
        pool.swap(i, j);
    }
    pool.truncate(take);
    pool
}

/// Pick a single id uniformly at random, `None` for an empty pool.
pub fn pick<R: Rng>(rng: &mut R, pool: &[QuestionId]) -> Option<QuestionId> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())])
}
