//! The "drunk man" random walk.
//!
//! A seeded ±1 walk shown next to the real price chart for comparison. It is
//! never fed into any other computation.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::SyntheticWalk;

pub fn simulate_random_walk(len: usize, seed: u64) -> SyntheticWalk {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = 0i64;
    let mut positions = Vec::with_capacity(len);

    for _ in 0..len {
        position += if rng.gen_bool(0.5) { 1 } else { -1 };
        positions.push(position);
    }

    SyntheticWalk { seed, positions }
}
