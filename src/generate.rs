use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::closest_pair::Point;
use crate::config::VALUE_RANGE;

/// Fresh pseudo-random array, uniform in [-VALUE_RANGE, VALUE_RANGE].
pub fn random_array(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-VALUE_RANGE..=VALUE_RANGE)).collect()
}

/// Fresh pseudo-random point set in the symmetric square.
pub fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(-VALUE_RANGE..=VALUE_RANGE),
                rng.gen_range(-VALUE_RANGE..=VALUE_RANGE),
            )
        })
        .collect()
}
