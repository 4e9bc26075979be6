mod common;

use common::{NUM_RUNS, SEED};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use algolab::{closest_pair, random_points, ClosestPair, Point};

fn brute_force(pts: &[Point]) -> f64 {
    let mut best = f64::INFINITY;
    for i in 0..pts.len() {
        for j in i + 1..pts.len() {
            let dx = (pts[i].x - pts[j].x) as f64;
            let dy = (pts[i].y - pts[j].y) as f64;
            let d = (dx * dx + dy * dy).sqrt();
            if d < best {
                best = d;
            }
        }
    }
    if best.is_finite() {
        best
    } else {
        0.0
    }
}

#[test]
fn small_examples() {
    let mut pts = vec![Point::new(0, 0), Point::new(3, 4), Point::new(10, 10)];
    assert!((closest_pair(&mut pts).0 - 5.0).abs() < 1e-9);

    let mut dups = vec![Point::new(7, 7), Point::new(7, 7), Point::new(-5, 1)];
    assert_eq!(closest_pair(&mut dups).0, 0.0);
}

#[test]
fn degenerate_inputs_return_zero() {
    let mut empty: Vec<Point> = vec![];
    assert_eq!(closest_pair(&mut empty).0, 0.0);

    let mut one = vec![Point::new(1, 1)];
    assert_eq!(closest_pair(&mut one).0, 0.0);
}

#[test]
fn agrees_with_brute_force() {
    let mut pts = random_points(800, *SEED);
    let expected = brute_force(&pts);
    let (got, _) = closest_pair(&mut pts);
    assert!(
        (got - expected).abs() < 1e-9,
        "got {got}, brute force {expected}, seed {}",
        *SEED
    );
}

#[test]
fn random_sets_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(*SEED);
    for i in 0..*NUM_RUNS {
        let n = rng.gen_range(2..400);
        let mut pts = random_points(n, *SEED + i as u64);
        let expected = brute_force(&pts);
        let (got, _) = closest_pair(&mut pts);
        assert!((got - expected).abs() < 1e-9, "n={n}");
    }
}

#[test]
fn clustered_duplicates_collapse_to_zero() {
    let mut pts: Vec<Point> = (0..256).map(|_| Point::new(13, -13)).collect();
    pts.push(Point::new(500_000, 500_000));
    assert_eq!(closest_pair(&mut pts).0, 0.0);
}

#[test]
fn depth_is_logarithmic() {
    for n in [100usize, 1_000, 10_000] {
        let mut pts = random_points(n, *SEED);
        let mut engine = ClosestPair::new();
        engine.distance(&mut pts);
        let bound = (n as f64).log2().ceil() as u32 + 1;
        assert!(
            engine.metrics.max_depth <= bound,
            "n={n}: depth {} exceeds {bound}",
            engine.metrics.max_depth
        );
    }
}

#[test]
fn input_is_a_reordering_never_a_rewrite() {
    let original = random_points(500, *SEED);
    let mut pts = original.clone();
    closest_pair(&mut pts);
    let mut a: Vec<(i32, i32)> = original.iter().map(|p| (p.x, p.y)).collect();
    let mut b: Vec<(i32, i32)> = pts.iter().map(|p| (p.x, p.y)).collect();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}
