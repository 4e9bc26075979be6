use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::metrics::{Metrics, QuickMetrics};

/// In-place randomized quicksort. Uniform pivot draw, Lomuto partition,
/// explicit recursion into the smaller side only; the outer loop keeps
/// working the larger side, which bounds the stack at O(log n).
pub struct QuickSorter {
    pub metrics: QuickMetrics,
    rng: StdRng,
}

impl QuickSorter {
    pub fn new() -> QuickSorter {
        QuickSorter {
            metrics: QuickMetrics::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic pivot sequence for reproducible counter values.
    pub fn with_seed(seed: u64) -> QuickSorter {
        QuickSorter {
            metrics: QuickMetrics::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn sort(&mut self, arr: &mut [i32]) {
        self.metrics.reset();
        debug!("quicksort, n = {}", arr.len());

        let start = Instant::now();
        self.quick(arr, 0, arr.len(), 1);
        self.metrics.elapsed = start.elapsed();
    }

    /// Sorts arr[lo..hi). Tail recursion on the larger partition is turned
    /// into iteration by shrinking [lo, hi) in place.
    fn quick(&mut self, arr: &mut [i32], mut lo: usize, mut hi: usize, depth: u32) {
        self.metrics.record_depth(depth);

        while hi - lo > 1 {
            let pivot_idx = self.rng.gen_range(lo..hi);
            self.metrics.pivots += 1;
            self.swap(arr, pivot_idx, hi - 1);
            let pivot = arr[hi - 1];

            let mut i = lo;
            for j in lo..hi - 1 {
                self.metrics.compares += 1;
                if arr[j] <= pivot {
                    self.swap(arr, i, j);
                    i += 1;
                }
            }
            self.swap(arr, i, hi - 1);
            let p = i;

            let left = p - lo;
            let right = hi - 1 - p;
            if left < right {
                if left > 1 {
                    self.metrics.recursions += 1;
                    self.quick(arr, lo, p, depth + 1);
                }
                lo = p + 1;
            } else {
                if right > 1 {
                    self.metrics.recursions += 1;
                    self.quick(arr, p + 1, hi, depth + 1);
                }
                hi = p;
            }
        }
    }

    fn swap(&mut self, arr: &mut [i32], i: usize, j: usize) {
        if i == j {
            return;
        }
        self.metrics.swaps += 1;
        arr.swap(i, j);
    }
}

impl Default for QuickSorter {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot entry point with an entropy-seeded pivot sequence.
pub fn quick_sort(arr: &mut [i32]) -> QuickMetrics {
    let mut sorter = QuickSorter::new();
    sorter.sort(arr);
    sorter.metrics
}
