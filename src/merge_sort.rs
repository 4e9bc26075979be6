use log::debug;
use std::time::Instant;

use crate::base_case::insertion_sort;
use crate::config::CUTOFF;
use crate::metrics::{MergeMetrics, Metrics};

/// Stable hybrid merge sort: top-down splitting, insertion sort below
/// CUTOFF, merge skipped when the halves are already ordered at the
/// boundary. Sorts the caller's slice in place.
pub struct MergeSorter {
    pub metrics: MergeMetrics,
}

impl MergeSorter {
    pub fn new() -> MergeSorter {
        MergeSorter {
            metrics: MergeMetrics::default(),
        }
    }

    pub fn sort(&mut self, arr: &mut [i32]) {
        self.metrics.reset();
        debug!("merge sort, n = {}", arr.len());

        let mut buf = vec![0i32; arr.len()];
        let start = Instant::now();
        self.sort_range(arr, 0, arr.len(), &mut buf, 1);
        self.metrics.elapsed = start.elapsed();
    }

    fn sort_range(&mut self, arr: &mut [i32], lo: usize, hi: usize, buf: &mut [i32], depth: u32) {
        self.metrics.record_depth(depth);

        let n = hi - lo;
        if n <= 1 {
            return;
        }

        if n <= CUTOFF {
            insertion_sort(&mut arr[lo..hi], &mut self.metrics);
            self.metrics.insertion_calls += 1;
            return;
        }

        let mid = lo + n / 2;
        self.sort_range(arr, lo, mid, buf, depth + 1);
        self.sort_range(arr, mid, hi, buf, depth + 1);

        // halves already ordered across the boundary: one compare, no merge
        self.metrics.compares += 1;
        if arr[mid - 1] <= arr[mid] {
            return;
        }

        self.merge(arr, lo, mid, hi, buf);
        self.metrics.merges += 1;
    }

    fn merge(&mut self, arr: &mut [i32], lo: usize, mid: usize, hi: usize, buf: &mut [i32]) {
        let mut i = lo;
        let mut j = mid;
        let mut k = 0;

        while i < mid && j < hi {
            self.metrics.compares += 1;
            if arr[i] <= arr[j] {
                buf[k] = arr[i];
                i += 1;
            } else {
                buf[k] = arr[j];
                j += 1;
            }
            k += 1;
            self.metrics.copies += 1;
        }

        while i < mid {
            buf[k] = arr[i];
            i += 1;
            k += 1;
            self.metrics.copies += 1;
        }
        while j < hi {
            buf[k] = arr[j];
            j += 1;
            k += 1;
            self.metrics.copies += 1;
        }

        for t in 0..k {
            arr[lo + t] = buf[t];
            self.metrics.copies += 1;
        }
    }
}

impl Default for MergeSorter {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot entry point; returns the call's metrics snapshot.
pub fn merge_sort(arr: &mut [i32]) -> MergeMetrics {
    let mut sorter = MergeSorter::new();
    sorter.sort(arr);
    sorter.metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_never_merges() {
        let mut arr: Vec<i32> = (0..2000).collect();
        let m = merge_sort(&mut arr);
        assert_eq!(m.merges, 0);
        assert!(m.compares > 0);
    }

    #[test]
    fn small_input_is_one_insertion_call() {
        let mut arr = vec![3, 1, 2];
        let m = merge_sort(&mut arr);
        assert_eq!(arr, vec![1, 2, 3]);
        assert_eq!(m.insertion_calls, 1);
        assert_eq!(m.merges, 0);
        assert_eq!(m.max_depth, 1);
    }

    #[test]
    fn stable_for_equal_keys() {
        // all-equal input: the short-circuit fires at every internal node
        let mut arr = vec![7; 1000];
        let m = merge_sort(&mut arr);
        assert_eq!(m.merges, 0);
        assert!(arr.iter().all(|&v| v == 7));
    }
}
