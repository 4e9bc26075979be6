use log::debug;
use std::time::Instant;

use crate::base_case::insertion_sort;
use crate::config::GROUP;
use crate::error::Error;
use crate::metrics::{Metrics, SelectMetrics};

/// Deterministic linear-time k-th order statistic via median-of-medians.
/// Destructive: partitions the caller's slice in place, like the sorts.
pub struct Selector {
    pub metrics: SelectMetrics,
}

impl Selector {
    pub fn new() -> Selector {
        Selector {
            metrics: SelectMetrics::default(),
        }
    }

    /// Returns the 0-indexed k-th smallest value of `arr`.
    pub fn select(&mut self, arr: &mut [i32], k: usize) -> Result<i32, Error> {
        self.metrics.reset();
        if arr.is_empty() || k >= arr.len() {
            return Err(Error::InvalidArgument(format!(
                "selection index {k} out of range for length {}",
                arr.len()
            )));
        }
        debug!("select, n = {}, k = {}", arr.len(), k);

        let start = Instant::now();
        let res = self.select_range(arr, 0, arr.len(), k, 1);
        self.metrics.elapsed = start.elapsed();
        Ok(res)
    }

    fn select_range(&mut self, arr: &mut [i32], lo: usize, hi: usize, k: usize, depth: u32) -> i32 {
        self.metrics.recursions += 1;
        self.metrics.record_depth(depth);

        let n = hi - lo;
        if n <= GROUP {
            insertion_sort(&mut arr[lo..hi], &mut self.metrics);
            return arr[lo + k];
        }

        let groups = (n + GROUP - 1) / GROUP;
        let mut medians = Vec::with_capacity(groups);
        for g in 0..groups {
            let start = lo + g * GROUP;
            let end = (start + GROUP).min(hi);
            insertion_sort(&mut arr[start..end], &mut self.metrics);
            medians.push(arr[start + (end - start) / 2]);
        }
        let pivot = self.select_range(&mut medians, 0, groups, groups / 2, depth + 1);

        let (lt, gt) = self.partition3(arr, lo, hi, pivot);

        let left_size = lt - lo;
        let mid_size = gt - lt + 1;
        if k < left_size {
            self.select_range(arr, lo, lt, k, depth + 1)
        } else if k < left_size + mid_size {
            pivot
        } else {
            self.select_range(arr, gt + 1, hi, k - left_size - mid_size, depth + 1)
        }
    }

    /// Dutch-flag partition of arr[lo..hi) around `pivot`. Returns the
    /// inclusive bounds (lt, gt) of the "== pivot" band. The pivot value
    /// occurs in the range, so gt cannot pass lo.
    fn partition3(&mut self, arr: &mut [i32], lo: usize, hi: usize, pivot: i32) -> (usize, usize) {
        let mut lt = lo;
        let mut i = lo;
        let mut gt = hi - 1;
        while i <= gt {
            if arr[i] < pivot {
                self.metrics.compares += 1;
                arr.swap(lt, i);
                self.metrics.copies += 2;
                lt += 1;
                i += 1;
            } else if arr[i] > pivot {
                self.metrics.compares += 2;
                arr.swap(i, gt);
                self.metrics.copies += 2;
                gt -= 1;
            } else {
                self.metrics.compares += 2;
                i += 1;
            }
        }
        (lt, gt)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot entry point; returns the selected value and the call's metrics.
pub fn select(arr: &mut [i32], k: usize) -> Result<(i32, SelectMetrics), Error> {
    let mut selector = Selector::new();
    let value = selector.select(arr, k)?;
    Ok((value, selector.metrics))
}
