use crate::metrics::OpCounter;

/// Instrumented insertion sort, shared by the merge-sort cutoff and the
/// median-of-medians group phase. One compare per probe of the shifting
/// scan (including the failed probe that stops it inside the range), one
/// copy per shift, one copy for placing the key.
pub fn insertion_sort(arr: &mut [i32], counter: &mut impl OpCounter) {
    for i in 1..arr.len() {
        let x = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > x {
            counter.count_compare();
            arr[j] = arr[j - 1];
            counter.count_copy();
            j -= 1;
        }
        if j > 0 {
            counter.count_compare();
        }
        arr[j] = x;
        counter.count_copy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MergeMetrics;

    #[test]
    fn sorts_and_counts() {
        let mut m = MergeMetrics::default();
        let mut arr = vec![4, 2, 7, 1, 1];
        insertion_sort(&mut arr, &mut m);
        assert_eq!(arr, vec![1, 1, 2, 4, 7]);
        assert!(m.compares > 0);
        assert!(m.copies >= arr.len() as u64 - 1);
    }

    #[test]
    fn already_sorted_costs_one_compare_and_copy_per_key() {
        let mut m = MergeMetrics::default();
        let mut arr = vec![1, 2, 3, 4];
        insertion_sort(&mut arr, &mut m);
        assert_eq!(arr, vec![1, 2, 3, 4]);
        assert_eq!(m.compares, 3);
        assert_eq!(m.copies, 3);
    }

    #[test]
    fn empty_and_singleton_are_noops() {
        let mut m = MergeMetrics::default();
        insertion_sort(&mut [], &mut m);
        insertion_sort(&mut [42], &mut m);
        assert_eq!(m.compares, 0);
        assert_eq!(m.copies, 0);
    }
}
