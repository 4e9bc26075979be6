/// Merge sort switches to insertion sort below this range length.
pub const CUTOFF: usize = 24;

/// Group width for median-of-medians pivot selection.
pub const GROUP: usize = 5;

/// Maximum number of y-successors examined per strip point in closest-pair.
pub const STRIP_NEIGHBORS: usize = 7;

/// Generated values and coordinates are uniform in [-VALUE_RANGE, VALUE_RANGE].
pub const VALUE_RANGE: i32 = 1_000_000;

const _: () = {
    assert!(CUTOFF >= 2, "CUTOFF below 2 never triggers");
    assert!(GROUP == 5, "median-of-medians linearity bound assumes groups of 5");
    assert!(STRIP_NEIGHBORS == 7, "geometric strip argument needs 7 neighbors");
};
