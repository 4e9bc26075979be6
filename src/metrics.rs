use std::time::Duration;

/// One counter bundle per engine. Reset is the first action of every
/// top-level entry point; the caller reads the snapshot after the call
/// returns. Engines take `&mut self`, so two in-flight calls can never
/// share a recorder.
pub trait Metrics {
    /// Algorithm tag used for label prefixes and report grouping.
    fn algorithm(&self) -> &'static str;

    /// Zero every counter, the depth watermark and the elapsed time.
    fn reset(&mut self);

    /// Counter names and values in persistence order, `time_ms` last.
    fn csv_fields(&self) -> Vec<(&'static str, String)>;

    fn max_depth(&self) -> u32;

    fn elapsed(&self) -> Duration;
}

/// Compare/copy hooks for instrumented helpers shared between engines.
pub trait OpCounter {
    fn count_compare(&mut self);
    fn count_copy(&mut self);
}

fn time_ms(d: Duration) -> String {
    format!("{}", d.as_secs_f64() * 1_000.0)
}

#[derive(Debug, Default, Clone)]
pub struct MergeMetrics {
    pub compares: u64,
    pub copies: u64,
    pub merges: u64,
    pub insertion_calls: u64,
    pub max_depth: u32,
    pub elapsed: Duration,
}

impl MergeMetrics {
    pub(crate) fn record_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}

impl Metrics for MergeMetrics {
    fn algorithm(&self) -> &'static str {
        "mergesort"
    }

    fn reset(&mut self) {
        *self = MergeMetrics::default();
    }

    fn csv_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("compares", self.compares.to_string()),
            ("copies", self.copies.to_string()),
            ("merges", self.merges.to_string()),
            ("insertion_calls", self.insertion_calls.to_string()),
            ("max_depth", self.max_depth.to_string()),
            ("time_ms", time_ms(self.elapsed)),
        ]
    }

    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl OpCounter for MergeMetrics {
    fn count_compare(&mut self) {
        self.compares += 1;
    }

    fn count_copy(&mut self) {
        self.copies += 1;
    }
}

#[derive(Debug, Default, Clone)]
pub struct QuickMetrics {
    pub compares: u64,
    pub swaps: u64,
    pub pivots: u64,
    pub recursions: u64,
    pub max_depth: u32,
    pub elapsed: Duration,
}

impl QuickMetrics {
    pub(crate) fn record_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}

impl Metrics for QuickMetrics {
    fn algorithm(&self) -> &'static str {
        "quicksort"
    }

    fn reset(&mut self) {
        *self = QuickMetrics::default();
    }

    fn csv_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("compares", self.compares.to_string()),
            ("swaps", self.swaps.to_string()),
            ("pivots", self.pivots.to_string()),
            ("recursions", self.recursions.to_string()),
            ("max_depth", self.max_depth.to_string()),
            ("time_ms", time_ms(self.elapsed)),
        ]
    }

    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[derive(Debug, Default, Clone)]
pub struct SelectMetrics {
    pub compares: u64,
    pub copies: u64,
    pub recursions: u64,
    pub max_depth: u32,
    pub elapsed: Duration,
}

impl SelectMetrics {
    pub(crate) fn record_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}

impl Metrics for SelectMetrics {
    fn algorithm(&self) -> &'static str {
        "select"
    }

    fn reset(&mut self) {
        *self = SelectMetrics::default();
    }

    fn csv_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("compares", self.compares.to_string()),
            ("copies", self.copies.to_string()),
            ("recursions", self.recursions.to_string()),
            ("max_depth", self.max_depth.to_string()),
            ("time_ms", time_ms(self.elapsed)),
        ]
    }

    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl OpCounter for SelectMetrics {
    fn count_compare(&mut self) {
        self.compares += 1;
    }

    fn count_copy(&mut self) {
        self.copies += 1;
    }
}

#[derive(Debug, Default, Clone)]
pub struct ClosestMetrics {
    pub compares: u64,
    pub copies: u64,
    pub max_depth: u32,
    pub elapsed: Duration,
}

impl ClosestMetrics {
    pub(crate) fn record_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}

impl Metrics for ClosestMetrics {
    fn algorithm(&self) -> &'static str {
        "closest"
    }

    fn reset(&mut self) {
        *self = ClosestMetrics::default();
    }

    fn csv_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("compares", self.compares.to_string()),
            ("copies", self.copies.to_string()),
            ("max_depth", self.max_depth.to_string()),
            ("time_ms", time_ms(self.elapsed)),
        ]
    }

    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
