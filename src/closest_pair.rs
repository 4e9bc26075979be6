use log::debug;
use std::time::Instant;

use crate::config::STRIP_NEIGHBORS;
use crate::metrics::{ClosestMetrics, Metrics};

/// Planar point with integer coordinates. Squared distances are computed
/// in i64, which cannot overflow for coordinates up to ±1,000,000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

fn dist2(a: Point, b: Point) -> i64 {
    let dx = a.x as i64 - b.x as i64;
    let dy = a.y as i64 - b.y as i64;
    dx * dx + dy * dy
}

/// Divide-and-conquer closest pair. The input slice is reordered (x-sorted
/// up front, y-sorted within ranges as the recursion merges) but no point
/// value is ever changed.
pub struct ClosestPair {
    pub metrics: ClosestMetrics,
}

impl ClosestPair {
    pub fn new() -> ClosestPair {
        ClosestPair {
            metrics: ClosestMetrics::default(),
        }
    }

    /// Minimum pairwise Euclidean distance; 0.0 for fewer than two points.
    pub fn distance(&mut self, pts: &mut [Point]) -> f64 {
        self.metrics.reset();
        if pts.len() < 2 {
            return 0.0;
        }
        debug!("closest pair, n = {}", pts.len());

        // x-presort is preprocessing, outside both counters and timer
        pts.sort_unstable_by(|a, b| (a.x, a.y).cmp(&(b.x, b.y)));
        let mut tmp = vec![Point::default(); pts.len()];

        let start = Instant::now();
        let best2 = self.rec(pts, &mut tmp, 0, pts.len(), 1);
        self.metrics.elapsed = start.elapsed();
        (best2 as f64).sqrt()
    }

    fn rec(&mut self, a: &mut [Point], tmp: &mut [Point], l: usize, r: usize, depth: u32) -> i64 {
        self.metrics.record_depth(depth);

        let n = r - l;
        if n <= 3 {
            let mut best2 = i64::MAX;
            for i in l..r {
                for j in i + 1..r {
                    let d2 = dist2(a[i], a[j]);
                    self.metrics.compares += 1;
                    if d2 < best2 {
                        best2 = d2;
                    }
                }
            }
            // the merge step above expects this range y-sorted
            a[l..r].sort_unstable_by_key(|p| p.y);
            return best2;
        }

        let m = (l + r) / 2;
        let mid_x = a[m].x;

        let left2 = self.rec(a, tmp, l, m, depth + 1);
        let right2 = self.rec(a, tmp, m, r, depth + 1);
        let mut best2 = left2.min(right2);

        // merge the two y-sorted halves
        let mut i = l;
        let mut j = m;
        let mut k = l;
        while i < m && j < r {
            if a[i].y <= a[j].y {
                tmp[k] = a[i];
                i += 1;
            } else {
                tmp[k] = a[j];
                j += 1;
            }
            k += 1;
            self.metrics.copies += 1;
        }
        while i < m {
            tmp[k] = a[i];
            i += 1;
            k += 1;
            self.metrics.copies += 1;
        }
        while j < r {
            tmp[k] = a[j];
            j += 1;
            k += 1;
            self.metrics.copies += 1;
        }
        a[l..r].copy_from_slice(&tmp[l..r]);

        // candidates within best2 of the dividing line, in y-order
        let strip: Vec<Point> = a[l..r]
            .iter()
            .copied()
            .filter(|p| {
                let dx = p.x as i64 - mid_x as i64;
                dx * dx < best2
            })
            .collect();

        for p in 0..strip.len() {
            let last = strip.len().min(p + STRIP_NEIGHBORS + 1);
            for q in p + 1..last {
                let dy = strip[q].y as i64 - strip[p].y as i64;
                if dy * dy >= best2 {
                    self.metrics.compares += 1;
                    break;
                }
                let d2 = dist2(strip[p], strip[q]);
                self.metrics.compares += 1;
                if d2 < best2 {
                    best2 = d2;
                }
            }
        }
        best2
    }
}

impl Default for ClosestPair {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot entry point; returns the distance and the call's metrics.
pub fn closest_pair(pts: &mut [Point]) -> (f64, ClosestMetrics) {
    let mut engine = ClosestPair::new();
    let d = engine.distance(pts);
    (d, engine.metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five_triangle() {
        let mut pts = vec![Point::new(0, 0), Point::new(3, 4), Point::new(10, 10)];
        let (d, m) = closest_pair(&mut pts);
        assert!((d - 5.0).abs() < 1e-9);
        assert_eq!(m.max_depth, 1);
        assert_eq!(m.compares, 3);
    }

    #[test]
    fn duplicate_points_are_distance_zero() {
        let mut pts = vec![Point::new(7, 7), Point::new(7, 7), Point::new(-5, 1)];
        let (d, _) = closest_pair(&mut pts);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn degenerate_inputs_return_zero() {
        let mut empty: Vec<Point> = vec![];
        assert_eq!(closest_pair(&mut empty).0, 0.0);
        let mut one = vec![Point::new(3, -2)];
        assert_eq!(closest_pair(&mut one).0, 0.0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let mut pts = vec![
            Point::new(-1_000_000, -1_000_000),
            Point::new(1_000_000, 1_000_000),
            Point::new(1_000_000, -1_000_000),
        ];
        let (d, _) = closest_pair(&mut pts);
        assert!((d - 2_000_000.0).abs() < 1e-6);
    }
}
