pub mod closest_pair;
pub mod csv;
pub mod error;
pub mod generate;
pub mod merge_sort;
pub mod metrics;
pub mod quick_sort;
pub mod report;
pub mod select;

mod base_case;
mod config;

pub use closest_pair::{closest_pair, ClosestPair, Point};
pub use error::Error;
pub use generate::{random_array, random_points};
pub use merge_sort::{merge_sort, MergeSorter};
pub use metrics::{ClosestMetrics, MergeMetrics, Metrics, QuickMetrics, SelectMetrics};
pub use quick_sort::{quick_sort, QuickSorter};
pub use select::{select, Selector};
