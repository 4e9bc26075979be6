use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::csv::{read_rows, Row};
use crate::error::Error;

/// Metrics every engine reports, in output order.
const SERIES: [&str; 2] = ["time_ms", "max_depth"];

/// Reads the raw metrics file and writes `metrics_clean.csv` plus one
/// aggregated `<metric>_by_n.csv` per series into `out_dir`, averaging
/// duplicate (algorithm, n) entries. Returns the number of records read.
pub fn write_report(csv: &Path, out_dir: &Path) -> Result<usize, Error> {
    let rows = read_rows(csv)?;
    fs::create_dir_all(out_dir)?;

    write_clean(&rows, &out_dir.join("metrics_clean.csv"))?;
    for metric in SERIES {
        let series = aggregate(&rows, metric);
        write_series(&series, metric, &out_dir.join(format!("{metric}_by_n.csv")))?;
    }

    info!("report: {} records from {}", rows.len(), csv.display());
    Ok(rows.len())
}

/// Mean of `metric` per (algorithm, n), sorted by algorithm then n.
pub fn aggregate(rows: &[Row], metric: &str) -> BTreeMap<(&'static str, usize), f64> {
    let mut sums: BTreeMap<(&'static str, usize), (f64, u32)> = BTreeMap::new();
    for row in rows {
        if let Some(v) = row.value(metric) {
            let entry = sums.entry((row.algo, row.n)).or_insert((0.0, 0));
            entry.0 += v;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

fn write_clean(rows: &[Row], path: &Path) -> Result<(), Error> {
    // column order: first appearance across the file
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for (key, _) in &row.values {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut out = fs::File::create(path)?;
    writeln!(out, "label,algo,n,{}", columns.join(","))?;
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| row.value(c).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        writeln!(out, "{},{},{},{}", row.label, row.algo, row.n, cells.join(","))?;
    }
    Ok(())
}

fn write_series(
    series: &BTreeMap<(&'static str, usize), f64>,
    metric: &str,
    path: &Path,
) -> Result<(), Error> {
    let mut out = fs::File::create(path)?;
    writeln!(out, "algo,n,{metric}")?;
    for ((algo, n), mean) in series {
        writeln!(out, "{algo},{n},{mean}")?;
    }
    Ok(())
}
