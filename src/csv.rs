use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::metrics::Metrics;

/// Appends one record to the metrics file:
/// `<label>, n: <n>, <counter>: <value>, ..., time_ms: <ms>`.
pub fn append_row(path: &Path, label: &str, n: usize, metrics: &dyn Metrics) -> Result<(), Error> {
    let mut line = format!("{label}, n: {n}");
    for (key, value) in metrics.csv_fields() {
        line.push_str(&format!(", {key}: {value}"));
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// One parsed metrics record.
#[derive(Debug, Clone)]
pub struct Row {
    pub label: String,
    pub algo: &'static str,
    pub n: usize,
    pub values: Vec<(String, f64)>,
}

impl Row {
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }
}

/// Algorithm is inferred from the label prefix the runners use.
pub fn infer_algo(label: &str) -> &'static str {
    if label.starts_with("ms_") {
        "mergesort"
    } else if label.starts_with("qs_") {
        "quicksort"
    } else if label.starts_with("select_") {
        "select"
    } else if label.starts_with("closest_") {
        "closest"
    } else {
        "unknown"
    }
}

/// Tolerant line parser: malformed pairs are skipped, lines without a
/// label and an `n` field are dropped entirely.
pub fn parse_line(line: &str) -> Option<Row> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut parts = line.split(',');
    let label = parts.next()?.trim().to_string();
    if label.is_empty() {
        return None;
    }

    let mut n: Option<usize> = None;
    let mut values = Vec::new();
    for part in parts {
        let Some((key, value)) = part.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key == "n" || key == "array size" {
            n = value.parse().ok();
        } else if let Ok(v) = value.parse::<f64>() {
            values.push((key.replace(' ', "_"), v));
        }
    }

    Some(Row {
        algo: infer_algo(&label),
        label,
        n: n?,
        values,
    })
}

/// Reads every parsable record from a metrics file.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, Error> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().filter_map(parse_line).collect())
}
