use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use std::path::{Path, PathBuf};

use algolab::csv::append_row;
use algolab::report::write_report;
use algolab::{closest_pair, merge_sort, quick_sort, random_array, random_points, select};

#[derive(Parser)]
#[command(name = "algolab", about = "Instrumented divide-and-conquer algorithm lab")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a seeded input, run an algorithm, append a metrics record
    Run {
        #[arg(long, value_enum, default_value_t = Algo::All)]
        algo: Algo,
        /// Input size
        #[arg(long, default_value_t = 10_000)]
        n: usize,
        /// Base seed; run r uses seed + r
        #[arg(long, default_value_t = 123)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        runs: u64,
        /// Order statistic for select (defaults to n / 2)
        #[arg(long)]
        k: Option<usize>,
        /// Append-only metrics file
        #[arg(long, default_value = "metrics.csv")]
        out: PathBuf,
    },
    /// Aggregate a metrics file into clean CSVs
    Report {
        #[arg(long, default_value = "metrics.csv")]
        csv: PathBuf,
        #[arg(long, default_value = "results")]
        out_dir: PathBuf,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Algo {
    Mergesort,
    Quicksort,
    Select,
    Closest,
    All,
}

fn main() -> Result<()> {
    env_logger::builder().filter_level(LevelFilter::Info).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            algo,
            n,
            seed,
            runs,
            k,
            out,
        } => {
            for run in 0..runs {
                let seed = seed + run;
                let k = k.unwrap_or(n / 2);
                match algo {
                    Algo::Mergesort => run_merge(n, seed, &out)?,
                    Algo::Quicksort => run_quick(n, seed, &out)?,
                    Algo::Select => run_select(n, seed, k, &out)?,
                    Algo::Closest => run_closest(n, seed, &out)?,
                    Algo::All => {
                        run_merge(n, seed, &out)?;
                        run_quick(n, seed, &out)?;
                        run_select(n, seed, k, &out)?;
                        run_closest(n, seed, &out)?;
                    }
                }
            }
            println!("Done.");
        }
        Command::Report { csv, out_dir } => {
            let count = write_report(&csv, &out_dir)
                .with_context(|| format!("reading {}", csv.display()))?;
            println!("Aggregated {count} records into {}", out_dir.display());
        }
    }
    Ok(())
}

fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

fn run_merge(n: usize, seed: u64, out: &Path) -> Result<()> {
    let mut arr = random_array(n, seed);
    let metrics = merge_sort(&mut arr);
    if !is_sorted(&arr) {
        bail!("merge sort produced unsorted output (n={n}, seed={seed})");
    }
    let label = format!("ms_rand_{n}_seed{seed}");
    append_row(out, &label, n, &metrics)?;
    info!("{label}: max depth {}, {:?}", metrics.max_depth, metrics.elapsed);
    Ok(())
}

fn run_quick(n: usize, seed: u64, out: &Path) -> Result<()> {
    let mut arr = random_array(n, seed);
    let metrics = quick_sort(&mut arr);
    if !is_sorted(&arr) {
        bail!("quicksort produced unsorted output (n={n}, seed={seed})");
    }
    let label = format!("qs_rand_{n}_seed{seed}");
    append_row(out, &label, n, &metrics)?;
    info!("{label}: max depth {}, {:?}", metrics.max_depth, metrics.elapsed);
    Ok(())
}

fn run_select(n: usize, seed: u64, k: usize, out: &Path) -> Result<()> {
    let mut arr = random_array(n, seed);
    let reference = {
        let mut copy = arr.clone();
        copy.sort_unstable();
        copy
    };
    let (value, metrics) = select(&mut arr, k).context("select failed")?;
    if value != reference[k] {
        bail!("select returned {value}, expected {} (n={n}, seed={seed}, k={k})", reference[k]);
    }
    let label = format!("select_rand_{n}_seed{seed}_k{k}");
    append_row(out, &label, n, &metrics)?;
    info!("{label}: value {value}, {:?}", metrics.elapsed);
    Ok(())
}

fn run_closest(n: usize, seed: u64, out: &Path) -> Result<()> {
    let mut pts = random_points(n, seed);
    let (d, metrics) = closest_pair(&mut pts);
    if !d.is_finite() || d < 0.0 {
        bail!("closest pair returned {d} (n={n}, seed={seed})");
    }
    let label = format!("closest_rand_{n}_seed{seed}");
    append_row(out, &label, n, &metrics)?;
    info!("{label}: distance {d:.3}, {:?}", metrics.elapsed);
    Ok(())
}
