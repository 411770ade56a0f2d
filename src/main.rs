mod grouping;
mod loader;
mod models;
mod optimizer;
mod reporting;
mod simulator;
mod writer;

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;

use grouping::build_groups;
use models::StockRow;
use optimizer::find_optimal_initial_stock;
use reporting::{display_banner, display_load_summary, display_processing_start,
                display_run_summary, display_written};
use writer::{rows_for_group, sort_rows, write_stock_csv, write_stock_full_csv};

/// Reconstruct hour-by-hour station stock from net hourly demand
#[derive(Parser, Debug)]
#[command(name = "station-stock")]
#[command(about = "Reconstruct hourly bike stock per station from net demand")]
struct Args {
    /// Demand CSV with day, hour, loc_id and net_demand columns
    #[arg(long, default_value = "test_final.csv")]
    input: PathBuf,

    /// Capacities CSV with loc_id and "Total Docks" columns
    #[arg(long, default_value = "capacities.csv")]
    capacities: PathBuf,

    /// Output CSV with the reconstructed stock per (day, hour, station)
    #[arg(long, default_value = "stock.csv")]
    output: PathBuf,

    /// Output CSV including initial stock and truncation per group
    #[arg(long, default_value = "stock_full.csv")]
    output_full: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    display_banner();

    println!("Loading data...");
    let mut demand_rows = loader::load_demand(&args.input)
        .with_context(|| format!("loading demand table {}", args.input.display()))?;
    let capacities = loader::load_capacities(&args.capacities)
        .with_context(|| format!("loading capacity table {}", args.capacities.display()))?;

    // Sequential processing order matches the output ordering
    demand_rows.sort_by_key(|row| (row.day, row.hour, row.loc_id));

    let stations: HashSet<i64> = demand_rows.iter().map(|r| r.loc_id).collect();
    let days: HashSet<u32> = demand_rows.iter().map(|r| r.day).collect();
    display_load_summary(demand_rows.len(), stations.len(), days.len());

    let outcome = build_groups(&demand_rows, &capacities);
    display_processing_start(outcome.groups.len(), outcome.skipped_no_capacity);

    // Groups are independent, so the exhaustive scans run in parallel; the
    // output ordering is re-established by the sort below.
    let per_group: Vec<(f64, Vec<StockRow>)> = outcome
        .groups
        .par_iter()
        .map(|group| {
            let result = find_optimal_initial_stock(&group.records, group.capacity);
            let rows = rows_for_group(group, &result);
            (result.min_truncation, rows)
        })
        .collect();

    let total_truncation: f64 = per_group.iter().map(|(truncation, _)| truncation).sum();
    let mut rows: Vec<StockRow> = per_group.into_iter().flat_map(|(_, rows)| rows).collect();
    sort_rows(&mut rows);

    write_stock_csv(&args.output, &rows)
        .with_context(|| format!("writing {}", args.output.display()))?;
    write_stock_full_csv(&args.output_full, &rows)
        .with_context(|| format!("writing {}", args.output_full.display()))?;

    display_written(
        &args.output.display().to_string(),
        &args.output_full.display().to_string(),
        rows.len(),
    );
    display_run_summary(&rows, total_truncation);

    Ok(())
}
