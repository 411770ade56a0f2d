/// Console output and result presentation

use crate::models::StockRow;

/// Display the program banner
pub fn display_banner() {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                 STATION STOCK RECONSTRUCTION                                ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");
}

/// Display a summary of the loaded demand table
pub fn display_load_summary(num_rows: usize, num_stations: usize, num_days: usize) {
    println!("Loaded {} demand rows", num_rows);
    println!("  Unique stations: {}", num_stations);
    println!("  Unique days: {}", num_days);
}

/// Display the start of the per-group optimization phase
pub fn display_processing_start(num_groups: usize, skipped_no_capacity: usize) {
    println!("\nOptimizing initial stock for {} (day, station) groups...", num_groups);
    if skipped_no_capacity > 0 {
        println!("  Skipped {} groups with missing or invalid capacity", skipped_no_capacity);
    }
}

/// Display final statistics over the written output rows
pub fn display_run_summary(rows: &[StockRow], total_truncation: f64) {
    use std::collections::HashSet;

    let days: HashSet<u32> = rows.iter().map(|r| r.day).collect();
    let stations: HashSet<i64> = rows.iter().map(|r| r.loc_id).collect();

    println!("\n=== Statistics ===");
    println!("Rows written: {}", rows.len());
    println!("Days processed: {}", days.len());
    println!("Stations processed: {}", stations.len());

    if !rows.is_empty() {
        let min_stock = rows.iter().map(|r| r.stock).fold(f64::INFINITY, f64::min);
        let max_stock = rows.iter().map(|r| r.stock).fold(f64::NEG_INFINITY, f64::max);
        println!("Stock range: [{:.2}, {:.2}]", min_stock, max_stock);
    }
    println!("Total accumulated truncation: {:.2}", total_truncation);
}

/// Display the output file locations
pub fn display_written(output: &str, output_full: &str, num_rows: usize) {
    println!("\nStock CSV created: {} ({} rows)", output, num_rows);
    println!("Full version written to {}", output_full);
}
