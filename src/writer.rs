/// Output assembly and CSV serialization
///
/// Two files are written: `stock.csv` with the station columns only, and a
/// full variant that also carries the winning initial stock and the group's
/// total truncation on every hour row.

use std::path::Path;

use serde::Serialize;

use crate::models::{OptimizationResult, StationDayGroup, StockRow};

/// `stock.csv` row: the trajectory plus the station's passthrough columns.
#[derive(Serialize)]
struct PublicRow<'a> {
    day: u32,
    hour: u32,
    loc_id: i64,
    name: &'a Option<String>,
    stock: f64,
    net_demand: f64,
    capacity: f64,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Expand one optimized group into its per-hour output rows. The trajectory
/// holds one entry per hourly record, in the same order.
pub fn rows_for_group(group: &StationDayGroup, result: &OptimizationResult) -> Vec<StockRow> {
    result
        .trajectory
        .stock_by_hour
        .iter()
        .zip(&group.records)
        .map(|(&(hour, stock), record)| StockRow {
            day: group.day,
            hour,
            loc_id: group.loc_id,
            name: group.name.clone(),
            stock,
            net_demand: record.net_demand,
            capacity: group.capacity,
            latitude: group.latitude,
            longitude: group.longitude,
            initial_stock: result.best_initial_stock,
            total_truncations: result.min_truncation,
        })
        .collect()
}

/// Re-establish the output ordering regardless of group completion order.
pub fn sort_rows(rows: &mut [StockRow]) {
    rows.sort_by_key(|row| (row.day, row.hour, row.loc_id));
}

/// Write `stock.csv` (station columns only).
pub fn write_stock_csv(path: &Path, rows: &[StockRow]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(PublicRow {
            day: row.day,
            hour: row.hour,
            loc_id: row.loc_id,
            name: &row.name,
            stock: row.stock,
            net_demand: row.net_demand,
            capacity: row.capacity,
            latitude: row.latitude,
            longitude: row.longitude,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the full variant including `initial_stock` and `total_truncations`.
pub fn write_stock_full_csv(path: &Path, rows: &[StockRow]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
