/// Data structures shared across loading, grouping, optimization and output

use serde::{Deserialize, Serialize};

/// One row of the demand CSV. `name`, `latitude` and `longitude` are passthrough
/// columns: they are carried to the output untouched when present.
#[derive(Clone, Debug, Deserialize)]
pub struct DemandRow {
    pub day: u32,
    pub hour: u32,
    pub loc_id: i64,
    pub net_demand: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One row of the capacities CSV (`loc_id` → dock count).
#[derive(Clone, Debug, Deserialize)]
pub struct CapacityRow {
    pub loc_id: i64,
    #[serde(rename = "Total Docks")]
    pub total_docks: f64,
}

/// Net demand for a single hour within a (day, station) group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HourlyRecord {
    pub hour: u32,
    pub net_demand: f64,
}

/// All hourly records for one (day, station) pair, ordered by increasing hour,
/// together with the station's dock capacity.
#[derive(Clone, Debug)]
pub struct StationDayGroup {
    pub day: u32,
    pub loc_id: i64,
    pub capacity: f64,
    pub records: Vec<HourlyRecord>,
    /// Passthrough metadata from the first demand row of the group.
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Stock evolution for one candidate initial value: the stock at the START of
/// every hour (before that hour's demand is applied) and the total amount
/// clamped away over the whole day. Derived per candidate, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct StockTrajectory {
    pub stock_by_hour: Vec<(u32, f64)>,
    pub total_truncation: f64,
}

/// Winning candidate for one group after the exhaustive scan.
#[derive(Clone, Debug)]
pub struct OptimizationResult {
    pub best_initial_stock: f64,
    pub trajectory: StockTrajectory,
    pub min_truncation: f64,
}

/// One output CSV row. `initial_stock` and `total_truncations` repeat the
/// group-level values on every hour row of that group.
#[derive(Clone, Debug, Serialize)]
pub struct StockRow {
    pub day: u32,
    pub hour: u32,
    pub loc_id: i64,
    pub name: Option<String>,
    pub stock: f64,
    pub net_demand: f64,
    pub capacity: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub initial_stock: f64,
    pub total_truncations: f64,
}
