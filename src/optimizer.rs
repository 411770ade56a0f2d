/// Exhaustive search for the initial stock that best explains a day's demand
///
/// The true inventory at the start of each day is unknown, so every integer
/// candidate from 0 to the capacity (inclusive) is simulated and the one with
/// the least total truncation wins. The objective is piecewise-linear and
/// non-differentiable, but the search space is small and integer-bounded, so
/// brute force is both correct and fast enough.

use crate::models::{HourlyRecord, OptimizationResult, StockTrajectory};
use crate::simulator::simulate;

/// Scan integer candidates 0..=floor(capacity) in ascending order and keep the
/// one with the strictly lowest truncation. Ties resolve to the smallest
/// candidate because the incumbent is only replaced on strict improvement.
///
/// The scan bound truncates the capacity to an integer, while the simulator
/// clamps against the un-truncated capacity value. The caller guarantees a
/// non-negative, finite capacity.
pub fn find_optimal_initial_stock(records: &[HourlyRecord], capacity: f64) -> OptimizationResult {
    let mut best_initial_stock = 0.0;
    let mut min_truncation = f64::INFINITY;
    let mut best_trajectory = StockTrajectory {
        stock_by_hour: Vec::new(),
        total_truncation: 0.0,
    };

    let capacity_int = capacity as i64;
    for initial_stock in 0..=capacity_int {
        let initial_stock = initial_stock as f64;
        let trajectory = simulate(initial_stock, records, capacity);

        if trajectory.total_truncation < min_truncation {
            min_truncation = trajectory.total_truncation;
            best_initial_stock = initial_stock;
            best_trajectory = trajectory;
        }
    }

    OptimizationResult {
        best_initial_stock,
        trajectory: best_trajectory,
        min_truncation,
    }
}
