/// Hour-by-hour stock simulation for a single (day, station) group
///
/// The stock recorded for each hour is the inventory at the START of that hour,
/// before the hour's net demand is applied. Whenever applying demand would push
/// the stock below 0 or above capacity, the stock is clamped and the clamped
/// magnitude is added to the truncation total.

use crate::models::{HourlyRecord, StockTrajectory};

/// Propagate a candidate initial stock through the group's ordered demand
/// sequence, clamping to [0, capacity].
///
/// Pure function of its inputs. An empty record slice yields an empty
/// trajectory with zero truncation.
pub fn simulate(initial_stock: f64, records: &[HourlyRecord], capacity: f64) -> StockTrajectory {
    let mut stock_by_hour = Vec::with_capacity(records.len());
    let mut total_truncation = 0.0;
    let mut current_stock = initial_stock;

    for record in records {
        // Stock at the start of this hour, before demand is applied
        stock_by_hour.push((record.hour, current_stock));

        let mut new_stock = current_stock + record.net_demand;
        if new_stock < 0.0 {
            total_truncation += -new_stock;
            new_stock = 0.0;
        } else if new_stock > capacity {
            total_truncation += new_stock - capacity;
            new_stock = capacity;
        }

        current_stock = new_stock;
    }

    StockTrajectory {
        stock_by_hour,
        total_truncation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(demands: &[f64]) -> Vec<HourlyRecord> {
        demands
            .iter()
            .enumerate()
            .map(|(hour, &net_demand)| HourlyRecord {
                hour: hour as u32,
                net_demand,
            })
            .collect()
    }

    #[test]
    fn records_stock_before_demand_is_applied() {
        let recs = records(&[5.0, -3.0, 8.0, -2.0]);
        let trajectory = simulate(0.0, &recs, 10.0);

        assert_eq!(
            trajectory.stock_by_hour,
            vec![(0, 0.0), (1, 5.0), (2, 2.0), (3, 10.0)]
        );
        assert_eq!(trajectory.total_truncation, 0.0);
    }

    #[test]
    fn clamps_below_zero_and_accumulates_truncation() {
        let recs = records(&[-4.0, 1.0]);
        let trajectory = simulate(1.0, &recs, 10.0);

        // 1 - 4 = -3 → clamped to 0, truncation 3
        assert_eq!(trajectory.stock_by_hour, vec![(0, 1.0), (1, 0.0)]);
        assert_eq!(trajectory.total_truncation, 3.0);
    }

    #[test]
    fn clamps_above_capacity_and_accumulates_truncation() {
        let recs = records(&[7.0, 2.0]);
        let trajectory = simulate(5.0, &recs, 10.0);

        // 5 + 7 = 12 → clamped to 10, truncation 2; 10 + 2 = 12 → truncation 2 more
        assert_eq!(trajectory.stock_by_hour, vec![(0, 5.0), (1, 10.0)]);
        assert_eq!(trajectory.total_truncation, 4.0);
    }

    #[test]
    fn stock_always_within_bounds() {
        let recs = records(&[20.0, -50.0, 13.0, 13.0, -1.0, 9.5, -80.0, 4.25]);
        for initial in 0..=10 {
            let trajectory = simulate(initial as f64, &recs, 10.0);
            for &(_, stock) in &trajectory.stock_by_hour {
                assert!((0.0..=10.0).contains(&stock), "stock {} out of bounds", stock);
            }
            assert!(trajectory.total_truncation >= 0.0);
        }
    }

    #[test]
    fn truncation_matches_unclamped_overshoot() {
        // Cross-check: propagate the same demands without clamping and sum the
        // per-hour overshoot below 0 / above capacity.
        let recs = records(&[6.0, 7.0, -20.0, 3.0, -4.0]);
        let capacity = 10.0;
        let initial = 2.0;

        let trajectory = simulate(initial, &recs, capacity);

        let mut expected = 0.0;
        let mut stock = initial;
        for rec in &recs {
            let unclamped = stock + rec.net_demand;
            expected += (-unclamped).max(0.0) + (unclamped - capacity).max(0.0);
            stock = unclamped.clamp(0.0, capacity);
        }
        assert!((trajectory.total_truncation - expected).abs() < 1e-9);
    }

    #[test]
    fn single_hour_group() {
        let recs = records(&[-7.0]);
        let trajectory = simulate(3.0, &recs, 10.0);

        assert_eq!(trajectory.stock_by_hour, vec![(0, 3.0)]);
        assert_eq!(trajectory.total_truncation, 4.0);
    }

    #[test]
    fn empty_group_is_a_no_op() {
        let trajectory = simulate(5.0, &[], 10.0);

        assert!(trajectory.stock_by_hour.is_empty());
        assert_eq!(trajectory.total_truncation, 0.0);
    }

    #[test]
    fn zero_truncation_iff_trajectory_never_leaves_bounds() {
        let recs = records(&[3.0, -2.0, 4.0, -5.0]);
        let trajectory = simulate(2.0, &recs, 10.0);
        assert_eq!(trajectory.total_truncation, 0.0);
    }
}
