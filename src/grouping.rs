/// Group formation: demand rows → one group per (day, station)
///
/// Capacity is attached here from the capacity table. Stations with no
/// capacity entry, or with a negative or non-finite one, are dropped before
/// the optimizer ever sees them; only a skip counter records that they
/// existed.

use std::collections::{BTreeMap, HashMap};

use crate::models::{DemandRow, HourlyRecord, StationDayGroup};

/// Result of grouping a demand table against a capacity map.
pub struct GroupingOutcome {
    /// Groups ready for optimization, ordered by (day, loc_id).
    pub groups: Vec<StationDayGroup>,
    /// (day, station) pairs dropped for missing or invalid capacity.
    pub skipped_no_capacity: usize,
}

/// Capacity values the optimizer can work with: the scan bound and clamp
/// ceiling both need a non-negative, finite number.
fn is_valid_capacity(capacity: f64) -> bool {
    capacity.is_finite() && capacity >= 0.0
}

/// Partition demand rows into (day, loc_id) groups with hours sorted
/// ascending. Duplicate hours within a group keep the first row seen.
pub fn build_groups(rows: &[DemandRow], capacities: &HashMap<i64, f64>) -> GroupingOutcome {
    let mut by_key: BTreeMap<(u32, i64), StationDayGroup> = BTreeMap::new();

    for row in rows {
        let group = by_key
            .entry((row.day, row.loc_id))
            .or_insert_with(|| StationDayGroup {
                day: row.day,
                loc_id: row.loc_id,
                capacity: 0.0,
                records: Vec::new(),
                name: row.name.clone(),
                latitude: row.latitude,
                longitude: row.longitude,
            });

        if group.records.iter().any(|r| r.hour == row.hour) {
            continue;
        }
        group.records.push(HourlyRecord {
            hour: row.hour,
            net_demand: row.net_demand,
        });
    }

    let mut groups = Vec::new();
    let mut skipped_no_capacity = 0;

    for (_, mut group) in by_key {
        match capacities.get(&group.loc_id) {
            Some(&capacity) if is_valid_capacity(capacity) => {
                group.capacity = capacity;
                group.records.sort_by_key(|r| r.hour);
                groups.push(group);
            }
            _ => skipped_no_capacity += 1,
        }
    }

    GroupingOutcome {
        groups,
        skipped_no_capacity,
    }
}
