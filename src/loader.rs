/// CSV loading for the demand and capacity tables

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::models::{CapacityRow, DemandRow};

/// Errors surfaced while reading the input tables.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })
}

fn parse_error(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Parse {
        path: path.display().to_string(),
        source,
    }
}

/// Read the demand table. Rows arrive in file order; the caller sorts them.
pub fn load_demand(path: &Path) -> Result<Vec<DemandRow>, LoadError> {
    read_demand(open(path)?).map_err(|source| parse_error(path, source))
}

/// Read the capacity table into a loc_id → capacity map.
pub fn load_capacities(path: &Path) -> Result<HashMap<i64, f64>, LoadError> {
    read_capacities(open(path)?).map_err(|source| parse_error(path, source))
}

fn read_demand<R: Read>(reader: R) -> Result<Vec<DemandRow>, csv::Error> {
    csv::Reader::from_reader(reader).into_deserialize().collect()
}

fn read_capacities<R: Read>(reader: R) -> Result<HashMap<i64, f64>, csv::Error> {
    let mut capacities = HashMap::new();
    for row in csv::Reader::from_reader(reader).into_deserialize() {
        let row: CapacityRow = row?;
        capacities.insert(row.loc_id, row.total_docks);
    }
    Ok(capacities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_demand_rows_with_passthrough_columns() {
        let csv = "day,hour,loc_id,net_demand,name,latitude,longitude\n\
                   1,0,100,2.5,Main St,40.71,-74.0\n\
                   1,1,100,-1.0,Main St,40.71,-74.0\n";

        let rows = read_demand(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].day, 1);
        assert_eq!(rows[0].hour, 0);
        assert_eq!(rows[0].loc_id, 100);
        assert_eq!(rows[0].net_demand, 2.5);
        assert_eq!(rows[0].name.as_deref(), Some("Main St"));
        assert_eq!(rows[0].latitude, Some(40.71));
        assert_eq!(rows[1].net_demand, -1.0);
    }

    #[test]
    fn parses_demand_rows_without_passthrough_columns() {
        let csv = "day,hour,loc_id,net_demand\n2,13,42,-3.25\n";

        let rows = read_demand(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].loc_id, 42);
        assert!(rows[0].name.is_none());
        assert!(rows[0].latitude.is_none());
        assert!(rows[0].longitude.is_none());
    }

    #[test]
    fn parses_capacity_table_into_a_map() {
        let csv = "loc_id,Total Docks\n100,31\n200,19\n";

        let capacities = read_capacities(csv.as_bytes()).unwrap();

        assert_eq!(capacities.len(), 2);
        assert_eq!(capacities.get(&100), Some(&31.0));
        assert_eq!(capacities.get(&200), Some(&19.0));
    }

    #[test]
    fn malformed_demand_row_is_an_error() {
        let csv = "day,hour,loc_id,net_demand\n1,not_an_hour,100,2.0\n";

        assert!(read_demand(csv.as_bytes()).is_err());
    }
}
