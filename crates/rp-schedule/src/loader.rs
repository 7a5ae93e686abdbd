//! CSV trip loader.
//!
//! # CSV format
//!
//! One row per trip.  Rows are returned in file order; `route_id` values need
//! not be contiguous but must be unique.
//!
//! ```csv
//! route_id,total_miles,deadhead_miles,remaining_hours
//! 0,500,50,8
//! 1,1500,200,11
//! 2,100,0,11
//! ```
//!
//! The loader only parses.  Range checks happen when each trip is
//! calculated, so one bad trip does not prevent the rest from loading.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use rp_core::RouteId;

use crate::ScheduleError;
use crate::validate::TripRequest;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TripRecord {
    route_id:        u32,
    total_miles:     f64,
    deadhead_miles:  f64,
    remaining_hours: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load trips from a CSV file.
pub fn load_trips_csv(path: &Path) -> Result<Vec<TripRequest>, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_trips_reader(file)
}

/// Like [`load_trips_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for trips embedded in
/// the application binary.
pub fn load_trips_reader<R: Read>(reader: R) -> Result<Vec<TripRequest>, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut trips = Vec::new();
    let mut seen = HashSet::new();

    for (line, result) in csv_reader.deserialize::<TripRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if !seen.insert(row.route_id) {
            return Err(ScheduleError::Parse(format!(
                "duplicate route_id {} on data row {}",
                row.route_id,
                line + 1
            )));
        }
        trips.push(TripRequest::new(
            RouteId(row.route_id),
            row.total_miles,
            row.deadhead_miles,
            row.remaining_hours,
        ));
    }

    info!(trips = trips.len(), "loaded trip requests");
    Ok(trips)
}
