//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `activities.csv`
//! - `route_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use rp_core::{RouteId, format_hhmm};
use rp_schedule::RouteMetrics;

use crate::writer::OutputWriter;
use crate::{ActivityRow, OutputResult, RouteSummaryRow};

pub const ACTIVITIES_FILE: &str = "activities.csv";
pub const SUMMARIES_FILE: &str = "route_summaries.csv";

/// Writes route output to two CSV files.
pub struct CsvWriter {
    activities: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut activities = Writer::from_path(dir.join(ACTIVITIES_FILE))?;
        activities.write_record([
            "route_id",
            "seq",
            "activity",
            "start_hours",
            "end_hours",
            "duration_hours",
            "start",
            "end",
            "miles",
            "notes",
        ])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "route_id",
            "total_miles",
            "deadhead_miles",
            "loaded_miles",
            "driving_hours",
            "break_hours",
            "load_unload_hours",
            "total_hours",
            "activity_count",
        ])?;

        Ok(Self {
            activities,
            summaries,
            finished: false,
        })
    }

    fn write_activity(&mut self, row: &ActivityRow) -> OutputResult<()> {
        self.activities.write_record(&[
            row.route_id.to_string(),
            row.seq.to_string(),
            row.activity.to_owned(),
            row.start_hours.to_string(),
            row.end_hours.to_string(),
            row.duration_hours.to_string(),
            format_hhmm(row.start_hours),
            format_hhmm(row.end_hours),
            row.miles.to_string(),
            row.notes.clone(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RouteSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.route_id.to_string(),
            row.total_miles.to_string(),
            row.deadhead_miles.to_string(),
            row.loaded_miles.to_string(),
            row.driving_hours.to_string(),
            row.break_hours.to_string(),
            row.load_unload_hours.to_string(),
            row.total_hours.to_string(),
            row.activity_count.to_string(),
        ])?;
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_route(&mut self, route: RouteId, metrics: &RouteMetrics) -> OutputResult<()> {
        for row in ActivityRow::for_route(route, metrics) {
            self.write_activity(&row)?;
        }
        self.write_summary(&RouteSummaryRow::new(route, metrics))?;
        debug!(%route, activities = metrics.activities.len(), "wrote route to csv");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.activities.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
