//! Plain-text table backend.
//!
//! Renders a route as a fixed-width summary block followed by the numbered
//! driver activity schedule:
//!
//! ```text
//! =====================================================================================
//! ROUTE METRICS SUMMARY
//! =====================================================================================
//! Total Miles:           500.0 miles
//! ...
//! Total Route Time:      22:05 (22.09 hours)
//!
//! =====================================================================================
//! DRIVER ACTIVITY SCHEDULE
//! =====================================================================================
//! #    Activity             Start Time   End Time     Duration     Miles      Notes
//! -------------------------------------------------------------------------------------
//! 1    Loading              00:00        01:30        01:30        0.0        Loading cargo at origin
//! ...
//! ```

use std::fmt;
use std::io::Write;

use rp_core::{RouteId, format_hhmm};
use rp_schedule::RouteMetrics;

use crate::OutputResult;
use crate::writer::OutputWriter;

const WIDTH: usize = 85;

/// Render the summary and schedule table for one route.
pub fn render_table(metrics: &RouteMetrics) -> String {
    RouteTable(metrics).to_string()
}

/// `Display` adapter producing the summary and schedule table.
#[derive(Clone, Copy)]
pub struct RouteTable<'a>(pub &'a RouteMetrics);

impl fmt::Display for RouteTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = self.0;
        let heavy = "=".repeat(WIDTH);
        let light = "-".repeat(WIDTH);
        let hours = |h: f64| format!("{} ({h:.2} hours)", format_hhmm(h));

        writeln!(f, "{heavy}\nROUTE METRICS SUMMARY\n{heavy}")?;
        writeln!(f, "Total Miles:           {:.1} miles", metrics.total_miles)?;
        writeln!(f, "Deadhead Miles:        {:.1} miles", metrics.deadhead_miles)?;
        writeln!(f, "Loaded Miles:          {:.1} miles", metrics.loaded_miles)?;
        writeln!(f, "Total Driving Time:    {}", hours(metrics.total_driving_time))?;
        writeln!(f, "Total Break Time:      {}", hours(metrics.total_break_time))?;
        writeln!(f, "Load/Unload Time:      {}", hours(metrics.total_load_unload_time))?;
        writeln!(f, "Total Route Time:      {}", hours(metrics.total_time))?;
        writeln!(f)?;

        writeln!(f, "{heavy}\nDRIVER ACTIVITY SCHEDULE\n{heavy}")?;
        writeln!(
            f,
            "{:<4} {:<20} {:<12} {:<12} {:<12} {:<10} {}",
            "#", "Activity", "Start Time", "End Time", "Duration", "Miles", "Notes"
        )?;
        writeln!(f, "{light}")?;

        for (i, a) in metrics.activities.iter().enumerate() {
            writeln!(
                f,
                "{:<4} {:<20} {:<12} {:<12} {:<12} {:<10.1} {}",
                i + 1,
                a.activity_type.label(),
                format_hhmm(a.start_time),
                format_hhmm(a.end_time()),
                format_hhmm(a.duration),
                a.miles,
                a.notes,
            )?;
        }

        f.write_str(&heavy)
    }
}

/// Writes [`render_table`] output for each route to any `Write` sink.
///
/// Each route is preceded by a `Route N` heading; consecutive routes are
/// separated by a blank line.
pub struct TableWriter<W: Write> {
    out:      W,
    routes:   usize,
    finished: bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, routes: 0, finished: false }
    }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TableWriter<W> {
    fn write_route(&mut self, route: RouteId, metrics: &RouteMetrics) -> OutputResult<()> {
        if self.routes > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "Route {}", route.0)?;
        writeln!(self.out, "{}", RouteTable(metrics))?;
        self.routes += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
