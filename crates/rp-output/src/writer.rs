//! The `OutputWriter` trait implemented by all backend writers.

use rp_core::RouteId;
use rp_schedule::RouteMetrics;

use crate::OutputResult;

/// Trait implemented by the CSV and table writers.
pub trait OutputWriter {
    /// Write the summary and full activity timeline of one route.
    fn write_route(&mut self, route: RouteId, metrics: &RouteMetrics) -> OutputResult<()>;

    /// Flush all underlying sinks.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
