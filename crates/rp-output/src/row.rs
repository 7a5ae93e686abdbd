//! Plain data row types written by output backends.

use rp_core::RouteId;
use rp_schedule::{Activity, RouteMetrics};

/// One activity of one route, flattened for tabular output.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub route_id:       u32,
    /// 1-based position within the route's timeline.
    pub seq:            u32,
    pub activity:       &'static str,
    pub start_hours:    f64,
    pub end_hours:      f64,
    pub duration_hours: f64,
    pub miles:          f64,
    pub notes:          String,
}

impl ActivityRow {
    pub fn new(route: RouteId, seq: u32, activity: &Activity) -> Self {
        Self {
            route_id:       route.0,
            seq,
            activity:       activity.activity_type.label(),
            start_hours:    activity.start_time,
            end_hours:      activity.end_time(),
            duration_hours: activity.duration,
            miles:          activity.miles,
            notes:          activity.notes.clone(),
        }
    }

    /// All rows for one route, numbered from 1.
    pub fn for_route(route: RouteId, metrics: &RouteMetrics) -> Vec<Self> {
        metrics
            .activities
            .iter()
            .zip(1u32..)
            .map(|(a, seq)| Self::new(route, seq, a))
            .collect()
    }
}

/// Aggregate totals for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummaryRow {
    pub route_id:          u32,
    pub total_miles:       f64,
    pub deadhead_miles:    f64,
    pub loaded_miles:      f64,
    pub driving_hours:     f64,
    pub break_hours:       f64,
    pub load_unload_hours: f64,
    pub total_hours:       f64,
    pub activity_count:    u32,
}

impl RouteSummaryRow {
    pub fn new(route: RouteId, metrics: &RouteMetrics) -> Self {
        Self {
            route_id:          route.0,
            total_miles:       metrics.total_miles,
            deadhead_miles:    metrics.deadhead_miles,
            loaded_miles:      metrics.loaded_miles,
            driving_hours:     metrics.total_driving_time,
            break_hours:       metrics.total_break_time,
            load_unload_hours: metrics.total_load_unload_time,
            total_hours:       metrics.total_time,
            activity_count:    metrics.activities.len() as u32,
        }
    }
}
