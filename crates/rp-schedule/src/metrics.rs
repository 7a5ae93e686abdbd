//! `RouteMetrics`: the result of one route calculation.

use crate::activity::{Activity, ActivityType};

/// Aggregate totals plus the full activity timeline for one route.
///
/// Built fresh by [`RouteCalculator::calculate`][crate::RouteCalculator::calculate]
/// and never mutated afterwards.  By construction:
///
/// ```text
/// loaded_miles = total_miles - deadhead_miles
/// total_time   = total_driving_time + total_break_time + total_load_unload_time
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMetrics {
    pub total_miles:    f64,
    pub deadhead_miles: f64,
    pub loaded_miles:   f64,

    /// Sum of all `Driving` durations, hours.
    pub total_driving_time: f64,
    /// Sum of all `Break` durations, hours.
    pub total_break_time: f64,
    /// `loading_duration + unloading_duration`, regardless of the schedule.
    pub total_load_unload_time: f64,
    /// End time of the final activity, hours.
    pub total_time: f64,

    /// Chronological timeline: `Loading` first, `Unloading` last.
    pub activities: Vec<Activity>,
}

impl RouteMetrics {
    /// Iterate over the `Driving` activities in order.
    pub fn driving_segments(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.of_type(ActivityType::Driving)
    }

    /// Iterate over the `Break` activities in order.
    pub fn breaks(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.of_type(ActivityType::Break)
    }

    pub fn break_count(&self) -> usize {
        self.breaks().count()
    }

    /// Sum of `miles` over all activities.  Equals `total_miles` for every
    /// schedule this crate produces.
    pub fn total_activity_miles(&self) -> f64 {
        self.activities.iter().map(|a| a.miles).sum()
    }

    fn of_type(&self, ty: ActivityType) -> impl Iterator<Item = &Activity> + '_ {
        self.activities.iter().filter(move |a| a.activity_type == ty)
    }
}
