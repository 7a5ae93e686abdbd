//! The segment scheduler.
//!
//! # Algorithm
//!
//! ```text
//! emit LOADING
//! miles_remaining = total_miles, hours_until_break = remaining_hours
//! while miles_remaining > 0:
//!     segment = min(miles_remaining, hours_until_break * speed)
//!     emit DRIVING(segment), hours_until_break -= segment / speed
//!     if hours_until_break <= 0 and miles_remaining > 0:
//!         emit BREAK, hours_until_break = max_driving_hours
//! emit UNLOADING
//! ```
//!
//! A segment never spans a break boundary.  Routes needing more than
//! [`MAX_DUTY_WINDOWS`] full windows are rejected up front: past that ratio a
//! window's mileage can fall below the float spacing of `total_miles`, and
//! subtracting it would no longer shrink the remaining distance.  Under the
//! cap the loop runs about `ceil(total_miles / miles_per_window) + 1` times.
//!
//! With `remaining_hours == 0` the first iteration produces a zero-mile,
//! zero-duration `Driving` activity followed immediately by a `Break`.  The
//! empty segment is kept in the timeline so the schedule shows the driver
//! starting with an exhausted window.

use rp_core::{CalculatorConfig, RouteError, RouteResult};
use tracing::{debug, trace, warn};

use crate::activity::{Activity, ActivityType, HaulPhase};
use crate::metrics::RouteMetrics;
use crate::validate::{TripRequest, validate_inputs};

const LOADING_NOTE: &str = "Loading cargo at origin";
const UNLOADING_NOTE: &str = "Unloading cargo at destination";

/// Most full duty windows a single route may span.
pub const MAX_DUTY_WINDOWS: f64 = 10_000.0;

// ── RouteCalculator ───────────────────────────────────────────────────────────

/// Schedules routes under one fixed [`CalculatorConfig`].
///
/// Holds no state besides the configuration, so a single calculator can be
/// shared freely and every call is independent of the last.
#[derive(Clone, Debug, Default)]
pub struct RouteCalculator {
    config: CalculatorConfig,
}

impl RouteCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the activity timeline and totals for one trip.
    ///
    /// # Errors
    ///
    /// - [`RouteError::ConfigurationHazard`][rp_core::RouteError::ConfigurationHazard]
    ///   if the configuration cannot make progress.
    /// - [`RouteError::InvalidInput`][rp_core::RouteError::InvalidInput] if any
    ///   trip scalar is out of range.
    pub fn calculate(
        &self,
        total_miles:     f64,
        deadhead_miles:  f64,
        remaining_hours: f64,
    ) -> RouteResult<RouteMetrics> {
        self.config.check()?;
        validate_inputs(total_miles, deadhead_miles, remaining_hours, &self.config)?;
        self.check_window_count(total_miles)?;
        Ok(self.schedule(total_miles, deadhead_miles, remaining_hours))
    }

    /// [`calculate`](Self::calculate) for a loaded [`TripRequest`].
    pub fn calculate_trip(&self, trip: &TripRequest) -> RouteResult<RouteMetrics> {
        self.calculate(trip.total_miles, trip.deadhead_miles, trip.remaining_hours)
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Reject routes whose distance spans more duty windows than the loop
    /// can count down reliably.
    fn check_window_count(&self, total_miles: f64) -> RouteResult<()> {
        let per_window = self.config.miles_per_window();
        let windows = total_miles / per_window;
        if windows > MAX_DUTY_WINDOWS {
            return Err(RouteError::InvalidInput(format!(
                "Total miles ({total_miles}) span {windows:.0} duty windows of {per_window} miles; \
                 at most {MAX_DUTY_WINDOWS} are supported"
            )));
        }
        Ok(())
    }

    /// The greedy scheduling pass.  Inputs must already be validated.
    fn schedule(&self, total_miles: f64, deadhead_miles: f64, remaining_hours: f64) -> RouteMetrics {
        let cfg = &self.config;
        let mut activities = Vec::with_capacity(self.activity_capacity(total_miles));

        let mut current_time = 0.0;
        let mut miles_driven = 0.0;
        let mut miles_remaining = total_miles;
        let mut hours_until_break = remaining_hours;
        let mut total_driving_time = 0.0;
        let mut total_break_time = 0.0;

        activities.push(Activity::stationary(
            ActivityType::Loading,
            current_time,
            cfg.loading_duration,
            LOADING_NOTE,
        ));
        current_time += cfg.loading_duration;

        if remaining_hours <= 0.0 && total_miles > 0.0 {
            warn!("duty window already exhausted; route starts with a zero-mile segment and a break");
        }

        while miles_remaining > 0.0 {
            let max_miles_before_break = hours_until_break * cfg.speed_mph;
            let segment_miles = miles_remaining.min(max_miles_before_break);
            let segment_duration = segment_miles / cfg.speed_mph;

            let phase = HaulPhase::classify(miles_driven, segment_miles, deadhead_miles);
            trace!(miles_driven, segment_miles, deadhead_miles, ?phase, "classified segment");

            activities.push(Activity::driving(current_time, segment_duration, segment_miles, phase));
            debug!(
                start = current_time,
                hours = segment_duration,
                miles = segment_miles,
                note = phase.note(),
                "driving segment"
            );

            current_time += segment_duration;
            miles_driven += segment_miles;
            miles_remaining -= segment_miles;
            total_driving_time += segment_duration;
            hours_until_break -= segment_duration;

            if hours_until_break <= 0.0 && miles_remaining > 0.0 {
                activities.push(Activity::stationary(
                    ActivityType::Break,
                    current_time,
                    cfg.break_duration,
                    format!("Mandatory {}-hour rest", cfg.break_duration),
                ));
                debug!(start = current_time, hours = cfg.break_duration, miles_remaining, "mandatory break");

                current_time += cfg.break_duration;
                total_break_time += cfg.break_duration;
                hours_until_break = cfg.max_driving_hours;
            }
        }

        activities.push(Activity::stationary(
            ActivityType::Unloading,
            current_time,
            cfg.unloading_duration,
            UNLOADING_NOTE,
        ));
        current_time += cfg.unloading_duration;

        RouteMetrics {
            total_miles,
            deadhead_miles,
            loaded_miles: total_miles - deadhead_miles,
            total_driving_time,
            total_break_time,
            total_load_unload_time: cfg.total_load_unload_hours(),
            total_time: current_time,
            activities,
        }
    }

    /// Expected number of activities: loading, unloading, and one driving
    /// segment plus one break per duty window (with one extra window for a
    /// partial first one).  Bounded by [`MAX_DUTY_WINDOWS`].
    fn activity_capacity(&self, total_miles: f64) -> usize {
        let windows = (total_miles / self.config.miles_per_window()).ceil();
        2 + 2 * (windows as usize + 1)
    }
}

// ── Free function ─────────────────────────────────────────────────────────────

/// Calculate a route with `config`, or the default constants when `None`.
///
/// ```
/// let metrics = rp_schedule::calculate(500.0, 50.0, 8.0, None).unwrap();
/// assert_eq!(metrics.activities.len(), 5);
/// assert_eq!(metrics.total_break_time, 10.0);
/// ```
pub fn calculate(
    total_miles:     f64,
    deadhead_miles:  f64,
    remaining_hours: f64,
    config:          Option<&CalculatorConfig>,
) -> RouteResult<RouteMetrics> {
    RouteCalculator::new(config.copied().unwrap_or_default())
        .calculate(total_miles, deadhead_miles, remaining_hours)
}
