//! Calculator configuration.
//!
//! The five regulatory/physical constants are held in an immutable value that
//! is passed into every calculation.  There is no process-wide default state:
//! callers that want the standard constants use `CalculatorConfig::default()`.

use crate::{RouteError, RouteResult};

// ── Defaults ──────────────────────────────────────────────────────────────────

/// Average driving speed, miles per hour.
pub const DEFAULT_SPEED_MPH: f64 = 55.0;
/// Hours of driving allowed in one duty window before a mandatory break.
pub const DEFAULT_MAX_DRIVING_HOURS: f64 = 11.0;
/// Length of the mandatory rest break, hours.
pub const DEFAULT_BREAK_DURATION: f64 = 10.0;
/// Time spent loading at the origin, hours.
pub const DEFAULT_LOADING_DURATION: f64 = 1.5;
/// Time spent unloading at the destination, hours.
pub const DEFAULT_UNLOADING_DURATION: f64 = 1.5;

// ── CalculatorConfig ──────────────────────────────────────────────────────────

/// Constraints applied to one route calculation.
///
/// Typically built with [`Default`] and adjusted with the `with_*` methods,
/// or deserialized from a JSON file by the application (`serde` feature);
/// any field missing from the JSON takes its default.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Average driving speed, miles/hour.  Must be > 0.
    pub speed_mph: f64,

    /// Duty-window ceiling before a mandatory break, hours.  Must be > 0.
    pub max_driving_hours: f64,

    /// Mandatory rest length, hours.
    pub break_duration: f64,

    /// Fixed loading time at the origin, hours.
    pub loading_duration: f64,

    /// Fixed unloading time at the destination, hours.
    pub unloading_duration: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            speed_mph:          DEFAULT_SPEED_MPH,
            max_driving_hours:  DEFAULT_MAX_DRIVING_HOURS,
            break_duration:     DEFAULT_BREAK_DURATION,
            loading_duration:   DEFAULT_LOADING_DURATION,
            unloading_duration: DEFAULT_UNLOADING_DURATION,
        }
    }
}

impl CalculatorConfig {
    pub fn new(
        speed_mph:          f64,
        max_driving_hours:  f64,
        break_duration:     f64,
        loading_duration:   f64,
        unloading_duration: f64,
    ) -> Self {
        Self {
            speed_mph,
            max_driving_hours,
            break_duration,
            loading_duration,
            unloading_duration,
        }
    }

    pub fn with_speed_mph(mut self, speed_mph: f64) -> Self {
        self.speed_mph = speed_mph;
        self
    }

    pub fn with_max_driving_hours(mut self, hours: f64) -> Self {
        self.max_driving_hours = hours;
        self
    }

    pub fn with_break_duration(mut self, hours: f64) -> Self {
        self.break_duration = hours;
        self
    }

    pub fn with_loading_duration(mut self, hours: f64) -> Self {
        self.loading_duration = hours;
        self
    }

    pub fn with_unloading_duration(mut self, hours: f64) -> Self {
        self.unloading_duration = hours;
        self
    }

    /// Combined terminal time (loading + unloading).  Independent of the
    /// driving schedule.
    #[inline]
    pub fn total_load_unload_hours(&self) -> f64 {
        self.loading_duration + self.unloading_duration
    }

    /// Miles coverable in one full duty window.
    #[inline]
    pub fn miles_per_window(&self) -> f64 {
        self.speed_mph * self.max_driving_hours
    }

    /// Reject configurations under which the scheduling loop cannot make
    /// progress.
    ///
    /// A zero, negative, subnormal, or non-finite `speed_mph` or
    /// `max_driving_hours` leaves every segment at (next to) zero miles, so
    /// the loop would never exhaust the trip distance.
    pub fn check(&self) -> RouteResult<()> {
        if !(self.speed_mph.is_normal() && self.speed_mph > 0.0) {
            return Err(RouteError::ConfigurationHazard(format!(
                "speed_mph must be a positive normal finite number, got {}",
                self.speed_mph
            )));
        }
        if !(self.max_driving_hours.is_normal() && self.max_driving_hours > 0.0) {
            return Err(RouteError::ConfigurationHazard(format!(
                "max_driving_hours must be a positive normal finite number, got {}",
                self.max_driving_hours
            )));
        }
        Ok(())
    }
}
