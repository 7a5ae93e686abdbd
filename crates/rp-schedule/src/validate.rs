//! Input validation for the three trip scalars.
//!
//! Only the trip inputs are checked here.  Configuration fields are the
//! scheduler's concern (see [`CalculatorConfig::check`]).

use rp_core::{CalculatorConfig, RouteError, RouteId, RouteResult};

/// One trip to schedule: the three caller-supplied scalars, keyed by route.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRequest {
    pub route_id:        RouteId,
    /// Total route distance, miles.
    pub total_miles:     f64,
    /// Empty-running distance at the start of the route, miles.
    pub deadhead_miles:  f64,
    /// Hours left in the driver's current duty window.
    pub remaining_hours: f64,
}

impl TripRequest {
    pub fn new(route_id: RouteId, total_miles: f64, deadhead_miles: f64, remaining_hours: f64) -> Self {
        Self { route_id, total_miles, deadhead_miles, remaining_hours }
    }

    /// Check this trip against `config`.  See [`validate_inputs`].
    pub fn validate(&self, config: &CalculatorConfig) -> RouteResult<()> {
        validate_inputs(self.total_miles, self.deadhead_miles, self.remaining_hours, config)
    }
}

/// Reject out-of-range trip scalars before scheduling begins.
///
/// Fails with [`RouteError::InvalidInput`] when any value is non-finite, when
/// either distance is negative, when `deadhead_miles > total_miles`, or when
/// `remaining_hours` falls outside `0..=config.max_driving_hours`.
pub fn validate_inputs(
    total_miles:     f64,
    deadhead_miles:  f64,
    remaining_hours: f64,
    config:          &CalculatorConfig,
) -> RouteResult<()> {
    for (name, value) in [
        ("Total miles", total_miles),
        ("Deadhead miles", deadhead_miles),
        ("Remaining hours", remaining_hours),
    ] {
        if !value.is_finite() {
            return Err(invalid(format!("{name} must be a finite number, got {value}")));
        }
    }

    if total_miles < 0.0 {
        return Err(invalid("Total miles cannot be negative"));
    }
    if deadhead_miles < 0.0 {
        return Err(invalid("Deadhead miles cannot be negative"));
    }
    if deadhead_miles > total_miles {
        return Err(invalid("Deadhead miles cannot exceed total miles"));
    }
    if remaining_hours < 0.0 {
        return Err(invalid("Remaining hours cannot be negative"));
    }
    if remaining_hours > config.max_driving_hours {
        return Err(invalid(format!(
            "Remaining hours cannot exceed max driving hours ({})",
            config.max_driving_hours
        )));
    }
    Ok(())
}

fn invalid(msg: impl Into<String>) -> RouteError {
    RouteError::InvalidInput(msg.into())
}
