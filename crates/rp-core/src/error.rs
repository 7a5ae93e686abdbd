//! Calculation error type.
//!
//! Sub-crates define their own error enums and wrap `RouteError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The two ways a route calculation can fail.
///
/// Both are raised before any activity is scheduled, so a failed calculation
/// never yields a partial timeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// A trip scalar is out of range (negative miles, deadhead exceeding the
    /// total, remaining hours outside `0..=max_driving_hours`, non-finite).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The calculator configuration cannot make progress (non-positive speed
    /// or duty window).
    #[error("configuration hazard: {0}")]
    ConfigurationHazard(String),
}

impl RouteError {
    /// `true` for errors the caller can fix by re-entering the trip scalars.
    pub fn is_input_error(&self) -> bool {
        matches!(self, RouteError::InvalidInput(_))
    }
}

/// Shorthand result type for all `rp-*` crates.
pub type RouteResult<T> = Result<T, RouteError>;
