//! Route time model.
//!
//! # Design
//!
//! All schedule times are `f64` hours elapsed since the route starts (the
//! beginning of loading).  Durations use the same unit, so
//! `end = start + duration` with no conversion.
//!
//! For display, hours are converted to whole minutes and rendered as
//! `HH:MM`:
//!
//!   total_minutes = floor(min(|hours|, 999) * 60)
//!
//! The hour field is not wrapped at 24: a route finishing 22.09 hours after it
//! started renders as `22:05`, and one finishing after 30 hours as `30:..`.

use std::fmt;

/// Largest magnitude (in hours) rendered before clamping.
pub const MAX_DISPLAY_HOURS: f64 = 999.0;

// ── HhMm ──────────────────────────────────────────────────────────────────────

/// A duration or offset truncated to whole minutes, displayed as `HH:MM`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HhMm {
    pub hours:   u32,
    pub minutes: u32,
}

impl HhMm {
    pub const ZERO: HhMm = HhMm { hours: 0, minutes: 0 };

    /// Convert fractional hours to `HhMm`.
    ///
    /// Non-finite input yields `00:00`; negative input is taken by absolute
    /// value; magnitudes above [`MAX_DISPLAY_HOURS`] are clamped.  Minutes are
    /// truncated, never rounded.
    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() {
            return Self::ZERO;
        }
        let clamped = hours.abs().min(MAX_DISPLAY_HOURS);
        let total_minutes = (clamped * 60.0).floor() as u32;
        Self {
            hours:   total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl From<f64> for HhMm {
    fn from(hours: f64) -> Self {
        Self::from_hours(hours)
    }
}

impl fmt::Display for HhMm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Render fractional hours as a zero-padded `HH:MM` string.
///
/// ```
/// assert_eq!(rp_core::format_hhmm(22.0909), "22:05");
/// ```
pub fn format_hhmm(hours: f64) -> String {
    HhMm::from_hours(hours).to_string()
}
