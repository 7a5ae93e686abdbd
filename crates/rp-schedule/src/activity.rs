//! Core schedule types: `ActivityType`, `Activity`, and `HaulPhase`.
//!
//! # Timeline model
//!
//! A schedule is a `Vec<Activity>` in chronological order.  Adjacency is
//! purely positional: activity `i + 1` starts exactly when activity `i` ends,
//! so there are no gaps or overlaps:
//!
//! ```text
//! activities[i].end_time() == activities[i + 1].start_time
//! ```
//!
//! # Deadhead classification
//!
//! Each driving segment is tagged by where it falls relative to the deadhead
//! boundary (the cumulative mileage at which the empty run ends and the
//! loaded haul begins).  Comparison is on distance, not time, and a segment
//! that ends exactly on the boundary is still fully deadhead.

use std::fmt;

// ── ActivityType ──────────────────────────────────────────────────────────────

/// What the driver is doing during an activity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityType {
    Loading,
    Driving,
    Break,
    Unloading,
}

impl ActivityType {
    /// Display label used in schedule tables and CSV output.
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Loading   => "Loading",
            ActivityType::Driving   => "Driving",
            ActivityType::Break     => "Break",
            ActivityType::Unloading => "Unloading",
        }
    }

    /// `true` only for `Driving`; every other type covers zero miles.
    #[inline]
    pub fn is_driving(self) -> bool {
        matches!(self, ActivityType::Driving)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── HaulPhase ─────────────────────────────────────────────────────────────────

/// Position of a driving segment relative to the deadhead boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HaulPhase {
    /// Entirely within the empty run.
    Deadhead,
    /// Starts empty and crosses into the loaded haul.
    Mixed,
    /// Entirely past the deadhead boundary.
    Loaded,
}

impl HaulPhase {
    /// Classify a segment covering `segment_miles` after `miles_driven` miles
    /// have already been driven.
    ///
    /// A segment ending exactly at `deadhead_miles` counts as `Deadhead`; one
    /// starting exactly there counts as `Loaded`.
    pub fn classify(miles_driven: f64, segment_miles: f64, deadhead_miles: f64) -> Self {
        if miles_driven < deadhead_miles {
            if segment_miles <= deadhead_miles - miles_driven {
                HaulPhase::Deadhead
            } else {
                HaulPhase::Mixed
            }
        } else {
            HaulPhase::Loaded
        }
    }

    /// Free-text note recorded on the driving activity.
    pub fn note(self) -> &'static str {
        match self {
            HaulPhase::Deadhead => "Deadhead (empty)",
            HaulPhase::Mixed    => "Deadhead + Loaded",
            HaulPhase::Loaded   => "Loaded haul",
        }
    }
}

impl fmt::Display for HaulPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.note())
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

/// One scheduled event on the route timeline.
///
/// Times are hours elapsed since the route started.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub activity_type: ActivityType,

    /// Hours from route start at which this activity begins.
    pub start_time: f64,

    /// Length of the activity, hours.
    pub duration: f64,

    /// Distance covered.  Always 0 for non-driving activities.
    pub miles: f64,

    /// Classification of the activity (deadhead/loaded for driving,
    /// a fixed description otherwise).
    pub notes: String,
}

impl Activity {
    pub(crate) fn stationary(
        activity_type: ActivityType,
        start_time:    f64,
        duration:      f64,
        notes:         impl Into<String>,
    ) -> Self {
        debug_assert!(!activity_type.is_driving());
        Self { activity_type, start_time, duration, miles: 0.0, notes: notes.into() }
    }

    pub(crate) fn driving(start_time: f64, duration: f64, miles: f64, phase: HaulPhase) -> Self {
        Self {
            activity_type: ActivityType::Driving,
            start_time,
            duration,
            miles,
            notes: phase.note().to_owned(),
        }
    }

    /// Hours from route start at which this activity ends.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }
}
