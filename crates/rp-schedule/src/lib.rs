//! `rp-schedule`: driver activity scheduling for a single freight haul.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`activity`]  | `ActivityType`, `Activity`, `HaulPhase`                   |
//! | [`metrics`]   | `RouteMetrics`                                            |
//! | [`validate`]  | `validate_inputs`, `TripRequest`                          |
//! | [`scheduler`] | `RouteCalculator`, `calculate`                            |
//! | [`loader`]    | `load_trips_csv`, `load_trips_reader`                     |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Schedule model (summary)
//!
//! A route is one contiguous duty period:
//!
//! ```text
//! LOADING → DRIVING → [BREAK → DRIVING]* → UNLOADING
//! ```
//!
//! Driving distance is cut greedily into segments, each ending either at the
//! end of the trip or at the end of the current duty window, whichever comes
//! first.  The first window is only as long as the hours the driver has left;
//! every break restores a full window.

pub mod activity;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod scheduler;
pub mod validate;

#[cfg(test)]
mod tests;

pub use activity::{Activity, ActivityType, HaulPhase};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_trips_csv, load_trips_reader};
pub use metrics::RouteMetrics;
pub use scheduler::{MAX_DUTY_WINDOWS, RouteCalculator, calculate};
pub use validate::{TripRequest, validate_inputs};
