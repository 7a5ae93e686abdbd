//! `rp-core`: foundational types for the `route_planner` workspace.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no `rp-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `RouteId`                                             |
//! | [`config`] | `CalculatorConfig` and its default constants          |
//! | [`time`]   | `HhMm`, `format_hhmm`                                 |
//! | [`error`]  | `RouteError`, `RouteResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CalculatorConfig;
pub use error::{RouteError, RouteResult};
pub use ids::RouteId;
pub use time::{HhMm, format_hhmm};
