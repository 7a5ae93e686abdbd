//! `rp-output`: route metrics writers for the route_planner workspace.
//!
//! Two backends are provided:
//!
//! | Backend         | Output                                                   |
//! |-----------------|----------------------------------------------------------|
//! | [`CsvWriter`]   | `activities.csv`, `route_summaries.csv` in a directory   |
//! | [`TableWriter`] | Human-readable summary + schedule table to any `Write`   |
//!
//! Both implement [`OutputWriter`], so an application can drive either (or
//! several) from the same loop over calculated routes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rp_output::{CsvWriter, OutputWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! for (trip, metrics) in results {
//!     writer.write_route(trip.route_id, &metrics)?;
//! }
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod table;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{ActivityRow, RouteSummaryRow};
pub use table::{RouteTable, TableWriter, render_table};
pub use writer::OutputWriter;
