//! haul: end-to-end example for the route_planner workspace.
//!
//! Schedules a small batch of freight hauls, prints each route's summary and
//! driver activity table, and writes `activities.csv` / `route_summaries.csv`
//! to `./output`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p haul                       # default constants (55 mph, 11 h window, ...)
//! cargo run -p haul -- calculator.json    # override any subset of the constants
//! RUST_LOG=debug cargo run -p haul        # log every segment and break
//! ```
//!
//! `calculator.json` example:
//!
//! ```json
//! { "speed_mph": 60, "break_duration": 8 }
//! ```

use std::env;
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use rp_core::CalculatorConfig;
use rp_output::{CsvWriter, OutputWriter, TableWriter};
use rp_schedule::{RouteCalculator, load_trips_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "./output";

// ── Trip CSV ──────────────────────────────────────────────────────────────────

// route 0: the 500-mile reference haul (partial window, one break)
// route 1: long haul needing two breaks
// route 2: short hop, no break
// route 3: driver starts with an exhausted window
// route 4: deadhead exceeds total (rejected)
const TRIPS_CSV: &str = "\
route_id,total_miles,deadhead_miles,remaining_hours\n\
0,500,50,8\n\
1,1500,200,11\n\
2,100,0,11\n\
3,300,300,0\n\
4,100,150,5\n\
";

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => CalculatorConfig::default(),
    };
    info!(?config, "calculator configuration");
    let calculator = RouteCalculator::new(config);

    let trips = load_trips_reader(Cursor::new(TRIPS_CSV))?;

    fs::create_dir_all(OUTPUT_DIR)
        .with_context(|| format!("creating {OUTPUT_DIR}"))?;
    let mut csv = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut table = TableWriter::new(io::stdout().lock());

    let t0 = Instant::now();
    let mut scheduled = 0usize;
    for trip in &trips {
        match calculator.calculate_trip(trip) {
            Ok(metrics) => {
                table.write_route(trip.route_id, &metrics)?;
                csv.write_route(trip.route_id, &metrics)?;
                scheduled += 1;
            }
            // One bad trip does not abort the batch.
            Err(e) if e.is_input_error() => warn!(route = %trip.route_id, "skipping trip: {e}"),
            Err(e) => error!(route = %trip.route_id, "{e}"),
        }
    }
    table.finish()?;
    csv.finish()?;

    info!(
        scheduled,
        rejected = trips.len() - scheduled,
        elapsed_us = t0.elapsed().as_micros() as u64,
        output = OUTPUT_DIR,
        "batch complete"
    );
    Ok(())
}

fn load_config(path: &Path) -> Result<CalculatorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading calculator config {}", path.display()))?;
    let config: CalculatorConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing calculator config {}", path.display()))?;
    config.check()?;
    Ok(config)
}
