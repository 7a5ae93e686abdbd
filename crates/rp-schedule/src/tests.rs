//! Unit tests for rp-schedule.

use rp_core::{CalculatorConfig, RouteError, format_hhmm};

use crate::{Activity, ActivityType, RouteCalculator, RouteMetrics, calculate};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

fn run(total: f64, deadhead: f64, remaining: f64) -> RouteMetrics {
    calculate(total, deadhead, remaining, None).unwrap()
}

fn types(m: &RouteMetrics) -> Vec<ActivityType> {
    m.activities.iter().map(|a| a.activity_type).collect()
}

fn driving_notes(m: &RouteMetrics) -> Vec<&str> {
    m.driving_segments().map(|a| a.notes.as_str()).collect()
}

/// Invariants every successful calculation must satisfy.
fn assert_well_formed(m: &RouteMetrics) {
    let acts = &m.activities;
    assert_eq!(acts.first().map(|a| a.activity_type), Some(ActivityType::Loading));
    assert_eq!(acts.last().map(|a| a.activity_type), Some(ActivityType::Unloading));

    for pair in acts.windows(2) {
        assert_eq!(pair[0].end_time(), pair[1].start_time, "gap between {pair:?}");
    }
    for a in acts.iter().filter(|a| !a.activity_type.is_driving()) {
        assert_eq!(a.miles, 0.0);
    }

    assert_eq!(m.loaded_miles, m.total_miles - m.deadhead_miles);
    assert!(m.loaded_miles >= 0.0);
    assert!(approx(m.total_activity_miles(), m.total_miles));
    assert!(approx(
        m.total_time,
        m.total_driving_time + m.total_break_time + m.total_load_unload_time
    ));
    assert_eq!(acts.last().map(Activity::end_time), Some(m.total_time));

    let driving: f64 = m.driving_segments().map(|a| a.duration).sum();
    let breaks: f64 = m.breaks().map(|a| a.duration).sum();
    assert!(approx(driving, m.total_driving_time));
    assert!(approx(breaks, m.total_break_time));
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn partial_window_then_break() {
        let m = run(500.0, 50.0, 8.0);
        assert_well_formed(&m);
        assert_eq!(
            types(&m),
            [
                ActivityType::Loading,
                ActivityType::Driving,
                ActivityType::Break,
                ActivityType::Driving,
                ActivityType::Unloading,
            ]
        );

        let a = &m.activities;
        assert_eq!(a[1].miles, 440.0);
        assert_eq!(a[1].notes, "Deadhead + Loaded");
        assert_eq!(a[3].miles, 60.0);
        assert_eq!(a[3].notes, "Loaded haul");
        assert_eq!(a[2].notes, "Mandatory 10-hour rest");
        assert_eq!(a[0].notes, "Loading cargo at origin");
        assert_eq!(a[4].notes, "Unloading cargo at destination");

        let clock: Vec<(String, String)> = a
            .iter()
            .map(|x| (format_hhmm(x.start_time), format_hhmm(x.end_time())))
            .collect();
        let expected = [
            ("00:00", "01:30"),
            ("01:30", "09:30"),
            ("09:30", "19:30"),
            ("19:30", "20:35"),
            ("20:35", "22:05"),
        ];
        for (got, want) in clock.iter().zip(expected) {
            assert_eq!((got.0.as_str(), got.1.as_str()), want);
        }

        assert!((m.total_driving_time - 9.0909).abs() < 1e-3);
        assert_eq!(m.total_break_time, 10.0);
        assert!((m.total_time - 22.0909).abs() < 1e-3);
        assert_eq!(m.total_load_unload_time, 3.0);
        assert_eq!(m.loaded_miles, 450.0);
        assert_eq!(m.total_activity_miles(), 500.0);
    }

    #[test]
    fn short_route_needs_no_break() {
        let m = run(100.0, 0.0, 11.0);
        assert_well_formed(&m);
        assert_eq!(
            types(&m),
            [ActivityType::Loading, ActivityType::Driving, ActivityType::Unloading]
        );
        assert_eq!(m.activities[1].miles, 100.0);
        assert_eq!(m.activities[1].notes, "Loaded haul");
        assert_eq!(m.break_count(), 0);
        assert_eq!(m.total_break_time, 0.0);
    }

    #[test]
    fn simple_route_totals() {
        let m = run(300.0, 50.0, 11.0);
        assert_well_formed(&m);
        assert_eq!(m.loaded_miles, 250.0);
        assert!((m.total_driving_time - 300.0 / 55.0).abs() < 0.01);
        assert_eq!(m.total_break_time, 0.0);
        assert_eq!(m.total_load_unload_time, 3.0);
    }

    #[test]
    fn one_break_over_a_full_window() {
        // 700 mi at 55 mph = 12.7 h > 11 h.
        let m = run(700.0, 100.0, 11.0);
        assert_well_formed(&m);
        assert_eq!(m.break_count(), 1);
        assert_eq!(m.total_break_time, 10.0);
        let miles: Vec<f64> = m.driving_segments().map(|a| a.miles).collect();
        assert_eq!(miles, [605.0, 95.0]);
        assert_eq!(driving_notes(&m), ["Deadhead + Loaded", "Loaded haul"]);
    }

    #[test]
    fn multiple_breaks() {
        let m = run(1500.0, 200.0, 11.0);
        assert_well_formed(&m);
        assert_eq!(m.break_count(), 2);
        assert_eq!(m.total_break_time, 20.0);
        let miles: Vec<f64> = m.driving_segments().map(|a| a.miles).collect();
        assert_eq!(miles, [605.0, 605.0, 290.0]);
        assert_eq!(m.total_activity_miles(), 1500.0);
    }

    #[test]
    fn remaining_hours_bound_the_first_segment_only() {
        let m = run(700.0, 0.0, 5.0);
        assert_well_formed(&m);
        let segs: Vec<&Activity> = m.driving_segments().collect();
        assert!(segs[0].duration <= 5.0);
        assert_eq!(segs[0].miles, 275.0);
        // After the break the full 11-hour window applies.
        assert_eq!(segs[1].miles, 425.0);
        assert_eq!(m.break_count(), 1);
    }

    #[test]
    fn break_not_inserted_when_trip_ends_on_window_boundary() {
        // Exactly one full window of driving.
        let m = run(605.0, 0.0, 11.0);
        assert_well_formed(&m);
        assert_eq!(m.break_count(), 0);
        assert_eq!(m.total_driving_time, 11.0);
    }

    #[test]
    fn custom_config() {
        let cfg = CalculatorConfig::new(50.0, 10.0, 8.0, 1.0, 2.0);
        let m = calculate(1200.0, 0.0, 10.0, Some(&cfg)).unwrap();
        assert_well_formed(&m);
        let miles: Vec<f64> = m.driving_segments().map(|a| a.miles).collect();
        assert_eq!(miles, [500.0, 500.0, 200.0]);
        assert_eq!(m.total_break_time, 16.0);
        assert_eq!(m.total_driving_time, 24.0);
        assert_eq!(m.total_load_unload_time, 3.0);
        assert_eq!(m.total_time, 43.0);
        assert_eq!(m.breaks().next().unwrap().notes, "Mandatory 8-hour rest");
    }

    #[test]
    fn zero_length_break_keeps_timeline_contiguous() {
        let cfg = CalculatorConfig::default().with_break_duration(0.0);
        let m = calculate(1000.0, 0.0, 11.0, Some(&cfg)).unwrap();
        assert_well_formed(&m);
        assert_eq!(m.break_count(), 1);
        assert_eq!(m.total_break_time, 0.0);
    }

    #[test]
    fn calculator_and_free_function_agree() {
        let calc = RouteCalculator::default();
        assert_eq!(calc.config(), &CalculatorConfig::default());
        assert_eq!(
            calc.calculate(812.5, 33.0, 6.25).unwrap(),
            calculate(812.5, 33.0, 6.25, None).unwrap()
        );
    }
}

// ── Edge cases ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn zero_miles_is_load_and_unload_only() {
        for remaining in [0.0, 4.0, 11.0] {
            let m = run(0.0, 0.0, remaining);
            assert_well_formed(&m);
            assert_eq!(types(&m), [ActivityType::Loading, ActivityType::Unloading]);
            assert_eq!(m.total_driving_time, 0.0);
            assert_eq!(m.total_break_time, 0.0);
            assert_eq!(m.total_time, 3.0);
        }
    }

    #[test]
    fn exhausted_window_emits_empty_segment_then_break() {
        let m = run(100.0, 0.0, 0.0);
        assert_well_formed(&m);
        assert_eq!(
            types(&m),
            [
                ActivityType::Loading,
                ActivityType::Driving,
                ActivityType::Break,
                ActivityType::Driving,
                ActivityType::Unloading,
            ]
        );
        let empty = &m.activities[1];
        assert_eq!(empty.miles, 0.0);
        assert_eq!(empty.duration, 0.0);
        assert_eq!(empty.start_time, 1.5);
        assert_eq!(m.activities[3].miles, 100.0);
    }

    #[test]
    fn exhausted_window_empty_segment_is_deadhead_when_deadhead_pending() {
        let m = run(100.0, 40.0, 0.0);
        assert_eq!(driving_notes(&m), ["Deadhead (empty)", "Deadhead + Loaded"]);
    }

    #[test]
    fn all_deadhead_never_loaded() {
        let m = run(1000.0, 1000.0, 11.0);
        assert_well_formed(&m);
        assert_eq!(m.loaded_miles, 0.0);
        assert!(driving_notes(&m).iter().all(|n| *n == "Deadhead (empty)"));
        assert_eq!(m.driving_segments().count(), 2);
    }

    #[test]
    fn segment_ending_on_deadhead_boundary_stays_deadhead() {
        let m = run(700.0, 605.0, 11.0);
        assert_eq!(driving_notes(&m), ["Deadhead (empty)", "Loaded haul"]);
    }

    #[test]
    fn zero_deadhead_is_loaded_from_the_start() {
        let m = run(1500.0, 0.0, 11.0);
        assert!(driving_notes(&m).iter().all(|n| *n == "Loaded haul"));
    }

    #[test]
    fn deadhead_spanning_several_windows() {
        let m = run(1500.0, 1000.0, 11.0);
        assert_eq!(
            driving_notes(&m),
            ["Deadhead (empty)", "Deadhead + Loaded", "Loaded haul"]
        );
    }
}

// ── HaulPhase ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod haul_phase {
    use crate::HaulPhase;

    #[test]
    fn classify_thresholds() {
        assert_eq!(HaulPhase::classify(0.0, 40.0, 50.0), HaulPhase::Deadhead);
        assert_eq!(HaulPhase::classify(0.0, 50.0, 50.0), HaulPhase::Deadhead);
        assert_eq!(HaulPhase::classify(0.0, 50.1, 50.0), HaulPhase::Mixed);
        assert_eq!(HaulPhase::classify(49.0, 2.0, 50.0), HaulPhase::Mixed);
        assert_eq!(HaulPhase::classify(50.0, 10.0, 50.0), HaulPhase::Loaded);
        assert_eq!(HaulPhase::classify(0.0, 10.0, 0.0), HaulPhase::Loaded);
    }

    #[test]
    fn notes() {
        assert_eq!(HaulPhase::Deadhead.to_string(), "Deadhead (empty)");
        assert_eq!(HaulPhase::Mixed.to_string(), "Deadhead + Loaded");
        assert_eq!(HaulPhase::Loaded.to_string(), "Loaded haul");
    }

    #[test]
    fn activity_type_labels() {
        use crate::ActivityType;
        assert_eq!(ActivityType::Loading.to_string(), "Loading");
        assert_eq!(ActivityType::Break.label(), "Break");
        assert!(ActivityType::Driving.is_driving());
        assert!(!ActivityType::Unloading.is_driving());
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    fn input_error(total: f64, deadhead: f64, remaining: f64) -> String {
        match calculate(total, deadhead, remaining, None) {
            Err(RouteError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn deadhead_exceeding_total() {
        assert_eq!(input_error(100.0, 150.0, 5.0), "Deadhead miles cannot exceed total miles");
    }

    #[test]
    fn remaining_over_window() {
        assert_eq!(
            input_error(100.0, 0.0, 12.0),
            "Remaining hours cannot exceed max driving hours (11)"
        );
    }

    #[test]
    fn negative_values() {
        assert_eq!(input_error(-1.0, 0.0, 5.0), "Total miles cannot be negative");
        assert_eq!(input_error(100.0, -1.0, 5.0), "Deadhead miles cannot be negative");
        assert_eq!(input_error(100.0, 0.0, -0.5), "Remaining hours cannot be negative");
    }

    #[test]
    fn non_finite_values() {
        assert!(input_error(f64::INFINITY, 0.0, 5.0).contains("finite"));
        assert!(input_error(100.0, f64::NAN, 5.0).contains("finite"));
        assert!(input_error(100.0, 0.0, f64::NAN).contains("finite"));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(calculate(100.0, 100.0, 11.0, None).is_ok());
        assert!(calculate(0.0, 0.0, 0.0, None).is_ok());
    }

    #[test]
    fn window_limit_follows_config() {
        let cfg = CalculatorConfig::default().with_max_driving_hours(14.0);
        assert!(calculate(100.0, 0.0, 12.0, Some(&cfg)).is_ok());
    }

    #[test]
    fn trip_request_validate() {
        use rp_core::RouteId;
        use crate::TripRequest;

        let cfg = CalculatorConfig::default();
        assert!(TripRequest::new(RouteId(0), 500.0, 50.0, 8.0).validate(&cfg).is_ok());
        assert!(TripRequest::new(RouteId(1), 50.0, 500.0, 8.0).validate(&cfg).is_err());
    }

    #[test]
    fn zero_speed_is_configuration_hazard() {
        let cfg = CalculatorConfig::default().with_speed_mph(0.0);
        let err = calculate(100.0, 0.0, 5.0, Some(&cfg)).unwrap_err();
        assert!(matches!(err, RouteError::ConfigurationHazard(_)));
    }

    #[test]
    fn distance_beyond_float_resolution_is_rejected() {
        // 605 mi is below the float spacing at 1e20, so the countdown would stall.
        assert_eq!(1e20 - 605.0, 1e20);
        let msg = input_error(1e20, 0.0, 11.0);
        assert!(msg.contains("duty windows"), "{msg}");
    }

    #[test]
    fn window_cap_is_inclusive() {
        let per_window = CalculatorConfig::default().miles_per_window();
        let m = run(per_window * crate::MAX_DUTY_WINDOWS, 0.0, 11.0);
        assert_eq!(m.break_count(), crate::MAX_DUTY_WINDOWS as usize - 1);
        assert!(calculate(per_window * crate::MAX_DUTY_WINDOWS + 1.0, 0.0, 11.0, None).is_err());
    }

    #[test]
    fn tiny_speed_is_rejected_before_scheduling() {
        let cfg = CalculatorConfig::default().with_speed_mph(1e-300);
        let err = calculate(100.0, 0.0, 5.0, Some(&cfg)).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn subnormal_speed_is_configuration_hazard() {
        let cfg = CalculatorConfig::default().with_speed_mph(5e-324);
        let err = calculate(100.0, 0.0, 5.0, Some(&cfg)).unwrap_err();
        assert!(matches!(err, RouteError::ConfigurationHazard(_)));
    }

    #[test]
    fn non_positive_window_is_configuration_hazard() {
        let cfg = CalculatorConfig::default().with_max_driving_hours(0.0);
        let err = calculate(100.0, 0.0, 0.0, Some(&cfg)).unwrap_err();
        assert!(matches!(err, RouteError::ConfigurationHazard(_)));

        let cfg = CalculatorConfig::default().with_max_driving_hours(-3.0);
        let err = calculate(0.0, 0.0, 0.0, Some(&cfg)).unwrap_err();
        assert!(matches!(err, RouteError::ConfigurationHazard(_)));
    }
}

// ── Randomized invariants ─────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn invariants_hold_for_random_trips() {
        let mut rng = SmallRng::seed_from_u64(42);
        let calc = RouteCalculator::default();
        let window = calc.config().max_driving_hours;

        for _ in 0..2_000 {
            let total = rng.gen_range(0.0..5_000.0);
            let deadhead = total * rng.gen_range(0.0..=1.0);
            let remaining = rng.gen_range(0.0..=window);

            let m = calc.calculate(total, deadhead, remaining).unwrap();
            assert_well_formed(&m);

            for seg in m.driving_segments() {
                assert!(seg.duration <= window + EPS);
            }
            for pair in m.activities.windows(2) {
                assert!(
                    !(pair[0].activity_type == ActivityType::Break
                        && pair[1].activity_type == ActivityType::Break),
                    "back-to-back breaks"
                );
            }
            if deadhead == total {
                assert!(driving_notes(&m).iter().all(|n| *n != "Loaded haul"));
            }
        }
    }

    #[test]
    fn identical_calls_give_identical_results() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let total = rng.gen_range(0.0..3_000.0);
            let deadhead = total * rng.gen_range(0.0..=1.0);
            let remaining = rng.gen_range(0.0..=11.0);
            let a = run(total, deadhead, remaining);
            let b = run(total, deadhead, remaining);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn random_configs_terminate_and_stay_contiguous() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for _ in 0..500 {
            let cfg = CalculatorConfig::new(
                rng.gen_range(5.0..80.0),
                rng.gen_range(1.0..14.0),
                rng.gen_range(0.0..12.0),
                rng.gen_range(0.0..4.0),
                rng.gen_range(0.0..4.0),
            );
            let total = rng.gen_range(0.0..4_000.0);
            let remaining = rng.gen_range(0.0..=cfg.max_driving_hours);
            let m = calculate(total, 0.0, remaining, Some(&cfg)).unwrap();
            assert_well_formed(&m);
        }
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use rp_core::RouteId;

    use crate::{ScheduleError, TripRequest, load_trips_reader};

    const CSV: &str = "\
route_id,total_miles,deadhead_miles,remaining_hours\n\
0,500,50,8\n\
7, 1500 , 200, 11\n\
";

    #[test]
    fn loads_rows_in_order() {
        let trips = load_trips_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(
            trips,
            [
                TripRequest::new(RouteId(0), 500.0, 50.0, 8.0),
                TripRequest::new(RouteId(7), 1500.0, 200.0, 11.0),
            ]
        );
    }

    #[test]
    fn empty_file_gives_no_trips() {
        let csv = "route_id,total_miles,deadhead_miles,remaining_hours\n";
        assert!(load_trips_reader(Cursor::new(csv)).unwrap().is_empty());
    }

    #[test]
    fn malformed_number_is_parse_error() {
        let csv = "route_id,total_miles,deadhead_miles,remaining_hours\n0,lots,0,8\n";
        let err = load_trips_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }

    #[test]
    fn duplicate_route_id_is_parse_error() {
        let csv = "route_id,total_miles,deadhead_miles,remaining_hours\n1,10,0,8\n1,20,0,8\n";
        let err = load_trips_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("duplicate route_id 1"));
    }

    #[test]
    fn loaded_trips_are_checked_at_calculation() {
        let csv = "route_id,total_miles,deadhead_miles,remaining_hours\n0,100,150,5\n";
        let trips = load_trips_reader(Cursor::new(csv)).unwrap();
        let err = crate::RouteCalculator::default().calculate_trip(&trips[0]).unwrap_err();
        assert!(err.is_input_error());
        let wrapped: ScheduleError = err.into();
        assert!(matches!(wrapped, ScheduleError::Route(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_trips_csv(std::path::Path::new("/nonexistent/trips.csv")).unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}
