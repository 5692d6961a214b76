//! Geodetic Calculator Properties
//!
//! Behavioral properties of the reference-field calculator checked over
//! sweeps of inputs rather than single points.

use well_survey::geodetic::{
    gravity_field_component, magnetic_field_component, qualify_reading, to_decimal_degrees,
    ReadingStatus, WellLocation,
};

fn location(latitude_degrees: i32, ground_level_elevation: f64) -> WellLocation {
    WellLocation {
        latitude_degrees,
        latitude_minutes: 0,
        latitude_seconds: 0.0,
        longitude_degrees: 0,
        longitude_minutes: 0,
        longitude_seconds: 0.0,
        ground_level_elevation,
    }
}

#[test]
fn test_decimal_degrees_monotonic_in_degrees() {
    for (minutes, seconds) in [(0, 0.0), (30, 15.5), (59, 59.99)] {
        let mut previous = f64::NEG_INFINITY;
        for degrees in -180..=180 {
            let value = to_decimal_degrees(degrees, minutes, seconds);
            assert!(
                value > previous,
                "not increasing at {degrees} {minutes}' {seconds}\""
            );
            previous = value;
        }
    }
}

#[test]
fn test_decimal_degrees_known_values() {
    assert_eq!(to_decimal_degrees(10, 30, 0.0), 10.5);
    assert_eq!(to_decimal_degrees(10, 0, 30.0), 10.008_333_33);
    // Negative degrees are taken literally
    assert_eq!(to_decimal_degrees(-10, 30, 0.0), -9.5);
}

#[test]
fn test_magnetic_component_symmetric_in_latitude() {
    for tenth in 0..=1800 {
        let latitude = f64::from(tenth) / 10.0;
        assert_eq!(
            magnetic_field_component(latitude),
            magnetic_field_component(-latitude),
            "asymmetric at {latitude}"
        );
    }
}

#[test]
fn test_magnetic_band_is_three_either_side() {
    let band = magnetic_field_component(0.0);
    assert_eq!(band.value, 15.04);
    assert_eq!(band.max, 18.04);
    assert_eq!(band.min, 12.04);
    assert_eq!(magnetic_field_component(90.0).value, 0.0);
}

#[test]
fn test_calculator_is_idempotent() {
    for latitude in [-45.25, 0.0, 12.5, 33.333, 89.9, 135.0] {
        assert_eq!(magnetic_field_component(latitude), magnetic_field_component(latitude));
        for gle in [-50.0, 0.0, 1234.5] {
            assert_eq!(
                gravity_field_component(latitude, gle),
                gravity_field_component(latitude, gle)
            );
        }
    }
    let well = location(25, 12.5);
    assert_eq!(well.derive(), well.derive());
}

#[test]
fn test_gravity_decreases_with_elevation() {
    let mut previous = f64::INFINITY;
    for gle in (0..=5000).step_by(250) {
        let value = gravity_field_component(25.0, f64::from(gle)).value;
        assert!(value < previous, "gravity did not decrease at GLE {gle}");
        previous = value;
    }
}

#[test]
fn test_gravity_grows_toward_the_pole() {
    let equator = gravity_field_component(0.0, 0.0).value;
    let mid = gravity_field_component(45.0, 0.0).value;
    let pole = gravity_field_component(90.0, 0.0).value;
    assert_eq!(equator, 997.593_35);
    assert!(equator < mid && mid < pole);
}

#[test]
fn test_derived_values_are_permissive_out_of_range() {
    let derived = location(120, 0.0).derive();
    assert_eq!(derived.w_t, -7.52);
    assert!(location(120, 0.0).check_physical_range().is_err());
    assert!(location(89, 0.0).check_physical_range().is_ok());
}

#[test]
fn test_band_edges_are_inclusive() {
    let derived = location(0, 0.0).derive();
    let at_edges = qualify_reading(&derived, derived.max_g_t, derived.min_w_t);
    assert_eq!(at_edges.status, ReadingStatus::Pass);

    let beyond = qualify_reading(&derived, derived.max_g_t + 0.01, derived.w_t);
    assert_eq!(beyond.g_t_status, ReadingStatus::Fail);
    assert_eq!(beyond.status, ReadingStatus::Fail);
}

#[test]
fn test_north_coordinate_ties_round_half_even() {
    let well = WellLocation {
        latitude_degrees: -3,
        latitude_minutes: 19,
        latitude_seconds: 20.839_53,
        longitude_degrees: 70,
        longitude_minutes: 36,
        longitude_seconds: 57.146_31,
        ground_level_elevation: 0.0,
    };
    let derived = well.derive();
    assert_eq!(derived.north_coordinate, -2.677_544_58);
    assert_eq!(derived.east_coordinate, 70.615_873_98);
    assert_eq!(derived.w_t, magnetic_field_component(-2.677_544_58).value);
}
