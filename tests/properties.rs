use chrono::{DateTime, Utc};
use daynight::{
    moon_phase, normalize_longitude, solar_declination, spherical_circle, sub_lunar_point,
    sub_solar_point, AngularRadius, GeographicPoint, MoonPhaseName, StandardMeridian,
};
use proptest::prelude::*;

/// Instants between 1950 and 2100.
fn any_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (-631_152_000_i64..4_102_444_800_i64)
        .prop_filter_map("representable instant", |secs| DateTime::from_timestamp(secs, 0))
}

fn any_point() -> impl Strategy<Value = GeographicPoint> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lng)| GeographicPoint::new(lat, lng))
}

proptest! {
    #[test]
    fn longitude_normalization_lands_in_range(lng in -1.0e6_f64..1.0e6) {
        let n = normalize_longitude(lng);
        prop_assert!(n > -180.0 && n <= 180.0, "{lng} -> {n}");
        prop_assert_eq!(normalize_longitude(n), n);
    }

    #[test]
    fn longitude_normalization_preserves_the_meridian(lng in -1.0e4_f64..1.0e4) {
        let n = normalize_longitude(lng);
        let turns = (lng - n) / 360.0;
        prop_assert!((turns - turns.round()).abs() < 1e-9);
    }

    #[test]
    fn declination_is_bounded_by_the_obliquity(t in any_instant()) {
        prop_assert!(solar_declination(t).value().abs() <= 23.45);
    }

    #[test]
    fn sub_points_are_valid_coordinates(t in any_instant()) {
        for p in [sub_solar_point(t), sub_lunar_point(t)] {
            prop_assert!((-90.0..=90.0).contains(&p.lat()));
            prop_assert!(p.lng() > -180.0 && p.lng() <= 180.0);
        }
        prop_assert!(sub_lunar_point(t).lat().abs() < 29.5);
    }

    #[test]
    fn moon_phase_stays_in_its_ranges(t in any_instant()) {
        let phase = moon_phase(t);
        prop_assert!((0.0..=1.0).contains(&phase.fraction));
        prop_assert!((0.0..1.0).contains(&phase.phase));
        prop_assert_eq!(phase.name(), MoonPhaseName::from_phase(phase.phase));
    }

    #[test]
    fn antipode_is_an_involution(p in any_point()) {
        let back = p.antipode().antipode();
        prop_assert!((back.lat() - p.lat()).abs() < 1e-12);
        prop_assert!(normalize_longitude(back.lng() - p.lng()).abs() < 1e-9);
    }

    #[test]
    fn circle_vertices_sit_at_the_radius(center in any_point(), r in 1.0_f64..179.0) {
        let ring = spherical_circle(center, AngularRadius::new(r).unwrap());
        prop_assert!(ring.is_closed());
        for v in ring.ring() {
            prop_assert!((center.distance_to(v) - r).abs() < 1e-5, "{v:?}");
        }
    }

    #[test]
    fn zone_meridian_is_within_half_a_zone(lng in -180.0_f64..=180.0) {
        let zone = StandardMeridian::containing(lng);
        let gap = normalize_longitude(lng - zone.longitude).abs();
        prop_assert!(gap <= 7.5 + 1e-9, "{lng} -> {}", zone.label);
    }
}
