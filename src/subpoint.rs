// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sub-solar and sub-lunar points.
//!
//! The sub-solar point is where the Sun stands at the zenith: its latitude is
//! the solar declination and its longitude follows from apparent solar time
//! at Greenwich, `h + EoT/60` hours.
//!
//! The sub-lunar point uses sidereal time instead: the Moon is overhead at
//! the east longitude where its local hour angle vanishes,
//! `λ = α_moon − GMST`.

use chrono::{DateTime, Timelike, Utc};

use super::geo::GeographicPoint;
use super::julian_date_ext::to_julian_date;
use super::lunar::{ecliptic_position, ecliptic_to_equatorial, LunarElements};
use super::solar::{mean_obliquity, SolarElements};

/// Fractional hours since midnight UTC, in `[0, 24)`.
#[inline]
pub fn utc_hour_of_day(instant: DateTime<Utc>) -> f64 {
    let seconds = f64::from(instant.num_seconds_from_midnight())
        + f64::from(instant.nanosecond().min(999_999_999)) / 1e9;
    seconds / 3_600.0
}

/// The point on Earth with the Sun at its zenith.
///
/// `lat` is exactly [`solar_declination`](crate::solar_declination); the
/// longitude is `−15° · (h − 12 + EoT/60)`, i.e. minus the Greenwich hour
/// angle of the true Sun.
pub fn sub_solar_point(instant: DateTime<Utc>) -> GeographicPoint {
    let sun = SolarElements::at_instant(instant);
    let eot_minutes = sun.equation_of_time().value();

    // 15°/h of rotation; 0.25° of longitude per minute of time.
    let lng = -(utc_hour_of_day(instant) - 12.0) * 15.0 - eot_minutes * 0.25;

    GeographicPoint::new(sun.declination().value(), lng)
}

/// The point on Earth with the Moon at its zenith (geocentric, no parallax).
pub fn sub_lunar_point(instant: DateTime<Utc>) -> GeographicPoint {
    let jd = to_julian_date(instant);
    let t = jd.julian_centuries();

    let moon = ecliptic_to_equatorial(ecliptic_position(&LunarElements::at(t)), mean_obliquity(t));
    let gmst = jd.greenwich_mean_sidereal_time();

    GeographicPoint::new(
        moon.declination.value(),
        moon.right_ascension.value() - gmst.value(),
    )
}

/// Antipode of `point`: the centre of the night hemisphere when `point` is
/// the sub-solar point.
#[inline]
pub fn antipode(point: GeographicPoint) -> GeographicPoint {
    point.antipode()
}
