// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris.
//!
//! Mean elements of the Sun as polynomials in Julian centuries `T` since
//! J2000.0 (Meeus, *Astronomical Algorithms*, ch. 25 and 28), giving:
//!
//! - the **declination** `δ = asin(sin ε · sin λ)`, accurate to ~0.01°;
//! - the **equation of time** in minutes (positive when the sundial is ahead
//!   of the clock).
//!
//! Nutation and aberration are ignored: the target is a day/night map, not an
//! almanac.

use chrono::{DateTime, Utc};
use qtty::{Centuries, Degrees, Minutes};

use super::geo::normalize_degrees;
use super::julian_date_ext::to_julian_date;

/// Mean obliquity of the ecliptic, `ε = 23.439291° − 0.0130042° · T`.
#[inline]
pub fn mean_obliquity(t: Centuries) -> Degrees {
    Degrees::new(23.439_291 - t.value() * 0.013_004_2)
}

/// Mean orbital elements of the Sun at a given epoch (degrees).
///
/// Longitudes and anomalies are reduced into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarElements {
    /// Geometric mean longitude `L0`.
    pub mean_longitude: f64,
    /// Mean anomaly `M`.
    pub mean_anomaly: f64,
    /// Equation of center `C`.
    pub equation_of_center: f64,
    /// Eccentricity of the Earth's orbit (dimensionless).
    pub eccentricity: f64,
    /// Mean obliquity of the ecliptic `ε`.
    pub obliquity: f64,
}

impl SolarElements {
    /// Evaluate the series at `t` Julian centuries since J2000.0.
    pub fn at(t: Centuries) -> Self {
        let t = t.value();

        let mean_longitude = normalize_degrees(280.466_46 + t * (36_000.769_83 + t * 0.000_303_2));
        let mean_anomaly = normalize_degrees(357.529_11 + t * (35_999.050_29 - t * 0.000_153_7));

        let m = mean_anomaly.to_radians();
        let equation_of_center = (1.914_602 - t * (0.004_817 + t * 0.000_014)) * m.sin()
            + (0.019_993 - t * 0.000_101) * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin();

        let eccentricity = 0.016_708_634 - t * (0.000_042_037 + t * 0.000_000_126_7);

        Self {
            mean_longitude,
            mean_anomaly,
            equation_of_center,
            eccentricity,
            obliquity: mean_obliquity(Centuries::new(t)).value(),
        }
    }

    /// Evaluate the series at a UTC instant.
    #[inline]
    pub fn at_instant(instant: DateTime<Utc>) -> Self {
        Self::at(to_julian_date(instant).julian_centuries())
    }

    /// True ecliptic longitude `λ = L0 + C`, in `[0, 360)`.
    #[inline]
    pub fn true_longitude(&self) -> Degrees {
        Degrees::new(normalize_degrees(
            self.mean_longitude + self.equation_of_center,
        ))
    }

    /// Declination `δ = asin(sin ε · sin λ)`; `|δ| ≤ ε` always.
    pub fn declination(&self) -> Degrees {
        let eps = self.obliquity.to_radians();
        let lambda = self.true_longitude().value().to_radians();
        Degrees::new((eps.sin() * lambda.sin()).asin().to_degrees())
    }

    /// Right ascension `α = atan2(cos ε · sin λ, cos λ)`, in `[0, 360)`.
    pub fn right_ascension(&self) -> Degrees {
        let eps = self.obliquity.to_radians();
        let lambda = self.true_longitude().value().to_radians();
        let alpha = (eps.cos() * lambda.sin()).atan2(lambda.cos());
        Degrees::new(normalize_degrees(alpha.to_degrees()))
    }

    /// Equation of time, apparent minus mean solar time.
    ///
    /// ```text
    /// E = y·sin 2L0 − 2e·sin M + 4e·y·sin M·cos 2L0 − ½y²·sin 4L0 − 1.25e²·sin 2M
    /// ```
    ///
    /// with `y = tan²(ε/2)`; the result in radians is turned into minutes of
    /// time at 4 minutes per degree.
    pub fn equation_of_time(&self) -> Minutes {
        let l0 = self.mean_longitude.to_radians();
        let m = self.mean_anomaly.to_radians();
        let e = self.eccentricity;
        let y = (self.obliquity.to_radians() / 2.0).tan().powi(2);

        let eot = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
            + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
            - 0.5 * y * y * (4.0 * l0).sin()
            - 1.25 * e * e * (2.0 * m).sin();

        Minutes::new(eot.to_degrees() * 4.0)
    }
}

/// Solar declination at `instant`.
#[inline]
pub fn solar_declination(instant: DateTime<Utc>) -> Degrees {
    SolarElements::at_instant(instant).declination()
}

/// Equation of time at `instant` (positive: sundial ahead of the clock).
#[inline]
pub fn equation_of_time(instant: DateTime<Utc>) -> Minutes {
    SolarElements::at_instant(instant).equation_of_time()
}

/// Solar right ascension at `instant`.
#[inline]
pub fn solar_right_ascension(instant: DateTime<Utc>) -> Degrees {
    SolarElements::at_instant(instant).right_ascension()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn elements_at_j2000() {
        let el = SolarElements::at(Centuries::new(0.0));
        assert!((el.mean_longitude - 280.466_46).abs() < 1e-12);
        assert!((el.mean_anomaly - 357.529_11).abs() < 1e-12);
        assert!((el.obliquity - 23.439_291).abs() < 1e-12);
        assert!((el.eccentricity - 0.016_708_634).abs() < 1e-15);
    }

    #[test]
    fn declination_near_zero_at_march_equinox() {
        let decl = solar_declination(utc(2024, 3, 20, 3, 6));
        assert!(decl.value().abs() < 0.5, "{}", decl.value());
    }

    #[test]
    fn declination_near_zero_at_september_equinox() {
        let decl = solar_declination(utc(2024, 9, 22, 12, 44));
        assert!(decl.value().abs() < 0.5, "{}", decl.value());
    }

    #[test]
    fn declination_at_june_solstice() {
        let decl = solar_declination(utc(2024, 6, 20, 20, 51)).value();
        assert!(decl > 23.0 && decl < 23.5, "{decl}");
    }

    #[test]
    fn declination_at_december_solstice() {
        let decl = solar_declination(utc(2024, 12, 21, 9, 20)).value();
        assert!(decl < -23.0 && decl > -23.5, "{decl}");
    }

    #[test]
    fn declination_is_bounded_by_obliquity() {
        for day in (0..3_650).step_by(7) {
            let t = Centuries::new(day as f64 / 36_525.0 + 0.24);
            let el = SolarElements::at(t);
            assert!(el.declination().value().abs() <= el.obliquity + 1e-12);
        }
    }

    #[test]
    fn equation_of_time_zero_near_april_15() {
        let eot = equation_of_time(utc(2024, 4, 15, 12, 0)).value();
        assert!(eot.abs() < 1.5, "{eot}");
    }

    #[test]
    fn equation_of_time_minimum_near_february_12() {
        let eot = equation_of_time(utc(2024, 2, 12, 12, 0)).value();
        assert!(eot < -12.0 && eot > -16.0, "{eot}");
    }

    #[test]
    fn equation_of_time_maximum_near_november_3() {
        let eot = equation_of_time(utc(2024, 11, 3, 12, 0)).value();
        assert!(eot > 14.0 && eot < 18.0, "{eot}");
    }

    #[test]
    fn right_ascension_tracks_longitude_at_equinox() {
        // Both are ~0° at the March equinox.
        let ra = solar_right_ascension(utc(2024, 3, 20, 3, 6)).value();
        assert!(ra < 0.5 || ra > 359.5, "{ra}");
    }
}
