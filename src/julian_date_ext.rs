// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.
//!
//! The ephemeris series of this crate are polynomials in Julian centuries
//! since J2000.0; everything they need from the time axis lives here.

use chrono::{DateTime, Utc};
use qtty::*;

use super::geo::normalize_degrees;
use super::instant::Time;
use super::scales::JD;

/// Greenwich Mean Sidereal Time at J2000.0, in degrees.
const GMST_AT_J2000: f64 = 280.460_618_37;

/// Mean sidereal rotation rate of the Earth, in degrees per day.
const SIDEREAL_RATE: f64 = 360.985_647_366_29;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Days elapsed since J2000.0.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Julian centuries since J2000.0, the time argument of every series in
    /// [`solar`](crate::solar) and [`lunar`](crate::lunar).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Greenwich Mean Sidereal Time as an angle in `[0, 360)` degrees.
    ///
    /// Linear model `GMST = 280.46061837° + 360.98564736629° · d`, where `d`
    /// is [`days_since_j2000`](Self::days_since_j2000). The quadratic term is
    /// below 0.01° within a century of J2000 and is omitted.
    pub fn greenwich_mean_sidereal_time(&self) -> Degrees {
        let d = self.days_since_j2000().value();
        Degrees::new(normalize_degrees(GMST_AT_J2000 + SIDEREAL_RATE * d))
    }
}

/// Julian Date of a UTC instant (`JD = t_unix_ms / 86 400 000 + 2 440 587.5`).
#[inline]
pub fn to_julian_date(instant: DateTime<Utc>) -> Time<JD> {
    Time::<JD>::from_utc(instant)
}

/// Julian centuries since J2000.0 for a Julian Date.
#[inline]
pub fn julian_century(jd: Time<JD>) -> Centuries {
    jd.julian_centuries()
}
