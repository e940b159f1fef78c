// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision lunar ephemeris.
//!
//! The Moon's geocentric ecliptic longitude and latitude are the mean
//! longitude (respectively zero) plus a handful of the largest periodic terms
//! of the ELP-2000/82 expansion as tabulated by Meeus (ch. 47). The
//! truncation keeps the position within a few tenths of a degree near the
//! present epoch, which is far below one pixel on a world map.
//!
//! Each periodic term is stored as data: an amplitude in degrees and the
//! integer multipliers of the four fundamental arguments `D`, `M`, `M☉`, `F`.

use chrono::{DateTime, Utc};
use qtty::{Centuries, Degrees};

use super::geo::normalize_degrees;
use super::julian_date_ext::to_julian_date;
use super::solar::mean_obliquity;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Fundamental arguments
// ═══════════════════════════════════════════════════════════════════════════

/// Mean elements of the lunar orbit at a given epoch, in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarElements {
    /// Mean longitude `L'`.
    pub mean_longitude: f64,
    /// Mean anomaly `M'`.
    pub mean_anomaly: f64,
    /// Mean elongation from the Sun `D`.
    pub mean_elongation: f64,
    /// Mean argument of latitude `F`.
    pub argument_of_latitude: f64,
    /// The Sun's mean anomaly `M`, with the lunar-theory coefficients.
    pub solar_mean_anomaly: f64,
}

impl LunarElements {
    /// Evaluate the linear mean elements at `t` Julian centuries since J2000.0.
    pub fn at(t: Centuries) -> Self {
        let t = t.value();
        Self {
            mean_longitude: normalize_degrees(218.3165 + 481_267.8813 * t),
            mean_anomaly: normalize_degrees(134.9634 + 477_198.8676 * t),
            mean_elongation: normalize_degrees(297.8502 + 445_267.1115 * t),
            argument_of_latitude: normalize_degrees(93.2720 + 483_202.0175 * t),
            solar_mean_anomaly: normalize_degrees(357.5291 + 35_999.0503 * t),
        }
    }

    /// Evaluate the mean elements at a UTC instant.
    #[inline]
    pub fn at_instant(instant: DateTime<Utc>) -> Self {
        Self::at(to_julian_date(instant).julian_centuries())
    }

    /// Sum a periodic series at these elements, in degrees.
    fn sum(&self, terms: &[Term]) -> f64 {
        terms
            .iter()
            .map(|term| term.amplitude * term.argument(self).to_radians().sin())
            .sum()
    }
}

/// One periodic term `A · sin(d·D + m·M' + s·M + f·F)`.
#[derive(Debug, Clone, Copy)]
struct Term {
    amplitude: f64,
    d: i8,
    m: i8,
    s: i8,
    f: i8,
}

impl Term {
    const fn new(amplitude: f64, d: i8, m: i8, s: i8, f: i8) -> Self {
        Self {
            amplitude,
            d,
            m,
            s,
            f,
        }
    }

    fn argument(&self, el: &LunarElements) -> f64 {
        f64::from(self.d) * el.mean_elongation
            + f64::from(self.m) * el.mean_anomaly
            + f64::from(self.s) * el.solar_mean_anomaly
            + f64::from(self.f) * el.argument_of_latitude
    }
}

//                        amplitude   D   M'  M   F
#[rustfmt::skip]
const LONGITUDE_TERMS: [Term; 6] = [
    Term::new( 6.289,  0,  1,  0,  0), // equation of center
    Term::new( 1.274,  2, -1,  0,  0), // evection
    Term::new( 0.658,  2,  0,  0,  0), // variation
    Term::new( 0.214,  0,  2,  0,  0),
    Term::new(-0.186,  0,  0,  1,  0), // annual equation
    Term::new(-0.114,  0,  0,  0,  2), // reduction to the ecliptic
];

#[rustfmt::skip]
const LATITUDE_TERMS: [Term; 4] = [
    Term::new( 5.128,  0,  0,  0,  1),
    Term::new( 0.281,  0,  1,  0,  1),
    Term::new( 0.278,  0,  1,  0, -1),
    Term::new( 0.173,  2,  0,  0, -1),
];

/// Corrections turning the mean elongation `D` into the true Sun–Moon
/// elongation (Meeus 48.4 with `i = 180° − ψ`).
#[rustfmt::skip]
const ELONGATION_TERMS: [Term; 6] = [
    Term::new( 6.289,  0,  1,  0,  0),
    Term::new(-2.100,  0,  0,  1,  0),
    Term::new( 1.274,  2, -1,  0,  0),
    Term::new( 0.658,  2,  0,  0,  0),
    Term::new( 0.214,  0,  2,  0,  0),
    Term::new( 0.110,  1,  0,  0,  0),
];

// ═══════════════════════════════════════════════════════════════════════════
// Positions
// ═══════════════════════════════════════════════════════════════════════════

/// Geocentric ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Ecliptic longitude `λ`, in `[0, 360)`.
    pub longitude: Degrees,
    /// Ecliptic latitude `β`, in `[−90, 90]`.
    pub latitude: Degrees,
}

/// Geocentric equatorial coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension `α`, in `[0, 360)`.
    pub right_ascension: Degrees,
    /// Declination `δ`, in `[−90, 90]`.
    pub declination: Degrees,
}

/// Rotate ecliptic coordinates into the equator of date by `obliquity`.
pub fn ecliptic_to_equatorial(
    position: EclipticPosition,
    obliquity: Degrees,
) -> EquatorialPosition {
    let (sin_eps, cos_eps) = obliquity.value().to_radians().sin_cos();
    let (sin_lon, cos_lon) = position.longitude.value().to_radians().sin_cos();
    let (sin_lat, cos_lat) = position.latitude.value().to_radians().sin_cos();

    let sin_dec = (sin_lat * cos_eps + cos_lat * sin_eps * sin_lon).clamp(-1.0, 1.0);
    // atan2(y, x) with both sides scaled by cos β, which avoids tan β at the poles
    let ra = (sin_lon * cos_lat * cos_eps - sin_lat * sin_eps).atan2(cos_lon * cos_lat);

    EquatorialPosition {
        right_ascension: Degrees::new(normalize_degrees(ra.to_degrees())),
        declination: Degrees::new(sin_dec.asin().to_degrees()),
    }
}

/// The Moon's ecliptic position for the elements `el`.
pub fn ecliptic_position(el: &LunarElements) -> EclipticPosition {
    EclipticPosition {
        longitude: Degrees::new(normalize_degrees(
            el.mean_longitude + el.sum(&LONGITUDE_TERMS),
        )),
        latitude: Degrees::new(el.sum(&LATITUDE_TERMS)),
    }
}

/// The Moon's ecliptic position at `instant`.
pub fn moon_ecliptic_position(instant: DateTime<Utc>) -> EclipticPosition {
    ecliptic_position(&LunarElements::at_instant(instant))
}

/// The Moon's equatorial position at `instant`.
pub fn moon_equatorial_position(instant: DateTime<Utc>) -> EquatorialPosition {
    let t = to_julian_date(instant).julian_centuries();
    let el = LunarElements::at(t);
    ecliptic_to_equatorial(ecliptic_position(&el), mean_obliquity(t))
}

/// Sun–Moon elongation `ψ` measured eastward, in `[0, 360)`.
///
/// `ψ = 0` at new moon, `90°` at first quarter, `180°` at full moon.
pub fn moon_elongation(instant: DateTime<Utc>) -> Degrees {
    let el = LunarElements::at_instant(instant);
    Degrees::new(normalize_degrees(
        el.mean_elongation + el.sum(&ELONGATION_TERMS),
    ))
}

// ═══════════════════════════════════════════════════════════════════════════
// Phase
// ═══════════════════════════════════════════════════════════════════════════

/// Illuminated fraction and position in the synodic cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonPhase {
    /// Illuminated fraction of the disc, `[0, 1]`.
    pub fraction: f64,
    /// Cycle position `[0, 1)`: 0 new, 0.25 first quarter, 0.5 full,
    /// 0.75 last quarter.
    pub phase: f64,
}

impl MoonPhase {
    /// Phase from the Sun–Moon elongation `ψ` (degrees).
    pub fn from_elongation(elongation: Degrees) -> Self {
        let psi = normalize_degrees(elongation.value());
        Self {
            fraction: (1.0 - psi.to_radians().cos()) / 2.0,
            phase: psi / 360.0,
        }
    }

    /// `true` between new and full moon.
    #[inline]
    pub fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }

    /// Conventional name of this phase.
    pub fn name(&self) -> MoonPhaseName {
        MoonPhaseName::from_phase(self.phase)
    }
}

/// The eight conventional phase names, each spanning one eighth of the cycle
/// centred on its nominal phase value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoonPhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhaseName {
    const CYCLE: [MoonPhaseName; 8] = [
        MoonPhaseName::New,
        MoonPhaseName::WaxingCrescent,
        MoonPhaseName::FirstQuarter,
        MoonPhaseName::WaxingGibbous,
        MoonPhaseName::Full,
        MoonPhaseName::WaningGibbous,
        MoonPhaseName::LastQuarter,
        MoonPhaseName::WaningCrescent,
    ];

    /// Name for a cycle position in `[0, 1)`; values outside wrap around.
    pub fn from_phase(phase: f64) -> Self {
        let octant = (phase.rem_euclid(1.0) * 8.0 + 0.5).floor() as usize % 8;
        Self::CYCLE[octant]
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            MoonPhaseName::New => "New Moon",
            MoonPhaseName::WaxingCrescent => "Waxing Crescent",
            MoonPhaseName::FirstQuarter => "First Quarter",
            MoonPhaseName::WaxingGibbous => "Waxing Gibbous",
            MoonPhaseName::Full => "Full Moon",
            MoonPhaseName::WaningGibbous => "Waning Gibbous",
            MoonPhaseName::LastQuarter => "Last Quarter",
            MoonPhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for MoonPhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Moon phase at `instant`.
#[inline]
pub fn moon_phase(instant: DateTime<Utc>) -> MoonPhase {
    MoonPhase::from_elongation(moon_elongation(instant))
}
