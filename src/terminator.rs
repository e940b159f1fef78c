// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Terminator geometry: night and twilight regions as spherical caps.
//!
//! The Sun's altitude at a point is `90° − z`, where `z` is the point's
//! great-circle distance from the sub-solar point. Each region below is the
//! set of points where the Sun is deeper than a given depression, i.e. a cap
//! around the anti-solar point:
//!
//! | Region | Sun below horizon | `z` at the boundary | Cap radius |
//! |--------|-------------------|---------------------|------------|
//! | night | 0° | 90° | 90° |
//! | past [`TwilightBand::Civil`] | 6° | 96° | 84° |
//! | past [`TwilightBand::Nautical`] | 12° | 102° | 78° |
//! | past [`TwilightBand::Astronomical`] | 18° | 108° | 72° |
//!
//! A twilight band itself is the ring-shaped zone between two consecutive
//! boundaries; drawing the caps from the night inwards with increasing
//! opacity shades each band.
//!
//! The boundary of each cap is sampled by [`CircleBuilder`] into a closed
//! [`Polygon`] ring. The ring is wrap-agnostic: replicating it across ±360°
//! for a scrolling map is left to the renderer.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::error::{Error, Result};
use super::geo::{GeographicPoint, Polygon};
use super::subpoint::sub_solar_point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// AngularRadius
// ═══════════════════════════════════════════════════════════════════════════

/// Half-angle of a spherical cap, in degrees within `[0, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AngularRadius(f64);

impl AngularRadius {
    /// The horizon: a cap of 90° is exactly one hemisphere.
    pub const HORIZON: Self = Self(90.0);

    /// Validate a radius in degrees.
    pub fn new(degrees: f64) -> Result<Self> {
        if (0.0..=180.0).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(Error::RadiusOutOfRange(degrees))
        }
    }

    /// The radius in degrees.
    #[inline]
    pub const fn degrees(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for AngularRadius {
    type Error = Error;

    fn try_from(degrees: f64) -> Result<Self> {
        Self::new(degrees)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TwilightBand
// ═══════════════════════════════════════════════════════════════════════════

/// The three conventional twilight limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TwilightBand {
    Civil,
    Nautical,
    Astronomical,
}

impl TwilightBand {
    /// All bands, shallowest first (largest cap first).
    pub const ALL: [TwilightBand; 3] = [
        TwilightBand::Civil,
        TwilightBand::Nautical,
        TwilightBand::Astronomical,
    ];

    /// Sun depression angle at the outer edge of the band, in degrees.
    #[inline]
    pub const fn depression(&self) -> f64 {
        match self {
            TwilightBand::Civil => 6.0,
            TwilightBand::Nautical => 12.0,
            TwilightBand::Astronomical => 18.0,
        }
    }

    /// Zenith distance of the Sun at the band's outer limit (`90° +
    /// depression`): the great-circle distance from the sub-solar point to
    /// the boundary.
    #[inline]
    pub fn radius(&self) -> AngularRadius {
        AngularRadius(90.0 + self.depression())
    }

    /// Radius of the cap around the anti-solar point where the Sun is deeper
    /// than this band (`180° − radius`).
    #[inline]
    pub fn cap_radius(&self) -> AngularRadius {
        AngularRadius(90.0 - self.depression())
    }

    /// Lower-case name (`civil`, `nautical`, `astronomical`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            TwilightBand::Civil => "civil",
            TwilightBand::Nautical => "nautical",
            TwilightBand::Astronomical => "astronomical",
        }
    }
}

impl fmt::Display for TwilightBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TwilightBand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "civil" => Ok(TwilightBand::Civil),
            "nautical" => Ok(TwilightBand::Nautical),
            "astronomical" => Ok(TwilightBand::Astronomical),
            _ => Err(Error::UnknownTwilightBand(s.to_owned())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CircleBuilder
// ═══════════════════════════════════════════════════════════════════════════

/// Samples the boundary of a spherical cap into a closed ring.
///
/// Vertices sit at bearings `0°, −δ, −2δ, …` from the centre
/// (`δ = 360° / segments`): the ring starts due north of the centre and runs
/// counter-clockwise around it, keeping the cap on its left. The first vertex
/// is repeated at the end, so a ring has `segments + 1` vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleBuilder {
    segments: usize,
}

impl CircleBuilder {
    /// Fewest segments that still enclose an area.
    pub const MIN_SEGMENTS: usize = 3;

    /// Default sampling, one vertex every 3°.
    pub const DEFAULT_SEGMENTS: usize = 120;

    /// A builder with a custom number of segments.
    pub fn with_segments(segments: usize) -> Result<Self> {
        if segments < Self::MIN_SEGMENTS {
            return Err(Error::TooFewSegments {
                min: Self::MIN_SEGMENTS,
                got: segments,
            });
        }
        Ok(Self { segments })
    }

    #[inline]
    pub const fn segments(&self) -> usize {
        self.segments
    }

    /// Ring of all points at great-circle distance `radius` from `center`.
    pub fn build(&self, center: GeographicPoint, radius: AngularRadius) -> Polygon {
        let step = 360.0 / self.segments as f64;
        let vertices: Vec<GeographicPoint> = (0..self.segments)
            .map(|k| center.destination(-(k as f64) * step, radius.degrees()))
            .collect();

        log::trace!(
            "spherical circle at ({:.3}, {:.3}) r={}°: {} vertices",
            center.lat(),
            center.lng(),
            radius.degrees(),
            vertices.len() + 1
        );

        Polygon::from_vertices(vertices)
    }

    /// Night region at `instant`: the hemisphere centred on the anti-solar
    /// point.
    pub fn night(&self, instant: DateTime<Utc>) -> Polygon {
        self.build(sub_solar_point(instant).antipode(), AngularRadius::HORIZON)
    }

    /// Outer limit of twilight `band` at `instant`: the cap, inside the
    /// night, where the Sun is more than `band.depression()` degrees below
    /// the horizon.
    pub fn twilight(&self, instant: DateTime<Utc>, band: TwilightBand) -> Polygon {
        self.build(sub_solar_point(instant).antipode(), band.cap_radius())
    }
}

impl Default for CircleBuilder {
    fn default() -> Self {
        Self {
            segments: Self::DEFAULT_SEGMENTS,
        }
    }
}

/// Ring of the spherical circle of `radius` around `center`, with the default
/// [`CircleBuilder`].
#[inline]
pub fn spherical_circle(center: GeographicPoint, radius: AngularRadius) -> Polygon {
    CircleBuilder::default().build(center, radius)
}

/// Night region at `instant`.
#[inline]
pub fn night_polygon(instant: DateTime<Utc>) -> Polygon {
    CircleBuilder::default().night(instant)
}

/// Outer limit of twilight `band` at `instant`, with the default
/// [`CircleBuilder`].
#[inline]
pub fn twilight_polygon(instant: DateTime<Utc>, band: TwilightBand) -> Polygon {
    CircleBuilder::default().twilight(instant, band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn radius_validation() {
        assert!(AngularRadius::new(0.0).is_ok());
        assert!(AngularRadius::new(180.0).is_ok());
        assert_eq!(
            AngularRadius::new(180.5),
            Err(Error::RadiusOutOfRange(180.5))
        );
        assert!(AngularRadius::new(-1.0).is_err());
        assert!(AngularRadius::new(f64::NAN).is_err());
        assert!(AngularRadius::try_from(200.0).is_err());
    }

    #[test]
    fn band_radii_table() {
        let radii: Vec<f64> = TwilightBand::ALL.iter().map(|b| b.radius().degrees()).collect();
        assert_eq!(radii, vec![96.0, 102.0, 108.0]);
        let caps: Vec<f64> = TwilightBand::ALL.iter().map(|b| b.cap_radius().degrees()).collect();
        assert_eq!(caps, vec![84.0, 78.0, 72.0]);
    }

    #[test]
    fn band_parsing() {
        assert_eq!("civil".parse::<TwilightBand>(), Ok(TwilightBand::Civil));
        assert_eq!(
            " Nautical ".parse::<TwilightBand>(),
            Ok(TwilightBand::Nautical)
        );
        assert_eq!(
            "ASTRONOMICAL".parse::<TwilightBand>(),
            Ok(TwilightBand::Astronomical)
        );
        assert_eq!(
            "golden".parse::<TwilightBand>(),
            Err(Error::UnknownTwilightBand("golden".into()))
        );
        for band in TwilightBand::ALL {
            assert_eq!(band.to_string().parse::<TwilightBand>(), Ok(band));
        }
    }

    #[test]
    fn builder_rejects_degenerate_sampling() {
        assert_eq!(
            CircleBuilder::with_segments(2),
            Err(Error::TooFewSegments { min: 3, got: 2 })
        );
        assert_eq!(CircleBuilder::with_segments(72).unwrap().segments(), 72);
        assert_eq!(CircleBuilder::default().segments(), 120);
    }

    #[test]
    fn ring_is_closed_and_dense() {
        let ring = spherical_circle(GeographicPoint::new(10.0, 20.0), AngularRadius::HORIZON);
        assert_eq!(ring.len(), CircleBuilder::DEFAULT_SEGMENTS + 1);
        assert!(ring.is_closed());
    }

    #[test]
    fn every_vertex_is_at_the_radius() {
        let center = GeographicPoint::new(-23.44, 179.5);
        for r in [0.0, 1.0, 90.0, 96.0, 108.0, 179.0, 180.0] {
            let ring = spherical_circle(center, AngularRadius::new(r).unwrap());
            for v in ring.ring() {
                assert!((center.distance_to(v) - r).abs() < 1e-5, "r={r} v={v:?}");
            }
        }
    }

    #[test]
    fn first_vertex_is_due_north() {
        let ring = spherical_circle(
            GeographicPoint::new(0.0, 45.0),
            AngularRadius::new(30.0).unwrap(),
        );
        let first = ring.ring()[0];
        assert!((first.lat() - 30.0).abs() < 1e-9);
        assert!((first.lng() - 45.0).abs() < 1e-9);
        // next vertex is a little to the west: counter-clockwise seen from outside
        assert!(ring.ring()[1].lng() < 45.0);
    }

    #[test]
    fn circle_around_the_antimeridian_wraps() {
        let ring = spherical_circle(
            GeographicPoint::new(0.0, 180.0),
            AngularRadius::new(20.0).unwrap(),
        );
        assert!(ring.crosses_antimeridian());
        assert!(ring.ring().iter().all(|p| p.lng() > -180.0 && p.lng() <= 180.0));
    }

    #[test]
    fn cap_containing_a_pole_spans_all_longitudes() {
        // Around the June solstice the night cap (centred ~23° S) covers the
        // South Pole: its boundary visits every longitude band.
        let ring = night_polygon(utc(2024, 6, 21, 12, 0));
        let mut seen = [false; 12];
        for v in ring.ring() {
            let idx = (((v.lng() + 180.0) / 30.0).floor() as usize).min(11);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn night_boundary_passes_through_polar_circle_at_solstice() {
        let ring = night_polygon(utc(2024, 6, 21, 12, 0));
        let max_lat = ring.ring().iter().map(|p| p.lat()).fold(f64::MIN, f64::max);
        let min_lat = ring.ring().iter().map(|p| p.lat()).fold(f64::MAX, f64::min);
        assert!((max_lat - 66.56).abs() < 0.1, "{max_lat}");
        assert!((min_lat + 66.56).abs() < 0.1, "{min_lat}");
    }

    #[test]
    fn twilight_boundary_sits_at_the_band_zenith_distance() {
        let t = utc(2024, 6, 21, 12, 0);
        let sub = sub_solar_point(t);
        for band in TwilightBand::ALL {
            let ring = twilight_polygon(t, band);
            for v in ring.ring() {
                // Sun altitude there is exactly −depression.
                let altitude = 90.0 - sub.distance_to(v);
                assert!(
                    (altitude + band.depression()).abs() < 1e-6,
                    "{band}: {altitude}"
                );
            }
        }
    }

    #[test]
    fn twilight_caps_shrink_with_depression() {
        let t = utc(2024, 12, 21, 0, 0);
        let anti = sub_solar_point(t).antipode();
        let mut previous = 90.0;
        for band in TwilightBand::ALL {
            let ring = twilight_polygon(t, band);
            assert!(ring.is_closed());
            let d = ring.ring()[0].distance_to(&anti);
            assert!(d < previous);
            previous = d;
        }
    }
}
