// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic primitives on the unit sphere.
//!
//! - [`GeographicPoint`]: latitude/longitude in degrees, longitude always in
//!   `(−180, 180]`.
//! - [`Polygon`]: a closed linear ring of points, laid out like the single
//!   outer ring of a GeoJSON `Polygon` geometry.
//!
//! All spherical trigonometry here treats the Earth as a sphere; at the
//! accuracy of the ephemerides feeding it the flattening is irrelevant.

use super::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Wrap a longitude into `(−180, 180]` degrees.
///
/// Values already in range are returned unchanged (bit for bit). The wrap
/// uses a Euclidean remainder, so any finite input is handled in constant
/// time. `−180` maps to `180`. NaN and infinities yield NaN.
#[inline]
pub fn normalize_longitude(lng: f64) -> f64 {
    if lng > -180.0 && lng <= 180.0 {
        return lng;
    }
    let wrapped = 180.0 - (180.0 - lng).rem_euclid(360.0);
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Reduce an angle into `[0, 360)` degrees.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let r = angle.rem_euclid(360.0);
    // rem_euclid may round up to the modulus for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// GeographicPoint
// ═══════════════════════════════════════════════════════════════════════════

/// A point on the Earth's surface, in degrees.
///
/// `lat ∈ [−90, 90]`, `lng ∈ (−180, 180]`. The constructor normalizes the
/// longitude, so no value of this type ever carries an unwrapped longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoint", into = "RawPoint"))]
pub struct GeographicPoint {
    lat: f64,
    lng: f64,
}

impl GeographicPoint {
    /// Build a point, wrapping `lng` into `(−180, 180]`.
    ///
    /// `lat` must lie in `[−90, 90]`; this is checked in debug builds only.
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        debug_assert!(
            lat.is_nan() || (-90.0..=90.0).contains(&lat),
            "latitude {lat} outside [-90, 90]"
        );
        Self {
            lat,
            lng: normalize_longitude(lng),
        }
    }

    /// Like [`new`](Self::new), but rejects a latitude outside `[−90, 90]`
    /// (NaN included) instead of trusting the caller.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        if (-90.0..=90.0).contains(&lat) {
            Ok(Self::new(lat, lng))
        } else {
            Err(Error::LatitudeOutOfRange(lat))
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees, in `(−180, 180]`.
    #[inline]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// GeoJSON position `[lng, lat]`.
    #[inline]
    pub const fn position(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// The diametrically opposite point.
    ///
    /// `antipode(antipode(p)) == p` for every point.
    #[inline]
    pub fn antipode(&self) -> Self {
        let lng = if self.lng > 0.0 {
            self.lng - 180.0
        } else {
            self.lng + 180.0
        };
        Self::new(-self.lat, lng)
    }

    /// Great-circle distance to `other`, in degrees of arc (haversine form).
    pub fn distance_to(&self, other: &Self) -> f64 {
        let (phi1, phi2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_phi = phi2 - phi1;
        let d_lambda = (other.lng - self.lng).to_radians();
        let a =
            (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        (2.0 * a.sqrt().min(1.0).asin()).to_degrees()
    }

    /// Point reached by travelling `distance` degrees of arc along the great
    /// circle leaving this point at `bearing` degrees (clockwise from north).
    ///
    /// This is the direct problem of the spherical triangle pole–self–target:
    ///
    /// ```text
    /// φ' = asin(sin φ · cos r + cos φ · sin r · cos θ)
    /// λ' = λ + atan2(sin θ · sin r · cos φ, cos r − sin φ · sin φ')
    /// ```
    ///
    /// It stays valid for any `distance` in `[0, 180]`, including paths over
    /// a pole.
    pub fn destination(&self, bearing: f64, distance: f64) -> Self {
        let (sin_phi, cos_phi) = self.lat.to_radians().sin_cos();
        let (sin_r, cos_r) = distance.to_radians().sin_cos();
        let (sin_theta, cos_theta) = bearing.to_radians().sin_cos();

        let sin_lat = (sin_phi * cos_r + cos_phi * sin_r * cos_theta).clamp(-1.0, 1.0);
        let lat = sin_lat.asin();
        let d_lng = (sin_theta * sin_r * cos_phi).atan2(cos_r - sin_phi * sin_lat);

        Self::new(lat.to_degrees(), self.lng + d_lng.to_degrees())
    }
}

impl From<GeographicPoint> for [f64; 2] {
    #[inline]
    fn from(point: GeographicPoint) -> Self {
        point.position()
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoint> for GeographicPoint {
    type Error = Error;

    fn try_from(raw: RawPoint) -> Result<Self> {
        GeographicPoint::try_new(raw.lat, raw.lng)
    }
}

#[cfg(feature = "serde")]
impl From<GeographicPoint> for RawPoint {
    fn from(point: GeographicPoint) -> Self {
        RawPoint {
            lat: point.lat,
            lng: point.lng,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Polygon
// ═══════════════════════════════════════════════════════════════════════════

/// A closed linear ring: the first vertex is repeated as the last one.
///
/// Longitudes are plain wrapped values. A ring that crosses the antimeridian
/// has adjacent vertices whose longitudes differ by almost 360°, so consumers
/// must treat consecutive vertices as great-circle neighbours rather than
/// scanning the ring left to right (see [`Polygon::crosses_antimeridian`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    ring: Vec<GeographicPoint>,
}

impl Polygon {
    /// Build a ring from its vertices, appending the first vertex at the end
    /// when the input is not already closed.
    pub fn from_vertices(mut vertices: Vec<GeographicPoint>) -> Self {
        if let (Some(first), Some(last)) = (vertices.first().copied(), vertices.last()) {
            if first != *last || vertices.len() == 1 {
                vertices.push(first);
            }
        }
        Self { ring: vertices }
    }

    /// The ring vertices, first == last.
    #[inline]
    pub fn ring(&self) -> &[GeographicPoint] {
        &self.ring
    }

    /// Number of ring vertices, closing vertex included.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// `true` when the ring has at least one vertex and first equals last.
    pub fn is_closed(&self) -> bool {
        match (self.ring.first(), self.ring.last()) {
            (Some(first), Some(last)) => self.ring.len() > 1 && first == last,
            _ => false,
        }
    }

    /// `true` if some edge jumps across the ±180° meridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.ring
            .windows(2)
            .any(|w| (w[1].lng() - w[0].lng()).abs() > 180.0)
    }

    /// GeoJSON ring positions, `[lng, lat]` each.
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.ring.iter().map(GeographicPoint::position).collect()
    }
}

// GeoJSON geometry encoding: {"type":"Polygon","coordinates":[[[lng,lat],…]]}
#[cfg(feature = "serde")]
impl Serialize for Polygon {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Polygon", 2)?;
        s.serialize_field("type", "Polygon")?;
        s.serialize_field("coordinates", &[self.coordinates()])?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Polygon {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(Deserialize)]
        struct Raw {
            #[serde(rename = "type")]
            kind: String,
            coordinates: Vec<Vec<[f64; 2]>>,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.kind != "Polygon" {
            return Err(D::Error::custom(format!(
                "expected a Polygon geometry, found `{}`",
                raw.kind
            )));
        }
        let outer = raw
            .coordinates
            .into_iter()
            .next()
            .ok_or_else(|| D::Error::custom("Polygon has no rings"))?;
        let vertices = outer
            .into_iter()
            .map(|[lng, lat]| GeographicPoint::try_new(lat, lng))
            .collect::<Result<Vec<_>>>()
            .map_err(D::Error::custom)?;
        Ok(Polygon::from_vertices(vertices))
    }
}
