// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day/night map geometry.
//!
//! Low-precision Sun and Moon ephemerides turned into what a world map needs
//! to shade the night side: the sub-solar and sub-lunar points, the moon
//! phase, and the night and twilight regions as closed polygons.
//!
//! # Core types
//!
//! - [`Instant`]: a UTC instant, `chrono::DateTime<Utc>`.
//! - [`Time<S>`]: the same instant on a continuous day-count axis, tagged by a
//!   [`TimeScale`] marker ([`JD`]).
//! - [`GeographicPoint`]: latitude/longitude in degrees, longitude always
//!   wrapped into `(−180, 180]`.
//! - [`Polygon`]: a closed ring of points (GeoJSON geometry with `serde`).
//! - [`SkySnapshot`]: everything above for one instant.
//!
//! # Pipeline
//!
//! ```text
//! Instant ─► to_julian_date ─► julian_centuries ─┬─► solar ─► sub_solar_point ─► night / twilight caps
//!                                                └─► lunar ─► sub_lunar_point, moon_phase
//! ```
//!
//! The civil Julian Date is used throughout, with no ΔT correction: the
//! series are accurate to a fraction of a degree, well below what a map at
//! world scale can show.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use daynight::{sub_solar_point, night_polygon, moon_phase};
//!
//! let t = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
//! let sun = sub_solar_point(t);
//! assert!((sun.lat() - 23.44).abs() < 0.1);
//!
//! let night = night_polygon(t);
//! assert!(night.is_closed());
//!
//! let moon = moon_phase(t);
//! assert!((0.0..=1.0).contains(&moon.fraction));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the public value types;
//!   [`Polygon`] encodes as a GeoJSON `Polygon` geometry.
//! - `rayon`: [`snapshots_par`].

mod error;
pub mod geo;
pub(crate) mod instant;
mod julian_date_ext;
pub mod lunar;
mod period;
pub(crate) mod scales;
pub mod snapshot;
pub mod solar;
pub mod subpoint;
pub mod terminator;
pub mod zones;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{Error, Result};
pub use geo::{normalize_degrees, normalize_longitude, GeographicPoint, Polygon};
pub use instant::{Time, TimeInstant, TimeScale};
pub use julian_date_ext::{julian_century, to_julian_date};
pub use lunar::{moon_phase, MoonPhase, MoonPhaseName};
pub use period::{Interval, Period, Samples, UtcPeriod};
pub use scales::JD;
#[cfg(feature = "rayon")]
pub use snapshot::snapshots_par;
pub use snapshot::{snapshots, SkySnapshot};
pub use solar::{equation_of_time, solar_declination, solar_right_ascension};
pub use subpoint::{antipode, sub_lunar_point, sub_solar_point};
pub use terminator::{
    night_polygon, spherical_circle, twilight_polygon, AngularRadius, CircleBuilder, TwilightBand,
};
pub use zones::{clock_at_offset, standard_meridians, StandardMeridian};

// ── Type aliases ──────────────────────────────────────────────────────────

/// A UTC instant with nanosecond resolution.
pub type Instant = chrono::DateTime<chrono::Utc>;

/// Julian Date: continuous count of days since the Julian Period.
///
/// Alias for [`Time<JD>`]; carries `J2000`, `julian_centuries()` and the
/// sidereal-time helper used by the lunar sub-point.
pub type JulianDate = Time<JD>;
