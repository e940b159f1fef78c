// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the validating constructors of this crate.
//!
//! The ephemeris and geometry computations themselves are total; only the
//! seams that accept caller-chosen parameters can fail: decoded coordinates,
//! radii, band names, sampling steps and fixed UTC offsets.

use thiserror::Error;

/// Errors produced by the validating constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude outside `[−90, 90]` degrees (or not finite).
    #[error("latitude {0}° is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Angular radius outside `[0, 180]` degrees (or not finite).
    #[error("angular radius {0}° is outside [0, 180]")]
    RadiusOutOfRange(f64),

    /// Twilight band name not one of `civil`, `nautical`, `astronomical`.
    #[error("unknown twilight band `{0}`")]
    UnknownTwilightBand(String),

    /// A circle needs at least `min` segments to enclose any area.
    #[error("a circle needs at least {min} segments, got {got}")]
    TooFewSegments { min: usize, got: usize },

    /// A sampling step that does not move time forward.
    #[error("sampling step must be strictly positive")]
    NonPositiveStep,

    /// Fixed UTC offset (in hours) that chrono cannot represent.
    #[error("UTC offset {0} h is out of range")]
    OffsetOutOfRange(f64),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
