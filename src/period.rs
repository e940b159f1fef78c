// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time intervals and evenly spaced sampling over them.
//!
//! This module provides:
//! - [`Interval<T>`]: generic interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`
//! - [`UtcPeriod`]: interval of `chrono::DateTime<Utc>`, the input of a
//!   time-lapse of [`SkySnapshot`](crate::SkySnapshot)s
//! - [`Samples`]: iterator over `start, start + step, …` up to `end`

use super::error::{Error, Result};
use super::{Time, TimeInstant};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Represents an interval between two instants.
///
/// Both ends are inclusive when sampling. An interval whose `end` precedes
/// its `start` is legal and simply empty.
///
/// # Examples
///
/// ```
/// use daynight::{Interval, JulianDate};
///
/// let start = JulianDate::new(2_460_390.0);
/// let end = JulianDate::new(2_460_391.0);
/// let period = Interval::new(start, end);
///
/// assert!(period.contains(&JulianDate::new(2_460_390.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias, in practice `Period<JD>`.
pub type Period<S> = Interval<Time<S>>;

/// UTC interval alias.
pub type UtcPeriod = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new period between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the period as the difference between end and start.
    ///
    /// # Examples
    ///
    /// ```
    /// use daynight::{Interval, JulianDate};
    /// use qtty::Days;
    ///
    /// let period = Interval::new(JulianDate::new(2451545.0), JulianDate::new(2451546.5));
    /// assert_eq!(period.duration(), Days::new(1.5));
    /// ```
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies in the closed range `[start, end]`.
    #[inline]
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// Iterate `start, start + step, start + 2·step, …` while `≤ end`.
    ///
    /// Fails with [`Error::NonPositiveStep`] when adding `step` to `start`
    /// does not move forward (zero, negative, or below the resolution of
    /// the instant type).
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use daynight::UtcPeriod;
    ///
    /// let day = UtcPeriod::new(
    ///     Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 3, 21, 0, 0, 0).unwrap(),
    /// );
    /// assert_eq!(day.samples(Duration::hours(1)).unwrap().count(), 25);
    /// ```
    pub fn samples(&self, step: T::Duration) -> Result<Samples<T>> {
        if self.start.add_duration(step) <= self.start {
            return Err(Error::NonPositiveStep);
        }
        Ok(Samples {
            next: Some(self.start),
            end: self.end,
            step,
        })
    }
}

/// Iterator returned by [`Interval::samples`].
#[derive(Clone, Debug)]
pub struct Samples<T: TimeInstant> {
    next: Option<T>,
    end: T,
    step: T::Duration,
}

impl<T: TimeInstant> Iterator for Samples<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.filter(|t| *t <= self.end)?;
        let following = current.add_duration(self.step);
        // Stop rather than spin once the step vanishes in float resolution.
        self.next = (following > current).then_some(following);
        Some(current)
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

// Serde support for Period<JD> as `{"start_jd": …, "end_jd": …}`.
#[cfg(feature = "serde")]
impl Serialize for Interval<crate::JulianDate> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("start_jd", &self.start.value())?;
        s.serialize_field("end_jd", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Interval<crate::JulianDate> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start_jd: f64,
            end_jd: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Interval::new(
            crate::JulianDate::new(raw.start_jd),
            crate::JulianDate::new(raw.end_jd),
        ))
    }
}
