// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Nominal time zones: the 25 standard meridians every 15° and wall-clock
//! time at a fixed UTC offset.
//!
//! These are the geometric zones of nautical time, not civil ones; resolving
//! a location to an IANA zone is out of scope.

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Utc};
use std::fmt;

use super::error::{Error, Result};
use super::geo::normalize_longitude;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest offset accepted by [`clock_at_offset`], in hours.
pub const MAX_OFFSET_HOURS: f64 = 18.0;

/// A whole-hour zone and its central meridian.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandardMeridian {
    /// Offset from UTC in hours, `−12..=12`.
    pub offset_hours: i8,
    /// Central longitude, `offset_hours · 15°`.
    pub longitude: f64,
    /// `UTC`, `UTC+n` or `UTC-n`.
    pub label: String,
}

impl StandardMeridian {
    pub const MIN_OFFSET: i8 = -12;
    pub const MAX_OFFSET: i8 = 12;

    /// Zone for `offset_hours`, clamped to `−12..=12`.
    pub fn new(offset_hours: i8) -> Self {
        let offset_hours = offset_hours.clamp(Self::MIN_OFFSET, Self::MAX_OFFSET);
        let label = match offset_hours {
            0 => "UTC".to_owned(),
            n if n > 0 => format!("UTC+{n}"),
            n => format!("UTC{n}"),
        };
        Self {
            offset_hours,
            longitude: f64::from(offset_hours) * 15.0,
            label,
        }
    }

    /// Nominal zone whose meridian is nearest to `lng`.
    ///
    /// The longitude is wrapped first, so both `±180°` fall in `UTC+12`.
    pub fn containing(lng: f64) -> Self {
        let zone = (normalize_longitude(lng) / 15.0).round();
        Self::new(zone as i8)
    }

    /// Wall-clock time in this zone at `instant`.
    ///
    /// Only the time of day is shifted, so this holds at the very ends of
    /// chrono's range too.
    pub fn clock(&self, instant: DateTime<Utc>) -> NaiveTime {
        let offset = Duration::hours(i64::from(self.offset_hours));
        instant.time().overflowing_add_signed(offset).0
    }
}

impl fmt::Display for StandardMeridian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The 25 standard meridians from `UTC-12` to `UTC+12`, west to east.
pub fn standard_meridians() -> Vec<StandardMeridian> {
    (StandardMeridian::MIN_OFFSET..=StandardMeridian::MAX_OFFSET)
        .map(StandardMeridian::new)
        .collect()
}

/// Wall-clock time at a fixed UTC offset (fractional hours allowed, e.g.
/// `5.5` or `−3.5`).
///
/// Fails with [`Error::OffsetOutOfRange`] for non-finite offsets or offsets
/// beyond ±[`MAX_OFFSET_HOURS`].
pub fn clock_at_offset(instant: DateTime<Utc>, offset_hours: f64) -> Result<NaiveTime> {
    if !offset_hours.is_finite() || offset_hours.abs() > MAX_OFFSET_HOURS {
        return Err(Error::OffsetOutOfRange(offset_hours));
    }
    let seconds = (offset_hours * 3_600.0).round() as i32;
    let offset = FixedOffset::east_opt(seconds).ok_or(Error::OffsetOutOfRange(offset_hours))?;
    Ok(instant.with_timezone(&offset).time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn twenty_five_meridians_west_to_east() {
        let zones = standard_meridians();
        assert_eq!(zones.len(), 25);
        assert_eq!(zones[0].offset_hours, -12);
        assert_eq!(zones[0].longitude, -180.0);
        assert_eq!(zones[12].label, "UTC");
        assert_eq!(zones[24].longitude, 180.0);
        assert!(zones.windows(2).all(|w| w[1].longitude - w[0].longitude == 15.0));
    }

    #[test]
    fn labels_carry_the_sign() {
        assert_eq!(StandardMeridian::new(5).label, "UTC+5");
        assert_eq!(StandardMeridian::new(-3).label, "UTC-3");
        assert_eq!(StandardMeridian::new(0).to_string(), "UTC");
    }

    #[test]
    fn offsets_are_clamped() {
        assert_eq!(StandardMeridian::new(14).offset_hours, 12);
        assert_eq!(StandardMeridian::new(-100).offset_hours, -12);
    }

    #[test]
    fn containing_rounds_to_the_nearest_meridian() {
        assert_eq!(StandardMeridian::containing(2.35).offset_hours, 0);
        assert_eq!(StandardMeridian::containing(-7.4).offset_hours, 0);
        assert_eq!(StandardMeridian::containing(-74.0).offset_hours, -5);
        assert_eq!(StandardMeridian::containing(139.7).offset_hours, 9);
        assert_eq!(StandardMeridian::containing(180.0).offset_hours, 12);
        assert_eq!(StandardMeridian::containing(-180.0).offset_hours, 12);
        assert_eq!(StandardMeridian::containing(-179.0).offset_hours, -12);
        assert_eq!(StandardMeridian::containing(360.0 + 30.0).offset_hours, 2);
    }

    #[test]
    fn clock_in_a_whole_hour_zone() {
        let t = utc(2024, 3, 20, 22, 30);
        let tokyo = StandardMeridian::new(9).clock(t);
        assert_eq!((tokyo.hour(), tokyo.minute()), (7, 30));
        let honolulu = StandardMeridian::new(-10).clock(t);
        assert_eq!((honolulu.hour(), honolulu.minute()), (12, 30));
    }

    #[test]
    fn clock_at_fractional_offset() {
        let t = utc(2024, 3, 20, 22, 30);
        let india = clock_at_offset(t, 5.5).unwrap();
        assert_eq!((india.hour(), india.minute()), (4, 0));
        let newfoundland = clock_at_offset(t, -3.5).unwrap();
        assert_eq!((newfoundland.hour(), newfoundland.minute()), (19, 0));
    }

    #[test]
    fn clock_at_offset_matches_standard_meridian() {
        let t = utc(2024, 11, 3, 5, 17);
        for zone in standard_meridians() {
            assert_eq!(
                clock_at_offset(t, f64::from(zone.offset_hours)).unwrap(),
                zone.clock(t)
            );
        }
    }

    #[test]
    fn clock_at_the_edges_of_the_representable_range() {
        let latest = DateTime::<Utc>::MAX_UTC;
        let east = StandardMeridian::new(12).clock(latest);
        assert_eq!(
            east,
            latest.time().overflowing_add_signed(Duration::hours(12)).0
        );
        assert_eq!(clock_at_offset(latest, 12.0).unwrap(), east);

        let earliest = DateTime::<Utc>::MIN_UTC;
        let west = StandardMeridian::new(-12).clock(earliest);
        assert_eq!(clock_at_offset(earliest, -12.0).unwrap(), west);
    }

    #[test]
    fn out_of_range_offsets_are_rejected() {
        let t = utc(2024, 1, 1, 0, 0);
        assert_eq!(clock_at_offset(t, 18.5), Err(Error::OffsetOutOfRange(18.5)));
        assert!(clock_at_offset(t, f64::NAN).is_err());
        assert!(clock_at_offset(t, -24.0).is_err());
        assert!(clock_at_offset(t, 18.0).is_ok());
    }
}
