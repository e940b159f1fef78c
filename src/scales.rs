// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! A zero-sized marker identifies the epoch counter a [`Time`](crate::Time)
//! value is measured on. The ephemerides only need the civil Julian Date,
//! so [`JD`] is the one scale provided.

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date, the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;

    #[test]
    fn jd_is_the_identity_scale() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.julian_day(), Days::new(2_451_545.0));
        assert_eq!(JD::from_jd(Days::new(2_440_587.5)), Days::new(2_440_587.5));
    }
}
