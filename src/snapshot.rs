// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Everything a day/night map layer draws for one instant.
//!
//! A [`SkySnapshot`] bundles the sub-solar point, the night and twilight
//! caps, the sub-lunar point and the moon phase. [`snapshots`] samples a
//! [`UtcPeriod`] for time-lapse playback; with the `rayon` feature
//! [`snapshots_par`] does the same across threads.

use chrono::{DateTime, Utc};

use super::error::Result;
use super::geo::{GeographicPoint, Polygon};
use super::lunar::{moon_phase, MoonPhase};
use super::period::UtcPeriod;
use super::subpoint::{sub_lunar_point, sub_solar_point};
use super::terminator::{AngularRadius, CircleBuilder, TwilightBand};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sun, Moon and terminator geometry at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkySnapshot {
    pub instant: DateTime<Utc>,
    pub sub_solar: GeographicPoint,
    pub night: Polygon,
    /// One cap per band, in [`TwilightBand::ALL`] order.
    twilight: [Polygon; 3],
    pub sub_lunar: GeographicPoint,
    pub moon_phase: MoonPhase,
}

impl SkySnapshot {
    /// Snapshot with the default [`CircleBuilder`].
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::with_builder(instant, &CircleBuilder::default())
    }

    /// Snapshot whose polygons are sampled by `builder`.
    ///
    /// The sub-solar point is computed once and shared by all four caps.
    pub fn with_builder(instant: DateTime<Utc>, builder: &CircleBuilder) -> Self {
        let sub_solar = sub_solar_point(instant);
        let anti_solar = sub_solar.antipode();

        let night = builder.build(anti_solar, AngularRadius::HORIZON);
        let twilight = TwilightBand::ALL.map(|band| builder.build(anti_solar, band.cap_radius()));

        Self {
            instant,
            sub_solar,
            night,
            twilight,
            sub_lunar: sub_lunar_point(instant),
            moon_phase: moon_phase(instant),
        }
    }

    /// Cap beyond the outer limit of `band`.
    pub fn twilight(&self, band: TwilightBand) -> &Polygon {
        match band {
            TwilightBand::Civil => &self.twilight[0],
            TwilightBand::Nautical => &self.twilight[1],
            TwilightBand::Astronomical => &self.twilight[2],
        }
    }

    /// The anti-solar point, centre of every cap.
    #[inline]
    pub fn anti_solar(&self) -> GeographicPoint {
        self.sub_solar.antipode()
    }

    /// Layers back to front: night, then each deeper twilight cap on top.
    ///
    /// Filling every layer with the same translucent shade darkens the map
    /// progressively towards the anti-solar point.
    pub fn paint_order(&self) -> impl Iterator<Item = (Option<TwilightBand>, &Polygon)> + '_ {
        std::iter::once((None, &self.night)).chain(
            TwilightBand::ALL
                .into_iter()
                .map(move |band| (Some(band), self.twilight(band))),
        )
    }
}

/// One snapshot per sample of `period` every `step`, in time order.
///
/// Both ends are included; fails only on a non-positive `step`.
pub fn snapshots(period: &UtcPeriod, step: chrono::Duration) -> Result<Vec<SkySnapshot>> {
    let builder = CircleBuilder::default();
    let frames: Vec<SkySnapshot> = period
        .samples(step)?
        .map(|t| SkySnapshot::with_builder(t, &builder))
        .collect();

    log::debug!(
        "time-lapse {} → {} every {}s: {} frames",
        period.start,
        period.end,
        step.num_seconds(),
        frames.len()
    );

    Ok(frames)
}

/// Parallel [`snapshots`]; output order matches the sequential version.
#[cfg(feature = "rayon")]
pub fn snapshots_par(period: &UtcPeriod, step: chrono::Duration) -> Result<Vec<SkySnapshot>> {
    let builder = CircleBuilder::default();
    let instants: Vec<DateTime<Utc>> = period.samples(step)?.collect();

    let frames: Vec<SkySnapshot> = instants
        .into_par_iter()
        .map(|t| SkySnapshot::with_builder(t, &builder))
        .collect();

    log::debug!(
        "time-lapse {} → {} every {}s: {} frames (parallel)",
        period.start,
        period.end,
        step.num_seconds(),
        frames.len()
    );

    Ok(frames)
}
