// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Default command parameters and value bounds.
//!
//! These mirror the defaults documented by the LIFX HTTP API. Values passed
//! to commands and states are clamped to the bounds below when assigned.

use crate::types::Direction;

/// Default transition duration in seconds.
pub const DURATION: f64 = 1.0;

/// Whether color commands power the light on by default.
pub const POWER_ON: bool = true;

/// Whether effects keep their final color by default.
pub const PERSIST: bool = false;

/// Default effect period in seconds.
pub const PERIOD: f64 = 1.0;

/// Default number of effect cycles.
pub const CYCLES: f64 = 1.0;

/// Default position of the breathe peak within a period.
pub const PEAK: f64 = 0.5;

/// Default cycle direction.
pub const DIRECTION: Direction = Direction::Forward;

/// Lowest brightness.
pub const MIN_BRIGHTNESS: f64 = 0.0;
/// Highest brightness.
pub const MAX_BRIGHTNESS: f64 = 1.0;

/// Shortest transition duration in seconds.
pub const MIN_DURATION: f64 = 0.0;
/// Longest transition duration in seconds (100 years).
pub const MAX_DURATION: f64 = 3_155_760_000.0;

/// Lowest infrared level.
pub const MIN_INFRARED: f64 = 0.0;
/// Highest infrared level.
pub const MAX_INFRARED: f64 = 1.0;

/// Lowest breathe peak.
pub const MIN_PEAK: f64 = 0.0;
/// Highest breathe peak.
pub const MAX_PEAK: f64 = 1.0;

/// Shortest effect period in seconds.
pub const MIN_PERIOD: f64 = 0.0;
/// Longest effect period in seconds.
pub const MAX_PERIOD: f64 = MAX_DURATION;

/// Fewest effect cycles.
pub const MIN_CYCLES: f64 = 0.0;
/// Most effect cycles.
pub const MAX_CYCLES: f64 = f64::MAX;

/// Clamps `value` into `[min, max]`, mapping NaN to `min`.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
