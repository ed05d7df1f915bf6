// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of a light.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Represents the power state of a light.
///
/// # Examples
///
/// ```
/// use lifx_http::types::PowerState;
///
/// assert_eq!(PowerState::On.as_str(), "on");
/// assert_eq!("OFF".parse::<PowerState>().unwrap(), PowerState::Off);
/// assert_eq!(PowerState::from(true), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    /// Light is on.
    On,
    /// Light is off.
    #[default]
    Off,
}

impl PowerState {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Returns `true` for [`PowerState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on" | "1" | "true" => Ok(Self::On),
            "off" | "0" | "false" => Ok(Self::Off),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variants() {
        assert_eq!("on".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("TRUE".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("0".parse::<PowerState>().unwrap(), PowerState::Off);
        assert!(matches!(
            "dim".parse::<PowerState>(),
            Err(ValueError::InvalidPowerState(_))
        ));
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&PowerState::On).unwrap(), "\"on\"");
        let off: PowerState = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(off, PowerState::Off);
    }

    #[test]
    fn is_on() {
        assert!(PowerState::On.is_on());
        assert!(!PowerState::Off.is_on());
    }
}
