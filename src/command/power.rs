// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control commands.

use crate::command::{
    Command, FormBody, HttpMethod, RequestBody, ResponseShape, light_path, shape_by_cardinality,
};
use crate::defaults;
use crate::error::ParseError;
use crate::types::{PowerState, Selector};

/// Turns lights off if they are on, and on if they are off.
///
/// Lights that are physically powered off are ignored.
///
/// # Examples
///
/// ```
/// use lifx_http::command::{Command, TogglePower};
/// use lifx_http::types::Selector;
///
/// let cmd = TogglePower::new();
/// assert_eq!(cmd.path(&Selector::All), ["lights", "all", "toggle"]);
/// assert_eq!(cmd.duration(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TogglePower {
    duration: f64,
}

impl TogglePower {
    /// Creates a toggle with the default duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            duration: defaults::DURATION,
        }
    }

    /// Sets the fade duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = defaults::clamp(duration, defaults::MIN_DURATION, defaults::MAX_DURATION);
        self
    }

    /// Returns the fade duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }
}

impl Default for TogglePower {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for TogglePower {
    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self, selector: &Selector) -> Vec<String> {
        light_path(selector, &["toggle"])
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(Some(RequestBody::Form(
            FormBody::new().field("duration", self.duration),
        )))
    }

    fn response_shape(&self, selector: &Selector) -> ResponseShape {
        shape_by_cardinality(selector)
    }
}

/// Turns lights on or off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetPower {
    state: PowerState,
    duration: f64,
}

impl SetPower {
    /// Creates a command setting `state` with the default duration.
    #[must_use]
    pub fn new(state: PowerState) -> Self {
        Self {
            state,
            duration: defaults::DURATION,
        }
    }

    /// Sets the fade duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = defaults::clamp(duration, defaults::MIN_DURATION, defaults::MAX_DURATION);
        self
    }

    /// Returns the requested power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }

    /// Returns the fade duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }
}

impl From<bool> for SetPower {
    fn from(on: bool) -> Self {
        Self::new(PowerState::from(on))
    }
}

impl Command for SetPower {
    fn method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn path(&self, selector: &Selector) -> Vec<String> {
        light_path(selector, &["power"])
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(Some(RequestBody::Form(
            FormBody::new()
                .field("state", self.state)
                .field("duration", self.duration),
        )))
    }

    fn response_shape(&self, selector: &Selector) -> ResponseShape {
        shape_by_cardinality(selector)
    }
}
