// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color command.

use crate::command::{
    Command, FormBody, HttpMethod, RequestBody, ResponseShape, light_path, shape_by_cardinality,
};
use crate::defaults;
use crate::error::ParseError;
use crate::types::{Color, Selector};

/// Changes the color of lights, optionally powering them on.
///
/// # Examples
///
/// ```
/// use lifx_http::command::{Command, RequestBody, SetColor};
/// use lifx_http::types::Color;
///
/// let cmd = SetColor::new(Color::red()).with_power_on(false);
/// let Some(RequestBody::Form(form)) = cmd.body().unwrap() else { panic!() };
/// assert_eq!(form.encode(), "color=red&duration=1&power_on=false");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SetColor {
    color: Color,
    duration: f64,
    power_on: bool,
}

impl SetColor {
    /// Creates a command with the default duration that powers lights on.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            duration: defaults::DURATION,
            power_on: defaults::POWER_ON,
        }
    }

    /// Sets the transition duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = defaults::clamp(duration, defaults::MIN_DURATION, defaults::MAX_DURATION);
        self
    }

    /// Sets whether lights that are off get powered on.
    #[must_use]
    pub fn with_power_on(mut self, power_on: bool) -> Self {
        self.power_on = power_on;
        self
    }

    /// Returns the color.
    #[must_use]
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the transition duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns whether lights get powered on.
    #[must_use]
    pub const fn power_on(&self) -> bool {
        self.power_on
    }
}

impl Command for SetColor {
    fn method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn path(&self, selector: &Selector) -> Vec<String> {
        light_path(selector, &["color"])
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(Some(RequestBody::Form(
            FormBody::new()
                .field("color", &self.color)
                .field("duration", self.duration)
                .field("power_on", self.power_on),
        )))
    }

    fn response_shape(&self, selector: &Selector) -> ResponseShape {
        shape_by_cardinality(selector)
    }
}
