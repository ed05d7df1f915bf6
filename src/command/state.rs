// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state descriptors and the commands built from them.

use serde::{Deserialize, Serialize};

use crate::command::{Command, FormBody, HttpMethod, RequestBody, light_path};
use crate::defaults;
use crate::error::ParseError;
use crate::types::{Color, Direction, PowerState, Selector};

/// A desired light state.
///
/// Every field is optional and unset fields are left out of the request.
/// Brightness, duration and infrared are clamped when assigned.
///
/// The selector is only used inside [`SetStates`], where each state targets
/// its own lights.
///
/// # Examples
///
/// ```
/// use lifx_http::command::LightState;
/// use lifx_http::types::{Color, PowerState};
///
/// let state = LightState::new()
///     .with_power(PowerState::On)
///     .with_color(Color::blue())
///     .with_brightness(1.7);
///
/// assert_eq!(state.brightness(), Some(1.0));
/// assert_eq!(state.form_body().encode(), "power=on&color=blue&brightness=1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "LightStateFields")]
pub struct LightState {
    #[serde(skip_serializing_if = "Option::is_none")]
    selector: Option<Selector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    power: Option<PowerState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    infrared: Option<f64>,
}

impl LightState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lights this state applies to.
    #[must_use]
    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Sets the power state.
    #[must_use]
    pub fn with_power(mut self, power: PowerState) -> Self {
        self.power = Some(power);
        self
    }

    /// Sets the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the brightness, clamped to 0-1.
    #[must_use]
    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.set_brightness(Some(brightness));
        self
    }

    /// Sets the transition duration in seconds, clamped to 0-3155760000.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.set_duration(Some(duration));
        self
    }

    /// Sets the infrared level, clamped to 0-1.
    #[must_use]
    pub fn with_infrared(mut self, infrared: f64) -> Self {
        self.set_infrared(Some(infrared));
        self
    }

    /// Replaces the selector.
    pub fn set_selector(&mut self, selector: Option<Selector>) {
        self.selector = selector;
    }

    /// Replaces the power state.
    pub fn set_power(&mut self, power: Option<PowerState>) {
        self.power = power;
    }

    /// Replaces the color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Replaces the brightness, clamping it to 0-1.
    pub fn set_brightness(&mut self, brightness: Option<f64>) {
        self.brightness = brightness.map(|b| {
            defaults::clamp(b, defaults::MIN_BRIGHTNESS, defaults::MAX_BRIGHTNESS)
        });
    }

    /// Replaces the duration, clamping it to 0-3155760000 seconds.
    pub fn set_duration(&mut self, duration: Option<f64>) {
        self.duration =
            duration.map(|d| defaults::clamp(d, defaults::MIN_DURATION, defaults::MAX_DURATION));
    }

    /// Replaces the infrared level, clamping it to 0-1.
    pub fn set_infrared(&mut self, infrared: Option<f64>) {
        self.infrared =
            infrared.map(|i| defaults::clamp(i, defaults::MIN_INFRARED, defaults::MAX_INFRARED));
    }

    /// Returns the selector.
    #[must_use]
    pub fn selector(&self) -> Option<&Selector> {
        self.selector.as_ref()
    }

    /// Returns the power state.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Returns the color.
    #[must_use]
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Returns the brightness.
    #[must_use]
    pub fn brightness(&self) -> Option<f64> {
        self.brightness
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Returns the infrared level.
    #[must_use]
    pub fn infrared(&self) -> Option<f64> {
        self.infrared
    }

    /// Builds the form fields of the state endpoint. The selector is not a
    /// form field.
    #[must_use]
    pub fn form_body(&self) -> FormBody {
        FormBody::new()
            .optional_field("power", self.power)
            .optional_field("color", self.color.as_ref())
            .optional_field("brightness", self.brightness)
            .optional_field("duration", self.duration)
            .optional_field("infrared", self.infrared)
    }
}

/// Raw fields of a state echoed by the API, clamped through the setters.
#[derive(Deserialize)]
struct LightStateFields {
    #[serde(default)]
    selector: Option<Selector>,
    #[serde(default)]
    power: Option<PowerState>,
    #[serde(default)]
    color: Option<Color>,
    #[serde(default)]
    brightness: Option<f64>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    infrared: Option<f64>,
}

impl From<LightStateFields> for LightState {
    fn from(fields: LightStateFields) -> Self {
        let mut state = Self {
            selector: fields.selector,
            power: fields.power,
            color: fields.color,
            ..Self::default()
        };
        state.set_brightness(fields.brightness);
        state.set_duration(fields.duration);
        state.set_infrared(fields.infrared);
        state
    }
}

/// Sets the state of the selected lights in one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetState {
    state: LightState,
}

impl SetState {
    /// Creates the command from a state.
    #[must_use]
    pub fn new(state: LightState) -> Self {
        Self { state }
    }

    /// Returns the requested state.
    #[must_use]
    pub fn state(&self) -> &LightState {
        &self.state
    }
}

impl From<LightState> for SetState {
    fn from(state: LightState) -> Self {
        Self::new(state)
    }
}

impl Command for SetState {
    fn method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn path(&self, selector: &Selector) -> Vec<String> {
        light_path(selector, &["state"])
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(Some(RequestBody::Form(self.state.form_body())))
    }
}

/// Applies several states, each to its own selector, in one call.
///
/// Fields missing from a state are taken from `defaults`.
///
/// # Examples
///
/// ```
/// use lifx_http::command::{Command, LightState, RequestBody, SetStates};
/// use lifx_http::types::{PowerState, Selector};
///
/// let cmd = SetStates::new(vec![
///     LightState::new().with_selector(Selector::parse("group:Kitchen")).with_power(PowerState::On),
///     LightState::new().with_selector(Selector::parse("group:Den")).with_power(PowerState::Off),
/// ])
/// .with_defaults(LightState::new().with_duration(3.0));
///
/// let Some(RequestBody::Json(body)) = cmd.body().unwrap() else { panic!() };
/// assert_eq!(body["states"][0]["selector"], "group:Kitchen");
/// assert_eq!(body["defaults"]["duration"], 3.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetStates {
    states: Vec<LightState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<LightState>,
}

impl SetStates {
    /// Creates the command from a list of states.
    #[must_use]
    pub fn new(states: Vec<LightState>) -> Self {
        Self {
            states,
            defaults: None,
        }
    }

    /// Sets the fallback state.
    #[must_use]
    pub fn with_defaults(mut self, defaults: LightState) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Returns the states.
    #[must_use]
    pub fn states(&self) -> &[LightState] {
        &self.states
    }

    /// Returns the fallback state.
    #[must_use]
    pub fn defaults(&self) -> Option<&LightState> {
        self.defaults.as_ref()
    }
}

impl Command for SetStates {
    fn method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn path(&self, _selector: &Selector) -> Vec<String> {
        vec!["lights".to_string(), "states".to_string()]
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        RequestBody::json(self).map(Some)
    }
}

/// Steps the selected lights to the next state of a list.
///
/// The API expects between 2 and 5 states. This is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cycle {
    states: Vec<LightState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<LightState>,
    direction: Direction,
}

impl Cycle {
    /// Fewest states the API accepts.
    pub const MIN_STATES: usize = 2;
    /// Most states the API accepts.
    pub const MAX_STATES: usize = 5;

    /// Creates a forward cycle through `states`.
    #[must_use]
    pub fn new(states: Vec<LightState>) -> Self {
        Self {
            states,
            defaults: None,
            direction: defaults::DIRECTION,
        }
    }

    /// Sets the fallback state.
    #[must_use]
    pub fn with_defaults(mut self, defaults: LightState) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Sets the direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the states.
    #[must_use]
    pub fn states(&self) -> &[LightState] {
        &self.states
    }

    /// Returns the fallback state.
    #[must_use]
    pub fn defaults(&self) -> Option<&LightState> {
        self.defaults.as_ref()
    }

    /// Returns the direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if the number of states is one the API accepts.
    #[must_use]
    pub fn has_valid_length(&self) -> bool {
        (Self::MIN_STATES..=Self::MAX_STATES).contains(&self.states.len())
    }
}

impl Command for Cycle {
    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self, selector: &Selector) -> Vec<String> {
        light_path(selector, &["cycle"])
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        if !self.has_valid_length() {
            tracing::debug!(
                states = self.states.len(),
                min = Self::MIN_STATES,
                max = Self::MAX_STATES,
                "Cycle state count outside the accepted range"
            );
        }
        RequestBody::json(self).map(Some)
    }
}
