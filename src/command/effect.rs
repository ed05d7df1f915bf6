// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Waveform effects: pulse and breathe.

use crate::command::{Command, FormBody, HttpMethod, RequestBody, light_path};
use crate::defaults;
use crate::error::ParseError;
use crate::types::{Color, Selector};

/// Parameters shared by both waveforms.
#[derive(Debug, Clone, PartialEq)]
struct Waveform {
    color: Color,
    from_color: Option<Color>,
    period: f64,
    cycles: f64,
    persist: bool,
    power_on: bool,
}

impl Waveform {
    fn new(color: Color) -> Self {
        Self {
            color,
            from_color: None,
            period: defaults::PERIOD,
            cycles: defaults::CYCLES,
            persist: defaults::PERSIST,
            power_on: defaults::POWER_ON,
        }
    }

    fn form(&self) -> FormBody {
        FormBody::new()
            .field("color", &self.color)
            .optional_field("from_color", self.from_color.as_ref())
            .field("period", self.period)
            .field("cycles", self.cycles)
            .field("persist", self.persist)
            .field("power_on", self.power_on)
    }
}

macro_rules! waveform_setters {
    ($ty:ident) => {
        impl $ty {
            /// Sets the color to start from. Defaults to the current color.
            #[must_use]
            pub fn with_from_color(mut self, from_color: Color) -> Self {
                self.waveform.from_color = Some(from_color);
                self
            }

            /// Sets the duration of one cycle in seconds. Negative and NaN
            /// periods become 0.
            #[must_use]
            pub fn with_period(mut self, period: f64) -> Self {
                self.waveform.period =
                    defaults::clamp(period, defaults::MIN_PERIOD, defaults::MAX_PERIOD);
                self
            }

            /// Sets the number of cycles, clamped to at least 0.
            #[must_use]
            pub fn with_cycles(mut self, cycles: f64) -> Self {
                self.waveform.cycles =
                    defaults::clamp(cycles, defaults::MIN_CYCLES, defaults::MAX_CYCLES);
                self
            }

            /// Sets whether lights keep the effect color when it ends.
            #[must_use]
            pub fn with_persist(mut self, persist: bool) -> Self {
                self.waveform.persist = persist;
                self
            }

            /// Sets whether lights that are off get powered on.
            #[must_use]
            pub fn with_power_on(mut self, power_on: bool) -> Self {
                self.waveform.power_on = power_on;
                self
            }

            /// Returns the effect color.
            #[must_use]
            pub fn color(&self) -> &Color {
                &self.waveform.color
            }

            /// Returns the starting color, if set.
            #[must_use]
            pub fn from_color(&self) -> Option<&Color> {
                self.waveform.from_color.as_ref()
            }

            /// Returns the period in seconds.
            #[must_use]
            pub fn period(&self) -> f64 {
                self.waveform.period
            }

            /// Returns the number of cycles.
            #[must_use]
            pub fn cycles(&self) -> f64 {
                self.waveform.cycles
            }

            /// Returns whether the effect color persists.
            #[must_use]
            pub fn persist(&self) -> bool {
                self.waveform.persist
            }

            /// Returns whether lights get powered on.
            #[must_use]
            pub fn power_on(&self) -> bool {
                self.waveform.power_on
            }
        }
    };
}

/// Quickly flashes lights between two colors.
///
/// # Examples
///
/// ```
/// use lifx_http::command::{Command, PulseEffect, RequestBody};
/// use lifx_http::types::Color;
///
/// let cmd = PulseEffect::new(Color::red()).with_cycles(3.0);
/// let Some(RequestBody::Form(form)) = cmd.body().unwrap() else { panic!() };
/// assert_eq!(form.encode(), "color=red&period=1&cycles=3&persist=false&power_on=true");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PulseEffect {
    waveform: Waveform,
}

impl PulseEffect {
    /// Creates a pulse to `color` with default parameters.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            waveform: Waveform::new(color),
        }
    }
}

waveform_setters!(PulseEffect);

impl Command for PulseEffect {
    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self, selector: &Selector) -> Vec<String> {
        light_path(selector, &["effects", "pulse"])
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(Some(RequestBody::Form(self.waveform.form())))
    }
}

/// Slowly fades lights between two colors.
#[derive(Debug, Clone, PartialEq)]
pub struct BreatheEffect {
    waveform: Waveform,
    peak: f64,
}

impl BreatheEffect {
    /// Creates a breathe to `color` with default parameters.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            waveform: Waveform::new(color),
            peak: defaults::PEAK,
        }
    }

    /// Sets where in a period the target color is reached, clamped to 0-1.
    #[must_use]
    pub fn with_peak(mut self, peak: f64) -> Self {
        self.peak = defaults::clamp(peak, defaults::MIN_PEAK, defaults::MAX_PEAK);
        self
    }

    /// Returns the peak.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.peak
    }
}

waveform_setters!(BreatheEffect);

impl Command for BreatheEffect {
    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self, selector: &Selector) -> Vec<String> {
        light_path(selector, &["effects", "breathe"])
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(Some(RequestBody::Form(
            self.waveform.form().field("peak", self.peak),
        )))
    }
}
