// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands addressed to a light or a collection of lights.

use crate::command::{
    BreatheEffect, Command, Cycle, LightState, PulseEffect, SetColor, SetPower, SetState,
    TogglePower,
};
use crate::error::Result;
use crate::types::{Color, PowerState, Selector};

/// Something that commands can be sent to.
///
/// Implemented by [`Light`](crate::Light), which answers with its own
/// [`ApiResult`](crate::response::ApiResult), and by
/// [`Group`](crate::Group) and [`Location`](crate::Location), which answer
/// with one result per member.
#[allow(async_fn_in_trait)]
pub trait LightTarget {
    /// Answer type of every command.
    type Output;

    /// Returns the target id: a light serial number, or a group or location
    /// id.
    fn id(&self) -> &str;

    /// Returns the display label.
    fn label(&self) -> &str;

    /// Returns `true` if the target is lit. A collection is lit when any
    /// member is on.
    fn is_on(&self) -> bool;

    /// Returns the selector addressing this target.
    fn selector(&self) -> Selector;

    /// Sends a command addressed with [`LightTarget::selector`].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or its answer cannot be decoded.
    async fn send<C: Command + Sync>(&self, command: &C) -> Result<Self::Output>;

    /// Lists the target again and replaces its contents with the answer.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or its answer cannot be decoded.
    async fn refresh(&mut self) -> Result<()>;

    /// Toggles power.
    ///
    /// # Errors
    ///
    /// See [`LightTarget::send`].
    async fn toggle_power(&self, duration: f64) -> Result<Self::Output> {
        self.send(&TogglePower::new().with_duration(duration)).await
    }

    /// Turns on or off.
    ///
    /// # Errors
    ///
    /// See [`LightTarget::send`].
    async fn set_power(&self, power: PowerState, duration: f64) -> Result<Self::Output> {
        self.send(&SetPower::new(power).with_duration(duration))
            .await
    }

    /// Changes the color.
    ///
    /// # Errors
    ///
    /// See [`LightTarget::send`].
    async fn set_color(&self, color: Color, duration: f64, power_on: bool) -> Result<Self::Output> {
        let command = SetColor::new(color)
            .with_duration(duration)
            .with_power_on(power_on);
        self.send(&command).await
    }

    /// Applies a state.
    ///
    /// # Errors
    ///
    /// See [`LightTarget::send`].
    async fn set_state(&self, state: &LightState) -> Result<Self::Output> {
        self.send(&SetState::new(state.clone())).await
    }

    /// Runs a pulse effect.
    ///
    /// # Errors
    ///
    /// See [`LightTarget::send`].
    async fn pulse_effect(&self, effect: &PulseEffect) -> Result<Self::Output> {
        self.send(effect).await
    }

    /// Runs a breathe effect.
    ///
    /// # Errors
    ///
    /// See [`LightTarget::send`].
    async fn breathe_effect(&self, effect: &BreatheEffect) -> Result<Self::Output> {
        self.send(effect).await
    }

    /// Steps to the next state of a cycle.
    ///
    /// # Errors
    ///
    /// See [`LightTarget::send`].
    async fn cycle(&self, cycle: &Cycle) -> Result<Self::Output> {
        self.send(cycle).await
    }
}
