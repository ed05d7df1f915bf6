// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for LIFX light control.
//!
//! # Types
//!
//! - [`Selector`] - Addresses one or many lights
//! - [`Color`] - Named, HSBK or RGB color, rendered to one wire string
//! - [`Hsbk`] - Hue (0-360), saturation (0-1), brightness (0-1), kelvin (2500-9000)
//! - [`Rgb`] - 8-bit RGB channels
//! - [`PowerState`] - On/Off
//! - [`Direction`] - Cycle direction

mod color;
mod direction;
mod power;
mod rgb_color;
mod selector;

pub use color::{Color, Hsbk};
pub use direction::Direction;
pub use power::PowerState;
pub use rgb_color::Rgb;
pub use selector::Selector;
