// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex rendering.
//!
//! The LIFX cloud converts RGB colors to HSBK on its side, so this type only
//! needs to produce the `#rrggbb` wire form.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// Out-of-range inputs are clamped rather than rejected.
///
/// # Examples
///
/// ```
/// use lifx_http::types::Rgb;
///
/// let color = Rgb::new(300, -5, 128);
/// assert_eq!(color.to_string(), "#ff0080");
///
/// let teal = Rgb::from_packed(0x00c8_9c);
/// assert_eq!(teal.green(), 0xc8);
/// assert_eq!(teal.to_string(), "#00c89c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Largest packed `0xRRGGBB` value.
    pub const MAX_PACKED: u32 = 0x00FF_FFFF;

    /// Creates a color from three channel values, clamping each to 0-255.
    #[must_use]
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Unpacks a color from a `0xRRGGBB` integer.
    ///
    /// Values above `0xFFFFFF` are clamped to white.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_packed(packed: u32) -> Self {
        let packed = if packed > Self::MAX_PACKED {
            Self::MAX_PACKED
        } else {
            packed
        };
        Self {
            red: ((packed >> 16) & 0xFF) as u8,
            green: ((packed >> 8) & 0xFF) as u8,
            blue: (packed & 0xFF) as u8,
        }
    }

    /// Parses a `#rrggbb` or `rrggbb` hex string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not six hex
    /// digits.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_packed)
            .map_err(|_| ValueError::InvalidHexColor(hex.to_string()))
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the packed `0xRRGGBB` value.
    #[must_use]
    pub fn packed(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, i32::from(u8::MAX)) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}
