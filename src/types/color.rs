// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.
//!
//! A LIFX color can be given as a predefined name, as HSBK components or as
//! an RGB triple. Whatever the input form, a [`Color`] renders to exactly one
//! wire string, which is also what equality and hashing are based on.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::defaults;
use crate::error::ValueError;

use super::Rgb;

/// A color in its natural LIFX representation: hue, saturation, brightness
/// and kelvin.
///
/// Every component is optional, but at least one must be present. Components
/// are clamped into range when the value is built.
///
/// # Examples
///
/// ```
/// use lifx_http::types::Hsbk;
///
/// let soft_red = Hsbk::new(Some(0.0), Some(0.2), Some(0.5), None).unwrap();
/// assert_eq!(soft_red.to_string(), "hue:0 saturation:0.2 brightness:0.5");
///
/// // Kelvin only applies to whites.
/// let tinted = Hsbk::new(None, Some(0.5), None, Some(4000)).unwrap();
/// assert_eq!(tinted.to_string(), "saturation:0.5");
///
/// assert!(Hsbk::new(None, None, None, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "HsbkComponents")]
pub struct Hsbk {
    hue: Option<f64>,
    saturation: Option<f64>,
    brightness: Option<f64>,
    kelvin: Option<u16>,
}

impl Hsbk {
    /// Largest hue in degrees.
    pub const MAX_HUE: f64 = 360.0;
    /// Coolest supported color temperature.
    pub const MAX_KELVIN: u16 = 9000;
    /// Warmest supported color temperature.
    pub const MIN_KELVIN: u16 = 2500;
    /// A normal white, matching [`Color::default_white`].
    pub const DEFAULT_KELVIN: u16 = 3500;

    // Below this saturation a color is treated as white.
    const WHITE_SATURATION: f64 = 0.001;

    /// Creates an HSBK color from optional components.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` if every component is `None`.
    pub fn new(
        hue: Option<f64>,
        saturation: Option<f64>,
        brightness: Option<f64>,
        kelvin: Option<u16>,
    ) -> Result<Self, ValueError> {
        if hue.is_none() && saturation.is_none() && brightness.is_none() && kelvin.is_none() {
            return Err(ValueError::InvalidColor(
                "HSBK color requires at least one component".to_string(),
            ));
        }
        Ok(Self {
            hue: hue.map(|h| defaults::clamp(h, 0.0, Self::MAX_HUE)),
            saturation: saturation.map(|s| defaults::clamp(s, 0.0, 1.0)),
            brightness: brightness.map(|b| defaults::clamp(b, 0.0, 1.0)),
            kelvin: kelvin.map(|k| k.clamp(Self::MIN_KELVIN, Self::MAX_KELVIN)),
        })
    }

    /// Creates a saturated color from hue, saturation and brightness.
    #[must_use]
    pub fn hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue: Some(defaults::clamp(hue, 0.0, Self::MAX_HUE)),
            saturation: Some(defaults::clamp(saturation, 0.0, 1.0)),
            brightness: Some(defaults::clamp(brightness, 0.0, 1.0)),
            kelvin: None,
        }
    }

    /// Creates a white of the given brightness and color temperature.
    #[must_use]
    pub fn white(brightness: f64, kelvin: u16) -> Self {
        Self {
            hue: None,
            saturation: None,
            brightness: Some(defaults::clamp(brightness, 0.0, 1.0)),
            kelvin: Some(kelvin.clamp(Self::MIN_KELVIN, Self::MAX_KELVIN)),
        }
    }

    /// Creates a color that only sets the color temperature.
    #[must_use]
    pub fn kelvin_only(kelvin: u16) -> Self {
        Self {
            hue: None,
            saturation: None,
            brightness: None,
            kelvin: Some(kelvin.clamp(Self::MIN_KELVIN, Self::MAX_KELVIN)),
        }
    }

    /// Returns the hue in degrees, if set.
    #[must_use]
    pub const fn hue(&self) -> Option<f64> {
        self.hue
    }

    /// Returns the saturation, if set.
    #[must_use]
    pub const fn saturation(&self) -> Option<f64> {
        self.saturation
    }

    /// Returns the brightness, if set.
    #[must_use]
    pub const fn brightness(&self) -> Option<f64> {
        self.brightness
    }

    /// Returns the color temperature, if set.
    #[must_use]
    pub const fn kelvin(&self) -> Option<u16> {
        self.kelvin
    }

    /// Renders the space-separated `key:value` wire form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut tokens = Vec::with_capacity(4);
        if let Some(hue) = self.hue {
            tokens.push(format!("hue:{hue}"));
        }
        if let Some(saturation) = self.saturation {
            tokens.push(format!("saturation:{saturation}"));
        }
        if let Some(brightness) = self.brightness {
            tokens.push(format!("brightness:{brightness}"));
        }
        if let Some(kelvin) = self.kelvin
            && self.saturation.is_none_or(|s| s < Self::WHITE_SATURATION)
        {
            tokens.push(format!("kelvin:{kelvin}"));
        }
        tokens.join(" ")
    }

    fn parse_tokens(s: &str) -> Option<Result<Self, ValueError>> {
        let mut components = HsbkComponents::default();
        for token in s.split_whitespace() {
            let (key, value) = token.split_once(':')?;
            let slot = match key {
                "hue" => &mut components.hue,
                "saturation" => &mut components.saturation,
                "brightness" => &mut components.brightness,
                "kelvin" => &mut components.kelvin,
                _ => return None,
            };
            match value.parse::<f64>() {
                Ok(v) => *slot = Some(v),
                Err(_) => {
                    return Some(Err(ValueError::InvalidColor(format!(
                        "invalid {key} value: {value}"
                    ))));
                }
            }
        }
        Some(Self::try_from(components))
    }
}

impl fmt::Display for Hsbk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// HSBK components as they appear in JSON payloads.
#[derive(Debug, Default, Deserialize)]
struct HsbkComponents {
    #[serde(default)]
    hue: Option<f64>,
    #[serde(default)]
    saturation: Option<f64>,
    #[serde(default)]
    brightness: Option<f64>,
    #[serde(default)]
    kelvin: Option<f64>,
}

impl TryFrom<HsbkComponents> for Hsbk {
    type Error = ValueError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(c: HsbkComponents) -> Result<Self, Self::Error> {
        let kelvin = c.kelvin.map(|k| {
            defaults::clamp(
                k.round(),
                f64::from(Self::MIN_KELVIN),
                f64::from(Self::MAX_KELVIN),
            ) as u16
        });
        Self::new(c.hue, c.saturation, c.brightness, kelvin)
    }
}

/// A light color in any of the forms the LIFX API accepts.
///
/// Two colors are equal when they render to the same wire string, so a
/// named color never equals an RGB one even if they look alike.
///
/// # Examples
///
/// ```
/// use lifx_http::types::{Color, Hsbk};
///
/// assert_eq!(Color::red().to_string(), "red");
/// assert_eq!(Color::rgb(255, 0, 128).to_string(), "#ff0080");
/// assert_eq!(Color::white(0.8, 9000).to_string(), "brightness:0.8 kelvin:9000");
///
/// // Equality follows the rendered string.
/// assert_eq!(Color::packed(0xff0000), Color::rgb(255, 0, 0));
///
/// let parsed: Color = "hue:120 saturation:1".parse().unwrap();
/// assert_eq!(parsed, Color::Hsbk(Hsbk::new(Some(120.0), Some(1.0), None, None).unwrap()));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub enum Color {
    /// A color known to the LIFX cloud by name.
    Named(String),
    /// Hue, saturation, brightness and kelvin components.
    Hsbk(Hsbk),
    /// An RGB color, converted to HSBK by the LIFX cloud.
    Rgb(Rgb),
}

impl Color {
    /// Creates a named color.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates an HSBK color from optional components.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColor` if every component is `None`.
    pub fn hsbk(
        hue: Option<f64>,
        saturation: Option<f64>,
        brightness: Option<f64>,
        kelvin: Option<u16>,
    ) -> Result<Self, ValueError> {
        Hsbk::new(hue, saturation, brightness, kelvin).map(Self::Hsbk)
    }

    /// Creates a saturated HSB color.
    #[must_use]
    pub fn hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::Hsbk(Hsbk::hsb(hue, saturation, brightness))
    }

    /// Creates a white of the given brightness and color temperature.
    #[must_use]
    pub fn white(brightness: f64, kelvin: u16) -> Self {
        Self::Hsbk(Hsbk::white(brightness, kelvin))
    }

    /// Creates a color that only sets the color temperature.
    #[must_use]
    pub fn kelvin(kelvin: u16) -> Self {
        Self::Hsbk(Hsbk::kelvin_only(kelvin))
    }

    /// Creates an RGB color, clamping each channel to 0-255.
    #[must_use]
    pub fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Self::Rgb(Rgb::new(red, green, blue))
    }

    /// Creates an RGB color from a packed `0xRRGGBB` integer.
    #[must_use]
    pub fn packed(packed: u32) -> Self {
        Self::Rgb(Rgb::from_packed(packed))
    }

    /// The default white.
    #[must_use]
    pub fn default_white() -> Self {
        Self::named("white")
    }

    /// Named red.
    #[must_use]
    pub fn red() -> Self {
        Self::named("red")
    }

    /// Named orange.
    #[must_use]
    pub fn orange() -> Self {
        Self::named("orange")
    }

    /// Named yellow.
    #[must_use]
    pub fn yellow() -> Self {
        Self::named("yellow")
    }

    /// Named cyan.
    #[must_use]
    pub fn cyan() -> Self {
        Self::named("cyan")
    }

    /// Named green.
    #[must_use]
    pub fn green() -> Self {
        Self::named("green")
    }

    /// Named blue.
    #[must_use]
    pub fn blue() -> Self {
        Self::named("blue")
    }

    /// Named purple.
    #[must_use]
    pub fn purple() -> Self {
        Self::named("purple")
    }

    /// Named pink.
    #[must_use]
    pub fn pink() -> Self {
        Self::named("pink")
    }

    /// Renders the wire string sent to the API.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Named(name) => name.clone(),
            Self::Hsbk(hsbk) => hsbk.render(),
            Self::Rgb(rgb) => rgb.to_string(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render().hash(state);
    }
}

impl FromStr for Color {
    type Err = ValueError;

    /// Parses a wire string: `#rrggbb` is RGB, `key:value` HSBK tokens are
    /// HSBK, anything else is kept as a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValueError::InvalidColor("empty color".to_string()));
        }
        if trimmed.starts_with('#') {
            return Rgb::from_hex(trimmed).map(Self::Rgb);
        }
        match Hsbk::parse_tokens(trimmed) {
            Some(hsbk) => hsbk.map(Self::Hsbk),
            None => Ok(Self::Named(trimmed.to_string())),
        }
    }
}

impl From<Hsbk> for Color {
    fn from(value: Hsbk) -> Self {
        Self::Hsbk(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// Colors arrive either as wire strings or as HSBK objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Text(String),
    Components(Hsbk),
}

impl TryFrom<ColorRepr> for Color {
    type Error = ValueError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Text(text) => text.parse(),
            ColorRepr::Components(hsbk) => Ok(Self::Hsbk(hsbk)),
        }
    }
}

impl Hsbk {
    /// Deserializes an optional HSBK object, treating an all-empty object as
    /// absent.
    pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let components = Option::<HsbkComponents>::deserialize(deserializer)?;
        Ok(components.and_then(|c| Self::try_from(c).ok()))
    }
}
