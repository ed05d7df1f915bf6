// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selectors for addressing lights.
//!
//! A selector picks one or many lights belonging to the authenticated
//! account. The grammar is:
//!
//! ```text
//! all | random | id:<id> | group_id:<id> | group:<label>
//!     | location_id:<id> | location:<label> | <label>
//! ```
//!
//! Parsing never fails: anything that is not a keyword or a known
//! `prefix:criteria` pair addresses a light by its label.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const TYPE_ALL: &str = "all";
const TYPE_RANDOM: &str = "random";
const TYPE_LIGHT_ID: &str = "id";
const TYPE_GROUP_ID: &str = "group_id";
const TYPE_GROUP_LABEL: &str = "group";
const TYPE_LOCATION_ID: &str = "location_id";
const TYPE_LOCATION_LABEL: &str = "location";

/// Addresses one or many lights.
///
/// Rendering and parsing round-trip for every selector built through the
/// checked constructors ([`Selector::light_id`], [`Selector::group_label`]
/// and so on). The variants can also be built directly; an empty criteria
/// or a light label such as `all` or `group:Den` then renders to text that
/// parses back as a different selector.
///
/// # Examples
///
/// ```
/// use lifx_http::types::Selector;
///
/// let group = Selector::parse("group_id:abc123");
/// assert_eq!(group, Selector::GroupId("abc123".to_string()));
/// assert!(!group.is_single());
///
/// let kitchen = Selector::parse("Kitchen");
/// assert_eq!(kitchen.to_string(), "Kitchen");
/// assert!(kitchen.is_single());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selector {
    /// All lights belonging to the account.
    #[default]
    All,
    /// One randomly picked light.
    Random,
    /// The light with the given serial number.
    LightId(String),
    /// The first light matching the label.
    LightLabel(String),
    /// The lights of the group with the given ID.
    GroupId(String),
    /// The lights of the groups matching the label.
    GroupLabel(String),
    /// The lights of the location with the given ID.
    LocationId(String),
    /// The lights of the locations matching the label.
    LocationLabel(String),
}

impl Selector {
    /// Parses a selector string. Unrecognized text becomes a light label.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text {
            TYPE_ALL => return Self::All,
            TYPE_RANDOM => return Self::Random,
            _ => {}
        }

        let Some((kind, criteria)) = text.split_once(':') else {
            return Self::LightLabel(text.to_string());
        };
        if criteria.is_empty() {
            return Self::LightLabel(text.to_string());
        }

        let criteria = criteria.to_string();
        match kind {
            TYPE_LIGHT_ID => Self::LightId(criteria),
            TYPE_GROUP_ID => Self::GroupId(criteria),
            TYPE_GROUP_LABEL => Self::GroupLabel(criteria),
            TYPE_LOCATION_ID => Self::LocationId(criteria),
            TYPE_LOCATION_LABEL => Self::LocationLabel(criteria),
            _ => Self::LightLabel(text.to_string()),
        }
    }

    /// Addresses the light with the given serial number. Returns `None` for
    /// an empty id.
    #[must_use]
    pub fn light_id(id: impl Into<String>) -> Option<Self> {
        non_empty(id.into()).map(Self::LightId)
    }

    /// Addresses lights by label. Returns `None` for an empty label or one
    /// that would be read back as another selector, such as `all`.
    #[must_use]
    pub fn light_label(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        match Self::parse(&label) {
            Self::LightLabel(parsed) if !parsed.is_empty() => Some(Self::LightLabel(parsed)),
            _ => None,
        }
    }

    /// Addresses the group with the given ID. Returns `None` for an empty id.
    #[must_use]
    pub fn group_id(id: impl Into<String>) -> Option<Self> {
        non_empty(id.into()).map(Self::GroupId)
    }

    /// Addresses groups by label. Returns `None` for an empty label.
    #[must_use]
    pub fn group_label(label: impl Into<String>) -> Option<Self> {
        non_empty(label.into()).map(Self::GroupLabel)
    }

    /// Addresses the location with the given ID. Returns `None` for an empty
    /// id.
    #[must_use]
    pub fn location_id(id: impl Into<String>) -> Option<Self> {
        non_empty(id.into()).map(Self::LocationId)
    }

    /// Addresses locations by label. Returns `None` for an empty label.
    #[must_use]
    pub fn location_label(label: impl Into<String>) -> Option<Self> {
        non_empty(label.into()).map(Self::LocationLabel)
    }

    /// Returns `true` if the selector addresses at most one light.
    ///
    /// Some endpoints answer single-light selectors with a bare result
    /// object instead of a list.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        matches!(self, Self::Random | Self::LightId(_) | Self::LightLabel(_))
    }

    /// Renders the selector wire string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn non_empty(criteria: String) -> Option<String> {
    (!criteria.is_empty()).then_some(criteria)
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(TYPE_ALL),
            Self::Random => f.write_str(TYPE_RANDOM),
            Self::LightId(id) => write!(f, "{TYPE_LIGHT_ID}:{id}"),
            Self::LightLabel(label) => f.write_str(label),
            Self::GroupId(id) => write!(f, "{TYPE_GROUP_ID}:{id}"),
            Self::GroupLabel(label) => write!(f, "{TYPE_GROUP_LABEL}:{label}"),
            Self::LocationId(id) => write!(f, "{TYPE_LOCATION_ID}:{id}"),
            Self::LocationLabel(label) => write!(f, "{TYPE_LOCATION_LABEL}:{label}"),
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<Selector> {
        vec![
            Selector::All,
            Selector::Random,
            Selector::LightId("d073d5000001".to_string()),
            Selector::LightLabel("Kitchen".to_string()),
            Selector::GroupId("abc123".to_string()),
            Selector::GroupLabel("Living Room".to_string()),
            Selector::LocationId("loc42".to_string()),
            Selector::LocationLabel("Home".to_string()),
        ]
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(Selector::parse("all"), Selector::All);
        assert_eq!(Selector::parse("random"), Selector::Random);
    }

    #[test]
    fn parse_prefixed_selectors() {
        assert_eq!(
            Selector::parse("id:d073d5"),
            Selector::LightId("d073d5".to_string())
        );
        assert_eq!(
            Selector::parse("group:Living Room"),
            Selector::GroupLabel("Living Room".to_string())
        );
        assert_eq!(
            Selector::parse("location_id:xyz"),
            Selector::LocationId("xyz".to_string())
        );
        assert_eq!(
            Selector::parse("location:Home"),
            Selector::LocationLabel("Home".to_string())
        );
    }

    #[test]
    fn parse_splits_on_first_colon_only() {
        assert_eq!(
            Selector::parse("group:Den:Upstairs"),
            Selector::GroupLabel("Den:Upstairs".to_string())
        );
    }

    #[test]
    fn unknown_text_falls_back_to_label() {
        assert_eq!(
            Selector::parse("Kitchen"),
            Selector::LightLabel("Kitchen".to_string())
        );
        assert_eq!(
            Selector::parse("scene:abc"),
            Selector::LightLabel("scene:abc".to_string())
        );
        assert_eq!(
            Selector::parse("group:"),
            Selector::LightLabel("group:".to_string())
        );
    }

    #[test]
    fn render_matches_input() {
        assert_eq!(Selector::parse("group_id:abc123").render(), "group_id:abc123");
        assert_eq!(Selector::parse("Kitchen").render(), "Kitchen");
    }

    #[test]
    fn cardinality() {
        assert!(Selector::Random.is_single());
        assert!(Selector::parse("id:1").is_single());
        assert!(Selector::parse("Kitchen").is_single());
        assert!(!Selector::All.is_single());
        assert!(!Selector::parse("group:Den").is_single());
        assert!(!Selector::parse("location_id:1").is_single());
    }

    #[test]
    fn round_trip_every_variant() {
        for selector in all_variants() {
            assert_eq!(Selector::parse(&selector.render()), selector);
        }
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Selector::default(), Selector::All);
    }

    #[test]
    fn serde_uses_wire_string() {
        let json = serde_json::to_string(&Selector::GroupId("g1".to_string())).unwrap();
        assert_eq!(json, "\"group_id:g1\"");
        let back: Selector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Selector::GroupId("g1".to_string()));
    }

    #[test]
    fn checked_constructors_reject_ambiguous_criteria() {
        assert_eq!(Selector::light_id(""), None);
        assert_eq!(Selector::group_id(String::new()), None);
        assert_eq!(Selector::location_label(""), None);
        assert_eq!(Selector::light_label(""), None);
        assert_eq!(Selector::light_label("all"), None);
        assert_eq!(Selector::light_label("group:Den"), None);
        assert_eq!(
            Selector::light_label("Desk: left"),
            Some(Selector::LightLabel("Desk: left".to_string()))
        );
    }

    #[test]
    fn checked_constructors_round_trip() {
        let built = [
            Selector::light_id("d073d5000001"),
            Selector::light_label("Kitchen"),
            Selector::group_id("abc123"),
            Selector::group_label("Living Room"),
            Selector::location_id("loc42"),
            Selector::location_label("Home"),
        ];
        for selector in built.into_iter().map(Option::unwrap) {
            assert_eq!(Selector::parse(&selector.to_string()), selector);
        }
    }
}
