// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene listing.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::command::LightState;

/// Account owning a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Account {
    uuid: Uuid,
}

impl Account {
    /// Returns the account UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }
}

/// A stored set of light states.
///
/// # Examples
///
/// ```
/// use lifx_http::response::Scene;
///
/// let json = r#"{
///     "uuid": "b2ad4c4c-7ac0-4bf5-8b6c-4b1b5ce02d2c",
///     "name": "Evening",
///     "account": {"uuid": "8ad6a5c1-bb2a-4a1f-9f27-5e1bb0b3bd1a"},
///     "states": [{"selector": "id:d073d5000001", "power": "on", "brightness": 0.4}],
///     "created_at": 1700000000,
///     "updated_at": 1700003600
/// }"#;
/// let scene: Scene = serde_json::from_str(json).unwrap();
/// assert_eq!(scene.name(), "Evening");
/// assert_eq!(scene.states().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    uuid: Uuid,
    name: String,
    #[serde(default)]
    account: Option<Account>,
    #[serde(default)]
    states: Vec<LightState>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    updated_at: Option<DateTime<Utc>>,
}

impl Scene {
    /// Returns the scene UUID, used to activate it.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the scene name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning account.
    #[must_use]
    pub const fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Returns the stored light states.
    #[must_use]
    pub fn states(&self) -> &[LightState] {
        &self.states
    }

    /// Returns the creation time.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the last update time.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Selector};

    #[test]
    fn decodes_scene_with_hsbk_colors() {
        let json = r#"{
            "uuid": "b2ad4c4c-7ac0-4bf5-8b6c-4b1b5ce02d2c",
            "name": "Reading",
            "account": {"uuid": "8ad6a5c1-bb2a-4a1f-9f27-5e1bb0b3bd1a"},
            "states": [
                {
                    "selector": "id:d073d5000001",
                    "power": "on",
                    "brightness": 0.8,
                    "color": {"hue": 0, "saturation": 0, "kelvin": 2700}
                }
            ],
            "created_at": 1700000000,
            "updated_at": 1700003600
        }"#;

        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(
            scene.uuid().to_string(),
            "b2ad4c4c-7ac0-4bf5-8b6c-4b1b5ce02d2c"
        );
        assert_eq!(
            scene.account().unwrap().uuid().to_string(),
            "8ad6a5c1-bb2a-4a1f-9f27-5e1bb0b3bd1a"
        );
        assert_eq!(scene.created_at().unwrap().timestamp(), 1_700_000_000);
        assert_eq!(scene.updated_at().unwrap().timestamp(), 1_700_003_600);

        let state = &scene.states()[0];
        assert_eq!(state.selector(), Some(&Selector::parse("id:d073d5000001")));
        assert_eq!(
            state.color(),
            Some(&Color::hsbk(Some(0.0), Some(0.0), None, Some(2700)).unwrap())
        );
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let json = r#"{"uuid": "b2ad4c4c-7ac0-4bf5-8b6c-4b1b5ce02d2c", "name": "Empty"}"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert!(scene.account().is_none());
        assert!(scene.states().is_empty());
        assert!(scene.created_at().is_none());
    }
}
