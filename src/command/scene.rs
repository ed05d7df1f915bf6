// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene activation.

use uuid::Uuid;

use crate::command::{Command, FormBody, HttpMethod, RequestBody};
use crate::defaults;
use crate::error::ParseError;
use crate::types::Selector;

/// Applies a stored scene to its lights.
///
/// Scenes carry their own selectors, so the light selector is not used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivateScene {
    scene: Uuid,
    duration: f64,
}

impl ActivateScene {
    /// Creates an activation of `scene` with the default duration.
    #[must_use]
    pub fn new(scene: Uuid) -> Self {
        Self {
            scene,
            duration: defaults::DURATION,
        }
    }

    /// Sets the transition duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = defaults::clamp(duration, defaults::MIN_DURATION, defaults::MAX_DURATION);
        self
    }

    /// Returns the scene UUID.
    #[must_use]
    pub const fn scene(&self) -> Uuid {
        self.scene
    }
}

impl Command for ActivateScene {
    fn method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn path(&self, _selector: &Selector) -> Vec<String> {
        vec![
            "scenes".to_string(),
            format!("scene_id:{}", self.scene),
            "activate".to_string(),
        ]
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(Some(RequestBody::Form(
            FormBody::new().field("duration", self.duration),
        )))
    }
}
