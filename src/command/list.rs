// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Listing queries.

use crate::command::{Command, HttpMethod, RequestBody, light_path};
use crate::error::ParseError;
use crate::types::Selector;

/// Lists the lights matching a selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLights;

impl Command for ListLights {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self, selector: &Selector) -> Vec<String> {
        light_path(selector, &[])
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(None)
    }
}

/// Lists the scenes stored in the account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScenes;

impl Command for ListScenes {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self, _selector: &Selector) -> Vec<String> {
        vec!["scenes".to_string()]
    }

    fn body(&self) -> Result<Option<RequestBody>, ParseError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_lights_request() {
        let selector = Selector::parse("location:Home");
        assert_eq!(ListLights.method(), HttpMethod::Get);
        assert_eq!(ListLights.path(&selector), ["lights", "location:Home"]);
        assert!(ListLights.body().unwrap().is_none());
    }

    #[test]
    fn list_scenes_request() {
        assert_eq!(ListScenes.path(&Selector::All), ["scenes"]);
        assert!(ListScenes.body().unwrap().is_none());
    }
}
