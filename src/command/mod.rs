// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LIFX HTTP API command definitions.
//!
//! Each command is a typed value that knows the HTTP method, the path and
//! the body of its request, and which shape the answer comes back in.
//!
//! # Available Commands
//!
//! | Command | Endpoint | Body |
//! |---------|----------|------|
//! | [`ListLights`] | `GET lights/{selector}` | - |
//! | [`ListScenes`] | `GET scenes` | - |
//! | [`TogglePower`] | `POST lights/{selector}/toggle` | form |
//! | [`SetPower`] | `PUT lights/{selector}/power` | form |
//! | [`SetColor`] | `PUT lights/{selector}/color` | form |
//! | [`SetState`] | `PUT lights/{selector}/state` | form |
//! | [`SetStates`] | `PUT lights/states` | JSON |
//! | [`ActivateScene`] | `PUT scenes/scene_id:{uuid}/activate` | form |
//! | [`PulseEffect`] | `POST lights/{selector}/effects/pulse` | form |
//! | [`BreatheEffect`] | `POST lights/{selector}/effects/breathe` | form |
//! | [`Cycle`] | `POST lights/{selector}/cycle` | JSON |
//!
//! # Examples
//!
//! ```
//! use lifx_http::command::{Command, RequestBody, SetPower};
//! use lifx_http::types::{PowerState, Selector};
//!
//! let cmd = SetPower::new(PowerState::On).with_duration(2.5);
//! let selector = Selector::parse("group:Kitchen");
//!
//! assert_eq!(cmd.path(&selector), ["lights", "group:Kitchen", "power"]);
//! match cmd.body().unwrap() {
//!     Some(RequestBody::Form(form)) => assert_eq!(form.encode(), "state=on&duration=2.5"),
//!     other => panic!("unexpected body: {other:?}"),
//! }
//! ```

mod color;
mod effect;
mod list;
mod power;
mod scene;
mod state;

pub use color::SetColor;
pub use effect::{BreatheEffect, PulseEffect};
pub use list::{ListLights, ListScenes};
pub use power::{SetPower, TogglePower};
pub use scene::ActivateScene;
pub use state::{Cycle, LightState, SetState, SetStates};

use std::fmt;

use crate::error::ParseError;
use crate::types::Selector;

/// HTTP methods used by the LIFX API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
}

impl HttpMethod {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the API shapes the answer to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// A bare result object for one light.
    Single,
    /// A list of per-light results.
    List,
}

/// An `application/x-www-form-urlencoded` body.
///
/// Only fields that were pushed are emitted, in push order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(&'static str, String)>,
}

impl FormBody {
    /// Creates an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    /// Appends a field only if `value` is set.
    #[must_use]
    pub fn optional_field(self, key: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if no field was pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encodes the body as `key=value` pairs joined by `&`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Body of an API request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Form-encoded fields.
    Form(FormBody),
    /// A JSON document.
    Json(serde_json::Value),
}

impl RequestBody {
    /// Returns the `Content-Type` header value for this body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Form(_) => "application/x-www-form-urlencoded",
            Self::Json(_) => "application/json",
        }
    }

    /// Serializes `value` into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if `value` cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, ParseError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }
}

/// A request that can be sent to the LIFX HTTP API.
pub trait Command {
    /// Returns the HTTP method.
    fn method(&self) -> HttpMethod;

    /// Returns the path segments below the API base URL.
    ///
    /// Commands that address lights place the rendered selector in its own
    /// segment. Commands that don't ignore it.
    fn path(&self, selector: &Selector) -> Vec<String>;

    /// Returns the request body, if any.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a JSON body cannot be serialized.
    fn body(&self) -> Result<Option<RequestBody>, ParseError>;

    /// Returns the shape of a successful answer for `selector`.
    fn response_shape(&self, _selector: &Selector) -> ResponseShape {
        ResponseShape::List
    }
}

/// Answers of the original light endpoints depend on selector cardinality.
pub(crate) fn shape_by_cardinality(selector: &Selector) -> ResponseShape {
    if selector.is_single() {
        ResponseShape::Single
    } else {
        ResponseShape::List
    }
}

/// Builds `lights/{selector}/<action...>`.
pub(crate) fn light_path(selector: &Selector, action: &[&str]) -> Vec<String> {
    let mut path = vec!["lights".to_string(), selector.render()];
    path.extend(action.iter().map(ToString::to_string));
    path
}
