// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A light as reported by the LIFX cloud.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::client::LifxClient;
use crate::command::Command;
use crate::error::{Error, ParseError, ProtocolError, Result};
use crate::response::ApiResult;
use crate::target::LightTarget;
use crate::types::{Hsbk, PowerState, Selector};

/// Identity of the group or location a light belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct CollectionSpec {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
}

impl CollectionSpec {
    /// Creates a spec from an id and a name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns the id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A light bulb or strip.
///
/// Lights come from [`LifxClient::list_lights`] and keep a handle to that
/// client, so commands can be sent straight from them through
/// [`LightTarget`]. A light decoded by other means is detached and its
/// commands fail with [`Error::Detached`].
///
/// # Examples
///
/// ```
/// use lifx_http::Light;
/// use lifx_http::types::{PowerState, Selector};
///
/// let json = r#"{
///     "id": "d073d5000001",
///     "label": "Desk",
///     "connected": true,
///     "power": "on",
///     "brightness": 0.5,
///     "group": {"id": "g1", "name": "Office"},
///     "location": {"id": "l1", "name": "Home"}
/// }"#;
/// let light: Light = serde_json::from_str(json).unwrap();
/// assert_eq!(light.power(), PowerState::On);
/// assert_eq!(Selector::from(&light).to_string(), "id:d073d5000001");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "LightFields")]
pub struct Light {
    id: String,
    uuid: Option<String>,
    label: String,
    connected: bool,
    power: PowerState,
    color: Option<Hsbk>,
    brightness: f64,
    group: CollectionSpec,
    location: CollectionSpec,
    last_seen: Option<DateTime<Utc>>,
    seconds_since_seen: f64,
    product_name: Option<String>,
    capabilities: HashMap<String, Value>,
    client: Option<LifxClient>,
}

impl Light {
    /// Returns the serial number.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the UUID.
    #[must_use]
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if the light is reachable by the cloud.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Returns the power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the light is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Returns the current color.
    #[must_use]
    pub const fn color(&self) -> Option<&Hsbk> {
        self.color.as_ref()
    }

    /// Returns the brightness.
    #[must_use]
    pub const fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Returns the group this light belongs to.
    #[must_use]
    pub const fn group(&self) -> &CollectionSpec {
        &self.group
    }

    /// Returns the location this light belongs to.
    #[must_use]
    pub const fn location(&self) -> &CollectionSpec {
        &self.location
    }

    /// Returns when the cloud last heard from the light.
    #[must_use]
    pub const fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.last_seen
    }

    /// Returns the number of seconds since the light was last seen.
    #[must_use]
    pub const fn seconds_since_seen(&self) -> f64 {
        self.seconds_since_seen
    }

    /// Returns the product name.
    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    /// Returns `true` if the product reports `capability` as enabled.
    #[must_use]
    pub fn has_capability(&self, capability: &str) -> bool {
        matches!(self.capabilities.get(capability), Some(Value::Bool(true)))
    }

    /// Returns the names of the enabled capabilities.
    pub fn capabilities(&self) -> impl Iterator<Item = &str> {
        self.capabilities
            .iter()
            .filter(|(_, value)| matches!(value, Value::Bool(true)))
            .map(|(name, _)| name.as_str())
    }

    /// Returns the client this light sends commands through.
    #[must_use]
    pub fn client(&self) -> Option<&LifxClient> {
        self.client.as_ref()
    }

    pub(crate) fn attach(&mut self, client: LifxClient) {
        self.client = Some(client);
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&Light> for Selector {
    fn from(light: &Light) -> Self {
        Self::LightId(light.id.clone())
    }
}

impl LightTarget for Light {
    type Output = ApiResult;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn is_on(&self) -> bool {
        self.power.is_on()
    }

    fn selector(&self) -> Selector {
        Selector::from(self)
    }

    async fn send<C: Command + Sync>(&self, command: &C) -> Result<ApiResult> {
        let client = self.client.as_ref().ok_or(Error::Detached)?;
        client
            .send(Some(&self.selector()), command)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ParseError::UnexpectedFormat(format!("no result for light {}", self.id)).into()
            })
    }

    /// Lists this light again and replaces every field with the answer.
    async fn refresh(&mut self) -> Result<()> {
        let client = self.client.as_ref().ok_or(Error::Detached)?;
        let lights = match client.list_lights(Some(&self.selector())).await {
            Ok(lights) => lights,
            Err(Error::Protocol(ProtocolError::Status { status: 404, .. })) => Vec::new(),
            Err(err) => return Err(err),
        };
        let light = lights
            .into_iter()
            .next()
            .ok_or_else(|| Error::LightNotFound(self.id.clone()))?;
        *self = light;
        Ok(())
    }
}

#[derive(Deserialize)]
struct LightFields {
    id: String,
    #[serde(default)]
    uuid: Option<String>,
    #[serde(default)]
    label: String,
    #[serde(default)]
    connected: bool,
    #[serde(default)]
    power: PowerState,
    #[serde(default, deserialize_with = "Hsbk::deserialize_lenient")]
    color: Option<Hsbk>,
    #[serde(default)]
    brightness: f64,
    #[serde(default)]
    group: CollectionSpec,
    #[serde(default)]
    location: CollectionSpec,
    #[serde(default)]
    last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    seconds_since_seen: f64,
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    capabilities: HashMap<String, Value>,
    #[serde(default)]
    product: Option<Product>,
}

/// Product record of newer API answers.
#[derive(Deserialize)]
struct Product {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    capabilities: HashMap<String, Value>,
}

impl From<LightFields> for Light {
    fn from(fields: LightFields) -> Self {
        let mut product_name = fields.product_name;
        let mut capabilities = fields.capabilities;
        if let Some(product) = fields.product {
            product_name = product_name.or(product.name);
            capabilities.extend(product.capabilities);
        }

        Self {
            id: fields.id,
            uuid: fields.uuid,
            label: fields.label,
            connected: fields.connected,
            power: fields.power,
            color: fields.color,
            brightness: fields.brightness,
            group: fields.group,
            location: fields.location,
            last_seen: fields.last_seen,
            seconds_since_seen: fields.seconds_since_seen,
            product_name,
            capabilities,
            client: None,
        }
    }
}
