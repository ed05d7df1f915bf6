// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command dispatch against the LIFX cloud.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::collection::{Group, Location, as_groups, as_locations};
use crate::command::{
    ActivateScene, BreatheEffect, Command, Cycle, LightState, ListLights, ListScenes,
    PulseEffect, SetColor, SetPower, SetState, SetStates, TogglePower,
};
use crate::error::{Error, ParseError, Result};
use crate::light::Light;
use crate::protocol::{HttpConfig, HttpTransport, TransportResponse, status_error};
use crate::response::{ApiResults, Scene};
use crate::types::{Color, PowerState, Selector};

/// Client for the LIFX HTTP API.
///
/// Cloning is cheap: clones share the connection pool. Lights and
/// collections returned by the listing methods keep a clone so they can
/// issue commands themselves.
///
/// Every method takes an optional selector. `None` targets all lights.
///
/// # Examples
///
/// ```no_run
/// use lifx_http::{LifxClient, MatchMode, Selector};
/// use lifx_http::types::{Color, PowerState};
///
/// # async fn example() -> lifx_http::Result<()> {
/// let client = LifxClient::new("c0ffee")?;
///
/// let kitchen = Selector::parse("group:Kitchen");
/// let results = client.set_power(Some(&kitchen), PowerState::On, 1.0).await?;
/// if !results.is_successful(MatchMode::All) {
///     for result in results.timed_out() {
///         println!("{} did not answer", result.label().unwrap_or("?"));
///     }
/// }
///
/// for light in client.list_lights(None).await? {
///     println!("{light}: {}", light.power());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LifxClient {
    transport: Arc<HttpTransport>,
}

/// A listing answer is a list, or a bare object when one light matched.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl LifxClient {
    /// Creates a client for the given access token with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::from_config(HttpConfig::new(token))
    }

    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration cannot produce a transport.
    pub fn from_config(config: HttpConfig) -> Result<Self> {
        Ok(Self::from_transport(config.into_client()?))
    }

    /// Creates a client over an existing transport.
    #[must_use]
    pub fn from_transport(transport: HttpTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    // ========================================================================
    // Listing
    // ========================================================================

    /// Lists the lights matching `selector`.
    ///
    /// Returned lights are attached to this client.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the answer cannot be decoded.
    pub async fn list_lights(&self, selector: Option<&Selector>) -> Result<Vec<Light>> {
        let mut lights: Vec<Light> = self
            .fetch::<OneOrMany<Light>, _>(selector, &ListLights)
            .await?
            .into();
        for light in &mut lights {
            light.attach(self.clone());
        }
        Ok(lights)
    }

    /// Lists the lights matching `selector`, grouped by group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the answer cannot be decoded.
    pub async fn list_groups(&self, selector: Option<&Selector>) -> Result<Vec<Group>> {
        Ok(as_groups(self.list_lights(selector).await?))
    }

    /// Lists the lights matching `selector`, grouped by location.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the answer cannot be decoded.
    pub async fn list_locations(&self, selector: Option<&Selector>) -> Result<Vec<Location>> {
        Ok(as_locations(self.list_lights(selector).await?))
    }

    /// Lists the scenes stored in the account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the answer cannot be decoded.
    pub async fn list_scenes(&self) -> Result<Vec<Scene>> {
        self.fetch(None, &ListScenes).await
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Toggles the power of the selected lights.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn toggle_power(
        &self,
        selector: Option<&Selector>,
        duration: f64,
    ) -> Result<ApiResults> {
        self.send(selector, &TogglePower::new().with_duration(duration))
            .await
    }

    /// Turns the selected lights on or off.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn set_power(
        &self,
        selector: Option<&Selector>,
        power: PowerState,
        duration: f64,
    ) -> Result<ApiResults> {
        self.send(selector, &SetPower::new(power).with_duration(duration))
            .await
    }

    /// Changes the color of the selected lights.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn set_color(
        &self,
        selector: Option<&Selector>,
        color: Color,
        duration: f64,
        power_on: bool,
    ) -> Result<ApiResults> {
        let command = SetColor::new(color)
            .with_duration(duration)
            .with_power_on(power_on);
        self.send(selector, &command).await
    }

    /// Sets power, color, brightness and infrared of the selected lights in
    /// one call. Unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn set_state(
        &self,
        selector: Option<&Selector>,
        state: &LightState,
    ) -> Result<ApiResults> {
        self.send(selector, &SetState::new(state.clone())).await
    }

    /// Applies several states, each addressed by its own selector.
    ///
    /// The answer holds one entry per state with nested per-light results.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn set_states(&self, states: &SetStates) -> Result<ApiResults> {
        self.send(None, states).await
    }

    /// Activates a stored scene.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn activate_scene(&self, scene: Uuid, duration: f64) -> Result<ApiResults> {
        self.send(None, &ActivateScene::new(scene).with_duration(duration))
            .await
    }

    /// Runs a pulse effect on the selected lights.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn pulse_effect(
        &self,
        selector: Option<&Selector>,
        effect: &PulseEffect,
    ) -> Result<ApiResults> {
        self.send(selector, effect).await
    }

    /// Runs a breathe effect on the selected lights.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn breathe_effect(
        &self,
        selector: Option<&Selector>,
        effect: &BreatheEffect,
    ) -> Result<ApiResults> {
        self.send(selector, effect).await
    }

    /// Steps the selected lights to the next state of `cycle`.
    ///
    /// # Errors
    ///
    /// See [`LifxClient::send`].
    pub async fn cycle(&self, selector: Option<&Selector>, cycle: &Cycle) -> Result<ApiResults> {
        self.send(selector, cycle).await
    }

    /// Sends any command and decodes the per-light results.
    ///
    /// When the API answers with an error status, the body is still decoded
    /// as results if possible, so per-light failures are reported through
    /// [`ApiResults`] rather than as an error.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::AuthenticationFailed` on 401 and
    /// `ProtocolError::Status` on any other error status whose body holds no
    /// results. Returns `ProtocolError::Http` if the request cannot be sent
    /// and `ParseError` if a success body cannot be decoded.
    pub async fn send<C: Command + Sync>(
        &self,
        selector: Option<&Selector>,
        command: &C,
    ) -> Result<ApiResults> {
        let selector = selector.cloned().unwrap_or_default();
        let shape = command.response_shape(&selector);

        match self.execute(&selector, command).await? {
            TransportResponse::Success(body) => Ok(ApiResults::decode(shape, &body)?),
            TransportResponse::Failure { status, body } => {
                match ApiResults::decode(shape, &body) {
                    Ok(results) => {
                        tracing::warn!(
                            status,
                            results = results.len(),
                            "Decoded per-light results from error response"
                        );
                        Ok(results)
                    }
                    Err(_) => Err(Error::Protocol(status_error(status, body))),
                }
            }
        }
    }

    async fn fetch<T: DeserializeOwned, C: Command + Sync>(
        &self,
        selector: Option<&Selector>,
        command: &C,
    ) -> Result<T> {
        let selector = selector.cloned().unwrap_or_default();
        let body = self.execute(&selector, command).await?.into_body()?;
        serde_json::from_str(&body).map_err(|e| Error::Parse(ParseError::Json(e)))
    }

    async fn execute<C: Command + Sync>(
        &self,
        selector: &Selector,
        command: &C,
    ) -> Result<TransportResponse> {
        let body = command.body()?;
        Ok(self
            .transport
            .execute(command.method(), &command.path(selector), body.as_ref())
            .await?)
    }
}
