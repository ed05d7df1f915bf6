// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `lifx_http` - A Rust library to control LIFX lights through the LIFX cloud.
//!
//! This library provides an async, typed client for the LIFX HTTP API.
//!
//! # Supported Features
//!
//! - **Selectors**: address all lights, one light, a group or a location
//! - **Power and color**: toggle, set power, set color (named, HSBK or RGB)
//! - **States**: set several properties at once, or many states in one call
//! - **Effects**: pulse, breathe and state cycles
//! - **Scenes**: list and activate stored scenes
//! - **Collections**: group listed lights by group or location
//!
//! # Partial Failures
//!
//! A command sent to many lights can succeed on some and time out on
//! others. The API reports this with an error status and a per-light body;
//! the client decodes that body and returns it as [`ApiResults`] instead of
//! failing. Use [`ApiResults::is_successful`] to judge the outcome.
//!
//! # Quick Start
//!
//! ```no_run
//! use lifx_http::{LifxClient, LightTarget, MatchMode, Selector};
//! use lifx_http::types::{Color, PowerState};
//!
//! #[tokio::main]
//! async fn main() -> lifx_http::Result<()> {
//!     let client = LifxClient::new("your-access-token")?;
//!
//!     // Address lights with a selector
//!     let kitchen = Selector::parse("group:Kitchen");
//!     let results = client
//!         .set_color(Some(&kitchen), Color::hsb(120.0, 1.0, 0.5), 2.0, true)
//!         .await?;
//!     println!("all ok: {}", results.is_successful(MatchMode::All));
//!
//!     // Or work from listed lights and collections
//!     for group in client.list_groups(None).await? {
//!         group.set_power(PowerState::Off, 1.0).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use lifx_http::{HttpConfig, LifxClient};
//!
//! # fn main() -> lifx_http::Result<()> {
//! let config = HttpConfig::new("your-access-token").with_timeout(Duration::from_secs(5));
//! let client = LifxClient::from_config(config)?;
//! # Ok(())
//! # }
//! ```

mod client;
mod collection;
pub mod command;
pub mod defaults;
pub mod error;
mod light;
pub mod protocol;
pub mod response;
mod target;
pub mod types;

pub use client::LifxClient;
pub use collection::{
    CollectionKind, Group, GroupKind, LightCollection, Location, LocationKind, as_groups,
    as_locations,
};
pub use command::{
    ActivateScene, BreatheEffect, Command, Cycle, LightState, PulseEffect, SetColor, SetPower,
    SetState, SetStates, TogglePower,
};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use light::{CollectionSpec, Light};
pub use protocol::HttpConfig;
pub use response::{ApiResult, ApiResults, MatchMode, ResultStatus, Scene};
pub use target::LightTarget;
pub use types::{Color, Direction, Hsbk, PowerState, Rgb, Selector};
