// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for LIFX JSON responses.
//!
//! Write commands answer with per-light outcomes ([`ApiResult`], grouped in
//! [`ApiResults`]). A partial failure is reported through those outcomes, not
//! as an error, so callers inspect them with [`ApiResults::is_successful`].

mod result;
mod scene;

pub use result::{ApiResult, ApiResults, MatchMode, ResultStatus};
pub use scene::{Account, Scene};
