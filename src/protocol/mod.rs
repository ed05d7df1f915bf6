// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the LIFX cloud API.
//!
//! The transport performs one request per call and never retries. It does
//! not interpret response bodies: a non-success status is handed back as
//! [`TransportResponse::Failure`] so the caller can still decode per-light
//! results from it.

mod http;

pub use http::{HttpConfig, HttpTransport};

use crate::error::ProtocolError;

/// Outcome of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResponse {
    /// A 2xx answer with its body.
    Success(String),
    /// Any other answer with its status and body.
    Failure {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl TransportResponse {
    /// Returns `true` for a 2xx answer.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the response body.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Success(body) | Self::Failure { body, .. } => body,
        }
    }

    /// Returns the body of a 2xx answer.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::AuthenticationFailed` for 401 and
    /// `ProtocolError::Status` for any other failure.
    pub fn into_body(self) -> Result<String, ProtocolError> {
        match self {
            Self::Success(body) => Ok(body),
            Self::Failure { status, body } => Err(status_error(status, body)),
        }
    }
}

/// Maps a failed status to its error.
pub(crate) fn status_error(status: u16, body: String) -> ProtocolError {
    if status == 401 {
        ProtocolError::AuthenticationFailed
    } else {
        ProtocolError::Status { status, body }
    }
}
