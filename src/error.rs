// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `lifx_http` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value construction, HTTP communication and JSON decoding.
//!
//! Note that a command whose lights partially failed is *not* an error. The
//! LIFX API reports those outcomes per light, and the client surfaces them as
//! [`ApiResults`](crate::response::ApiResults) entries with a non-`ok` status.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value construction.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during HTTP communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The light was not obtained from a client, so it cannot issue commands.
    #[error("light is not attached to a client")]
    Detached,

    /// A light could not be found when refreshing it.
    #[error("light not found: {0}")]
    LightNotFound(String),
}

/// Errors related to value construction and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A color could not be built or parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A hex color string is malformed.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid cycle direction string was provided.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),
}

/// Errors related to HTTP communication with the LIFX cloud.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status whose body could not be
    /// read as a result.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The access token was rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The access token cannot be sent in an HTTP header.
    #[error("access token contains invalid characters")]
    InvalidToken,

    /// Invalid base URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding LIFX responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidColor("no components".to_string());
        assert_eq!(err.to_string(), "invalid color: no components");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidPowerState("dim".to_string()).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidPowerState(_))));
    }

    #[test]
    fn status_error_display() {
        let err = ProtocolError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("results".to_string());
        assert_eq!(err.to_string(), "missing field in response: results");
    }
}
