// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Govee client library.
//!
//! This module provides the error hierarchy for failures across the
//! library: credential problems, HTTP/JSON transport failures, value
//! validation, and device-level precondition failures.
//!
//! Vendor-side rejection of a control command is deliberately *not* an
//! error: command methods report it through their success boolean so the
//! caller can distinguish "the cloud said no" from "the call never made
//! it there".

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The API key is missing or was rejected by the vendor.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// The HTTP exchange failed or the response could not be parsed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A value failed client-side validation before any network call.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A device-level precondition was not met.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to the API credential.
///
/// These are fatal to the session: the vendor will reject every request
/// until the key is fixed, so callers should not retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No API key was supplied.
    #[error("API key is missing")]
    MissingKey,

    /// The vendor rejected the API key.
    #[error("API key rejected (HTTP {status})")]
    Rejected {
        /// The HTTP status the vendor answered with (401 or 403).
        status: u16,
    },
}

/// Errors related to the HTTP exchange with the vendor API.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request failed (connection, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The vendor answered a query endpoint with a status we cannot
    /// interpret.
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// The response parsed as JSON but not into the documented shape.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to value validation and constraints.
///
/// These occur when constructing constrained types from untrusted input
/// and never reach the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid hex color string was provided.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// Errors related to per-device preconditions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The command is not in the device's supported command set.
    #[error("device does not support command {command}")]
    UnsupportedCommand {
        /// Wire name of the unsupported command.
        command: String,
    },

    /// The vendor reports this device as not controllable.
    #[error("device is not controllable")]
    NotControllable,

    /// The vendor reports this device's state as not retrievable.
    #[error("device state is not retrievable")]
    NotRetrievable,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn auth_error_display() {
        let err = AuthError::Rejected { status: 401 };
        assert_eq!(err.to_string(), "API key rejected (HTTP 401)");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidPowerState("maybe".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidPowerState(_))));
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::UnsupportedCommand {
            command: "colorTem".to_string(),
        };
        assert_eq!(err.to_string(), "device does not support command colorTem");
    }
}
