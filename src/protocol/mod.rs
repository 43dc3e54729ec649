// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for the Govee developer API.
//!
//! The vendor exposes three operations: list devices, query one
//! device's reported state, and send one control command. The
//! [`Transport`] trait is the seam between those HTTP exchanges and the
//! [`Device`](crate::Device) abstraction; [`GoveeClient`] is the real
//! implementation, and tests substitute scripted fakes.

mod http;
mod wire;

pub use http::GoveeClient;

use crate::command::Command;
use crate::descriptor::DeviceDescriptor;
use crate::error::Result;
use crate::state::StateProperty;

/// The vendor operations, normalized.
///
/// All three calls are synchronous from the caller's perspective: each
/// future completes only once the HTTP exchange has finished or failed,
/// and implementations issue no concurrent requests of their own.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Lists the account's devices as descriptors.
    ///
    /// # Errors
    ///
    /// Returns `Error::Auth` if the API key is rejected (HTTP 401/403),
    /// `Error::Transport` for any other non-2xx response, a network
    /// failure, or malformed JSON.
    async fn list_devices(&self) -> Result<Vec<DeviceDescriptor>>;

    /// Fetches one device's reported state as normalized properties.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`Transport::list_devices`].
    async fn fetch_state(&self, device_id: &str, model: &str) -> Result<Vec<StateProperty>>;

    /// Sends one control command.
    ///
    /// Returns `Ok(true)` when the vendor accepted the command and
    /// `Ok(false)` when it rejected it; rejection is never an `Err`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Auth` for a rejected API key and
    /// `Error::Transport` for transport-level failures only (network
    /// unreachable, malformed response).
    async fn send_command(&self, device_id: &str, model: &str, command: &Command) -> Result<bool>;
}
