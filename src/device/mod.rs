// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction.
//!
//! A [`Device`] pairs one descriptor with its exclusively-owned state
//! cache and a transport. Command methods validate locally first — the
//! vendor API bills every call and returns no structured per-field
//! errors, so failing fast gives the caller a specific reason instead of
//! an opaque rejection — and mutate the cache only on confirmed success.
//!
//! Each command method walks the same path: validate (reject with no
//! network call and no cache change), send (transport failure leaves the
//! cache untouched), then either `Ok(false)` for a vendor rejection
//! (cache untouched) or `Ok(true)` with the cache updated.
//!
//! ```no_run
//! use govee_lib::{ApiConfig, Device};
//! use govee_lib::protocol::GoveeClient;
//! use govee_lib::types::{Brightness, Rgb};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> govee_lib::Result<()> {
//!     let client = Arc::new(GoveeClient::new(ApiConfig::from_env()?)?);
//!
//!     let mut devices = Device::discover(client).await?;
//!     if let Some(lamp) = devices.first_mut() {
//!         lamp.refresh_state().await?;
//!         if lamp.turn_on().await? {
//!             lamp.set_color(Rgb::new(255, 128, 0)).await?;
//!             lamp.set_brightness(Brightness::new(60)?).await?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use crate::command::{Command, CommandKind};
use crate::descriptor::DeviceDescriptor;
use crate::error::{DeviceError, Error, Result, ValueError};
use crate::protocol::Transport;
use crate::state::DeviceState;
use crate::types::{Brightness, Kelvin, PowerState, Rgb};

/// One physical device: identity, capabilities, and last-known state.
///
/// The state cache is owned exclusively by this instance; it is never
/// shared across devices or processes, and it reflects only the last
/// successful read or write.
#[derive(Debug)]
pub struct Device<T: Transport> {
    transport: Arc<T>,
    descriptor: DeviceDescriptor,
    state: DeviceState,
}

impl<T: Transport> Device<T> {
    /// Creates a device from a discovery descriptor with an empty
    /// (all-unknown) state cache.
    #[must_use]
    pub fn new(transport: Arc<T>, descriptor: DeviceDescriptor) -> Self {
        Self {
            transport,
            descriptor,
            state: DeviceState::new(),
        }
    }

    /// Lists the account's devices and wraps each into a `Device`
    /// sharing the given transport.
    ///
    /// # Errors
    ///
    /// Returns error if the list request fails.
    pub async fn discover(transport: Arc<T>) -> Result<Vec<Self>> {
        let descriptors = transport.list_devices().await?;
        tracing::debug!(count = descriptors.len(), "discovered devices");
        Ok(descriptors
            .into_iter()
            .map(|descriptor| Self::new(Arc::clone(&transport), descriptor))
            .collect())
    }

    /// Returns the device's identity and capability record.
    #[must_use]
    pub fn descriptor(&self) -> &DeviceDescriptor {
        &self.descriptor
    }

    /// Returns the cached state.
    ///
    /// The cache is only as fresh as the last successful
    /// [`refresh_state`](Self::refresh_state) or command call.
    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Fetches the device's reported state and merges it into the cache.
    ///
    /// This is a merge, not a replace: properties missing from the
    /// response keep their prior cached values, and unknown properties
    /// are preserved opaquely.
    ///
    /// # Errors
    ///
    /// Returns error if the device is not retrievable or the request
    /// fails; the previous cache is left unchanged in either case.
    pub async fn refresh_state(&mut self) -> Result<&DeviceState> {
        if !self.descriptor.retrievable() {
            return Err(Error::Device(DeviceError::NotRetrievable));
        }

        let properties = self
            .transport
            .fetch_state(self.descriptor.device_id(), self.descriptor.model())
            .await?;
        self.state.apply_all(&properties);
        Ok(&self.state)
    }

    /// Turns the device on.
    ///
    /// On `Ok(true)` the cached power state is updated optimistically to
    /// the requested value; there is no automatic re-fetch.
    ///
    /// # Errors
    ///
    /// Returns error if `turn` is unsupported, the device is not
    /// controllable, or the transport fails.
    pub async fn turn_on(&mut self) -> Result<bool> {
        self.set_power(PowerState::On).await
    }

    /// Turns the device off.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`turn_on`](Self::turn_on).
    pub async fn turn_off(&mut self) -> Result<bool> {
        self.set_power(PowerState::Off).await
    }

    /// Sets the power state.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`turn_on`](Self::turn_on).
    pub async fn set_power(&mut self, power: PowerState) -> Result<bool> {
        self.check_support(CommandKind::Turn)?;
        let accepted = self.send(Command::Turn(power)).await?;
        if accepted {
            self.state.set_power(power);
        }
        Ok(accepted)
    }

    /// Sets an RGB color.
    ///
    /// Channel bounds are enforced by [`Rgb`] itself, so an out-of-range
    /// channel can never reach this method, let alone the network.
    ///
    /// # Errors
    ///
    /// Returns error if `color` is unsupported, the device is not
    /// controllable, or the transport fails.
    pub async fn set_color(&mut self, color: Rgb) -> Result<bool> {
        self.check_support(CommandKind::Color)?;
        let accepted = self.send(Command::Color(color)).await?;
        if accepted {
            self.state.set_color(color);
        }
        Ok(accepted)
    }

    /// Sets the white color temperature.
    ///
    /// When discovery reported a `colorTem` range for this model the
    /// value is checked against it before any network call; without a
    /// known range the vendor is authoritative.
    ///
    /// # Errors
    ///
    /// Returns error if `colorTem` is unsupported, the value lies
    /// outside the reported range, the device is not controllable, or
    /// the transport fails.
    pub async fn set_color_temperature(&mut self, kelvin: Kelvin) -> Result<bool> {
        self.check_support(CommandKind::ColorTemperature)?;
        if let Some(range) = self.descriptor.capability_range(CommandKind::ColorTemperature)
            && !range.contains(kelvin.value())
        {
            return Err(Error::Value(ValueError::OutOfRange {
                min: range.min,
                max: range.max,
                actual: kelvin.value(),
            }));
        }

        let accepted = self.send(Command::ColorTemperature(kelvin)).await?;
        if accepted {
            self.state.set_color_temperature(kelvin);
        }
        Ok(accepted)
    }

    /// Sets the brightness level.
    ///
    /// The 0-100 bound is enforced by [`Brightness`] at construction.
    ///
    /// # Errors
    ///
    /// Returns error if `brightness` is unsupported, the device is not
    /// controllable, or the transport fails.
    pub async fn set_brightness(&mut self, level: Brightness) -> Result<bool> {
        self.check_support(CommandKind::Brightness)?;
        let accepted = self.send(Command::Brightness(level)).await?;
        if accepted {
            self.state.set_brightness(level);
        }
        Ok(accepted)
    }

    /// Checks the device accepts control commands and declared support
    /// for this command class.
    fn check_support(&self, kind: CommandKind) -> Result<()> {
        if !self.descriptor.controllable() {
            return Err(Error::Device(DeviceError::NotControllable));
        }
        if !self.descriptor.supports(kind) {
            return Err(Error::Device(DeviceError::UnsupportedCommand {
                command: kind.wire_name().to_string(),
            }));
        }
        Ok(())
    }

    async fn send(&self, command: Command) -> Result<bool> {
        self.transport
            .send_command(self.descriptor.device_id(), self.descriptor.model(), &command)
            .await
    }
}
