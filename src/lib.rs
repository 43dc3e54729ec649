// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Govee` Lib - A Rust client for the Govee Developer REST API.
//!
//! This library provides async APIs to discover and control Govee
//! smart-lighting devices (strips, bulbs, plugs) through the vendor's
//! cloud HTTP API.
//!
//! # Supported Features
//!
//! - **Discovery**: List the account's devices with their capabilities
//! - **Power control**: Turn devices on/off
//! - **Light control**: RGB color, white color temperature, brightness
//! - **State queries**: Cached per-device state with explicit refresh
//!
//! Every command is validated locally against the device's advertised
//! capabilities before any network call; the cloud API bills per
//! request and returns no structured per-field errors.
//!
//! # Quick Start
//!
//! ```no_run
//! use govee_lib::{ApiConfig, Device, GoveeClient};
//! use govee_lib::types::{Brightness, Rgb};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> govee_lib::Result<()> {
//!     // Reads the API key from GOVEE_API_KEY
//!     let client = Arc::new(GoveeClient::new(ApiConfig::from_env()?)?);
//!
//!     let mut devices = Device::discover(client).await?;
//!     for device in &devices {
//!         println!(
//!             "{} ({} {})",
//!             device.descriptor().display_name(),
//!             device.descriptor().model(),
//!             device.descriptor().device_id(),
//!         );
//!     }
//!
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
//!
//! # Custom Transports
//!
//! [`Device`] is generic over the [`Transport`] trait, so an
//! application can substitute its own transport (a recording proxy, a
//! rate limiter wrapping [`GoveeClient`], a test double) without
//! touching the device layer.

pub mod command;
mod config;
mod descriptor;
mod device;
pub mod error;
pub mod protocol;
pub mod state;
pub mod types;

pub use command::{Command, CommandKind};
pub use config::{API_KEY_ENV, ApiConfig};
pub use descriptor::{CapabilityRange, DeviceDescriptor};
pub use device::Device;
pub use error::{AuthError, DeviceError, Error, Result, TransportError, ValueError};
pub use protocol::{GoveeClient, Transport};
pub use state::{DeviceState, StateProperty};
pub use types::{Brightness, Kelvin, PowerState, Rgb};
