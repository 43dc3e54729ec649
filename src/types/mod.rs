// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Govee device control.
//!
//! This module provides type-safe representations of values used in Govee
//! commands. Each type ensures values are within their valid ranges at
//! construction time, so an out-of-range value never reaches the network.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off power states
//! - [`Brightness`] - Brightness level (0-100%)
//! - [`Rgb`] - RGB color with 8-bit channels
//! - [`Kelvin`] - Color temperature in Kelvin

mod brightness;
mod kelvin;
mod power;
mod rgb;

pub use brightness::Brightness;
pub use kelvin::Kelvin;
pub use power::PowerState;
pub use rgb::Rgb;
