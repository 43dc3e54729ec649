// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached device state and reported-state properties.
//!
//! The vendor's state endpoint returns a list of single-key objects (a
//! wire-format artifact). That list is normalized into [`StateProperty`]
//! values at the transport boundary and merged into a structured
//! [`DeviceState`] by the device, so the rest of the library never sees
//! the raw shape.

mod device_state;
mod property;

pub use device_state::DeviceState;
pub use property::StateProperty;
