// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use std::collections::BTreeMap;

use serde_json::Value;

use super::StateProperty;
use crate::types::{Brightness, Kelvin, PowerState, Rgb};

/// Cached, possibly-stale snapshot of a device's reported properties.
///
/// Every field is optional because state is unknown until the device
/// reports it. The snapshot reflects the *last successful* read or
/// write only; callers must not assume it is fresher than the last
/// `refresh_state` or command that updated it.
///
/// Applying properties is a merge, not a replace: a refresh that omits
/// a key leaves the prior cached value untouched, and a failed refresh
/// changes nothing at all.
///
/// # Examples
///
/// ```
/// use govee_lib::state::DeviceState;
/// use govee_lib::types::PowerState;
///
/// let mut state = DeviceState::new();
/// state.set_power(PowerState::On);
/// assert_eq!(state.power(), Some(PowerState::On));
/// assert!(state.brightness().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceState {
    /// Reachability flag.
    online: Option<bool>,
    /// Power state; `None` when unknown.
    power: Option<PowerState>,
    /// Brightness level (0-100).
    brightness: Option<Brightness>,
    /// RGB color.
    color: Option<Rgb>,
    /// Color temperature in Kelvin.
    color_temperature: Option<Kelvin>,
    /// Reported properties this library does not model, kept opaquely.
    extra: BTreeMap<String, Value>,
}

impl DeviceState {
    /// Creates a new empty (all-unknown) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the reachability flag.
    #[must_use]
    pub fn online(&self) -> Option<bool> {
        self.online
    }

    /// Gets the power state.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Sets the power state.
    pub fn set_power(&mut self, power: PowerState) {
        self.power = Some(power);
    }

    /// Gets the brightness level.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Sets the brightness level.
    pub fn set_brightness(&mut self, level: Brightness) {
        self.brightness = Some(level);
    }

    /// Gets the RGB color.
    #[must_use]
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    /// Sets the RGB color.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = Some(color);
    }

    /// Gets the color temperature.
    #[must_use]
    pub fn color_temperature(&self) -> Option<Kelvin> {
        self.color_temperature
    }

    /// Sets the color temperature.
    pub fn set_color_temperature(&mut self, kelvin: Kelvin) {
        self.color_temperature = Some(kelvin);
    }

    /// Returns the unmodeled reported properties.
    #[must_use]
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Merges one reported property into the cache.
    ///
    /// Returns `true` if the cache was modified, `false` if the value
    /// was already current.
    pub fn apply(&mut self, property: &StateProperty) -> bool {
        match property {
            StateProperty::Online(online) => {
                if self.online == Some(*online) {
                    false
                } else {
                    self.online = Some(*online);
                    true
                }
            }
            StateProperty::Power(power) => {
                if self.power == Some(*power) {
                    false
                } else {
                    self.power = Some(*power);
                    true
                }
            }
            StateProperty::Brightness(level) => {
                if self.brightness == Some(*level) {
                    false
                } else {
                    self.brightness = Some(*level);
                    true
                }
            }
            StateProperty::Color(color) => {
                if self.color == Some(*color) {
                    false
                } else {
                    self.color = Some(*color);
                    true
                }
            }
            StateProperty::ColorTemperature(kelvin) => {
                if self.color_temperature == Some(*kelvin) {
                    false
                } else {
                    self.color_temperature = Some(*kelvin);
                    true
                }
            }
            StateProperty::Other { key, value } => {
                if self.extra.get(key) == Some(value) {
                    false
                } else {
                    self.extra.insert(key.clone(), value.clone());
                    true
                }
            }
        }
    }

    /// Merges a batch of reported properties into the cache.
    ///
    /// Returns `true` if any property modified the cache.
    pub fn apply_all<'a>(&mut self, properties: impl IntoIterator<Item = &'a StateProperty>) -> bool {
        let mut changed = false;
        for property in properties {
            if self.apply(property) {
                changed = true;
            }
        }
        changed
    }
}
