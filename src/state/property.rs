// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed reported-state properties.

use std::str::FromStr;

use serde_json::Value;

use crate::types::{Brightness, Kelvin, PowerState, Rgb};

/// One property reported by the state endpoint.
///
/// Known keys are parsed into typed variants; anything else (unknown
/// keys, or known keys whose value does not fit the documented shape) is
/// preserved opaquely as [`StateProperty::Other`] so a refresh never
/// loses information.
#[derive(Debug, Clone, PartialEq)]
pub enum StateProperty {
    /// Reachability flag (`online`).
    Online(bool),
    /// Power state (`powerState`).
    Power(PowerState),
    /// Brightness percentage (`brightness`).
    Brightness(Brightness),
    /// RGB color (`color`).
    Color(Rgb),
    /// Color temperature in Kelvin (`colorTem`).
    ColorTemperature(Kelvin),
    /// Any property this library does not model.
    Other {
        /// The wire key.
        key: String,
        /// The raw JSON value.
        value: Value,
    },
}

impl StateProperty {
    /// Builds a property from one key/value pair of a single-key state
    /// object.
    #[must_use]
    pub fn from_entry(key: &str, value: Value) -> Self {
        match key {
            "online" => match &value {
                Value::Bool(online) => return Self::Online(*online),
                // Some firmware versions report the flag as a string.
                Value::String(s) => {
                    if let Ok(online) = s.parse::<bool>() {
                        return Self::Online(online);
                    }
                }
                _ => {}
            },
            "powerState" => {
                if let Value::String(s) = &value
                    && let Ok(power) = PowerState::from_str(s)
                {
                    return Self::Power(power);
                }
            }
            "brightness" => {
                if let Some(level) = value
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .and_then(|v| Brightness::new(v).ok())
                {
                    return Self::Brightness(level);
                }
            }
            "color" => {
                if let Ok(color) = serde_json::from_value::<Rgb>(value.clone()) {
                    return Self::Color(color);
                }
            }
            "colorTem" => {
                if let Some(kelvin) = value.as_u64().and_then(|v| u32::try_from(v).ok()) {
                    return Self::ColorTemperature(Kelvin::new(kelvin));
                }
            }
            _ => {}
        }
        Self::Other {
            key: key.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_known_keys() {
        assert_eq!(
            StateProperty::from_entry("online", json!(true)),
            StateProperty::Online(true)
        );
        assert_eq!(
            StateProperty::from_entry("powerState", json!("off")),
            StateProperty::Power(PowerState::Off)
        );
        assert_eq!(
            StateProperty::from_entry("brightness", json!(82)),
            StateProperty::Brightness(Brightness::new(82).unwrap())
        );
        assert_eq!(
            StateProperty::from_entry("color", json!({"r": 0, "g": 255, "b": 10})),
            StateProperty::Color(Rgb::new(0, 255, 10))
        );
        assert_eq!(
            StateProperty::from_entry("colorTem", json!(7200)),
            StateProperty::ColorTemperature(Kelvin::new(7200))
        );
    }

    #[test]
    fn string_online_flag() {
        assert_eq!(
            StateProperty::from_entry("online", json!("false")),
            StateProperty::Online(false)
        );
    }

    #[test]
    fn unknown_key_preserved_opaquely() {
        let prop = StateProperty::from_entry("mode", json!(3));
        assert_eq!(
            prop,
            StateProperty::Other {
                key: "mode".to_string(),
                value: json!(3),
            }
        );
    }

    #[test]
    fn malformed_known_key_falls_back_to_other() {
        // Brightness above 100 does not fit the documented shape.
        let prop = StateProperty::from_entry("brightness", json!(150));
        assert!(matches!(prop, StateProperty::Other { .. }));

        let prop = StateProperty::from_entry("powerState", json!(1));
        assert!(matches!(prop, StateProperty::Other { .. }));
    }
}
