// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw wire shapes of the Govee developer API.
//!
//! These structs mirror the vendor's JSON exactly and exist only at the
//! transport boundary; everything is converted into the crate's domain
//! types before leaving this module. Unrecognized fields are dropped by
//! serde's default behavior.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::command::{Command, CommandKind};
use crate::descriptor::{CapabilityRange, DeviceDescriptor};
use crate::state::StateProperty;

/// The `{code, message, data}` envelope every endpoint wraps its payload
/// in. Only `data` matters; `code` duplicates the HTTP status.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Payload of the device list endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DeviceList {
    #[serde(default)]
    pub devices: Vec<RawDevice>,
}

/// One entry of the device list.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDevice {
    pub device: String,
    pub model: String,
    #[serde(rename = "deviceName", default)]
    pub device_name: String,
    #[serde(default)]
    pub controllable: bool,
    #[serde(default)]
    pub retrievable: bool,
    #[serde(rename = "supportCmds", default)]
    pub support_cmds: Vec<String>,
    #[serde(default)]
    pub properties: RawDeviceProperties,
}

/// The `properties` block of a device record. The vendor currently only
/// publishes a range for `colorTem`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDeviceProperties {
    #[serde(rename = "colorTem")]
    pub color_tem: Option<RawRangedProperty>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRangedProperty {
    pub range: CapabilityRange,
}

impl From<RawDevice> for DeviceDescriptor {
    fn from(raw: RawDevice) -> Self {
        let mut descriptor = DeviceDescriptor::new(raw.device, raw.model, raw.device_name)
            .with_controllable(raw.controllable)
            .with_retrievable(raw.retrievable)
            .with_supported_commands(
                raw.support_cmds
                    .iter()
                    .filter_map(|name| CommandKind::from_wire_name(name)),
            );
        if let Some(color_tem) = raw.properties.color_tem {
            descriptor =
                descriptor.with_capability_range(CommandKind::ColorTemperature, color_tem.range);
        }
        descriptor
    }
}

/// Payload of the state endpoint: the echoed identity plus the list of
/// single-key property objects.
#[derive(Debug, Deserialize)]
pub(crate) struct RawStateData {
    #[serde(default)]
    pub properties: Vec<Map<String, Value>>,
}

impl RawStateData {
    /// Flattens the single-key objects into typed properties.
    pub fn into_properties(self) -> Vec<StateProperty> {
        self.properties
            .into_iter()
            .flatten()
            .map(|(key, value)| StateProperty::from_entry(&key, value))
            .collect()
    }
}

/// Body of the control endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ControlRequest<'a> {
    pub device: &'a str,
    pub model: &'a str,
    pub cmd: &'a Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brightness, PowerState, Rgb};
    use serde_json::json;

    #[test]
    fn device_list_parses_and_converts() {
        let body = json!({
            "data": {
                "devices": [{
                    "device": "99:E5:A4:C1:38:29:DA:7B",
                    "model": "H6159",
                    "deviceName": "Desk strip",
                    "controllable": true,
                    "retrievable": true,
                    "supportCmds": ["turn", "brightness", "color", "colorTem", "futureCmd"],
                    "properties": {
                        "colorTem": {"range": {"min": 2000, "max": 9000}}
                    }
                }]
            },
            "message": "Success",
            "code": 200
        });

        let envelope: Envelope<DeviceList> = serde_json::from_value(body).unwrap();
        let descriptor: DeviceDescriptor = envelope.data.devices.into_iter().next().unwrap().into();

        assert_eq!(descriptor.device_id(), "99:E5:A4:C1:38:29:DA:7B");
        assert_eq!(descriptor.model(), "H6159");
        assert_eq!(descriptor.display_name(), "Desk strip");
        assert!(descriptor.controllable());
        assert!(descriptor.retrievable());
        // The unknown "futureCmd" entry is dropped.
        assert_eq!(descriptor.supported_commands().len(), 4);
        let range = descriptor
            .capability_range(CommandKind::ColorTemperature)
            .unwrap();
        assert_eq!((range.min, range.max), (2000, 9000));
    }

    #[test]
    fn device_record_with_missing_optionals() {
        let body = json!({
            "data": {"devices": [{"device": "id", "model": "H6089"}]}
        });

        let envelope: Envelope<DeviceList> = serde_json::from_value(body).unwrap();
        let descriptor: DeviceDescriptor = envelope.data.devices.into_iter().next().unwrap().into();

        assert_eq!(descriptor.display_name(), "");
        assert!(!descriptor.controllable());
        assert!(descriptor.supported_commands().is_empty());
    }

    #[test]
    fn state_payload_flattens_single_key_objects() {
        let body = json!({
            "data": {
                "device": "id",
                "model": "H6159",
                "properties": [
                    {"online": true},
                    {"powerState": "off"},
                    {"brightness": 82},
                    {"color": {"r": 0, "g": 255, "b": 10}},
                    {"mode": 3}
                ]
            }
        });

        let envelope: Envelope<RawStateData> = serde_json::from_value(body).unwrap();
        let properties = envelope.data.into_properties();

        assert_eq!(properties.len(), 5);
        assert!(properties.contains(&StateProperty::Online(true)));
        assert!(properties.contains(&StateProperty::Power(PowerState::Off)));
        assert!(properties.contains(&StateProperty::Brightness(Brightness::new(82).unwrap())));
        assert!(properties.contains(&StateProperty::Color(Rgb::new(0, 255, 10))));
        assert!(properties.contains(&StateProperty::Other {
            key: "mode".to_string(),
            value: json!(3),
        }));
    }

    #[test]
    fn control_request_body_shape() {
        let command = Command::Turn(PowerState::On);
        let request = ControlRequest {
            device: "99:E5",
            model: "H6159",
            cmd: &command,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "device": "99:E5",
                "model": "H6159",
                "cmd": {"name": "turn", "value": "on"}
            })
        );
    }
}
