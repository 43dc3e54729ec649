// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Govee control command definitions.
//!
//! The control endpoint takes a `cmd` object of the form
//! `{"name": <command>, "value": <scalar or {r,g,b}>}`. [`Command`]
//! serializes directly into that shape.
//!
//! # Available Commands
//!
//! | Command | Wire name | Value |
//! |---------|-----------|-------|
//! | [`Command::Turn`] | `turn` | `"on"` / `"off"` |
//! | [`Command::Brightness`] | `brightness` | integer 0-100 |
//! | [`Command::Color`] | `color` | `{"r": .., "g": .., "b": ..}` |
//! | [`Command::ColorTemperature`] | `colorTem` | integer Kelvin |
//!
//! # Examples
//!
//! ```
//! use govee_lib::command::{Command, CommandKind};
//! use govee_lib::types::PowerState;
//!
//! let cmd = Command::Turn(PowerState::On);
//! assert_eq!(cmd.kind(), CommandKind::Turn);
//! assert_eq!(
//!     serde_json::to_value(&cmd).unwrap(),
//!     serde_json::json!({"name": "turn", "value": "on"})
//! );
//! ```

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::types::{Brightness, Kelvin, PowerState, Rgb};

/// The command classes a Govee device can declare support for.
///
/// Discovery reports these as the `supportCmds` list; every command
/// method on [`Device`](crate::Device) checks its own kind against that
/// set before touching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandKind {
    /// Power on/off (`turn`).
    Turn,
    /// Brightness percentage (`brightness`).
    Brightness,
    /// RGB color (`color`).
    Color,
    /// White color temperature in Kelvin (`colorTem`).
    ColorTemperature,
}

impl CommandKind {
    /// Returns the name the vendor API uses for this command.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Turn => "turn",
            Self::Brightness => "brightness",
            Self::Color => "color",
            Self::ColorTemperature => "colorTem",
        }
    }

    /// Parses a vendor command name. Unknown names yield `None`; the
    /// caller drops them, matching how unrecognized descriptor fields
    /// are ignored.
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "turn" => Some(Self::Turn),
            "brightness" => Some(Self::Brightness),
            "color" => Some(Self::Color),
            "colorTem" => Some(Self::ColorTemperature),
            _ => None,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// A typed control instruction for one device.
///
/// Values are constrained at construction (see [`types`](crate::types)),
/// so any `Command` that exists is safe to put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn the device on or off.
    Turn(PowerState),
    /// Set brightness (0-100%).
    Brightness(Brightness),
    /// Set an RGB color.
    Color(Rgb),
    /// Set a white color temperature.
    ColorTemperature(Kelvin),
}

impl Command {
    /// Returns the command class this instruction belongs to.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Turn(_) => CommandKind::Turn,
            Self::Brightness(_) => CommandKind::Brightness,
            Self::Color(_) => CommandKind::Color,
            Self::ColorTemperature(_) => CommandKind::ColorTemperature,
        }
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut cmd = serializer.serialize_struct("cmd", 2)?;
        cmd.serialize_field("name", self.kind().wire_name())?;
        match self {
            Self::Turn(power) => cmd.serialize_field("value", power)?,
            Self::Brightness(level) => cmd.serialize_field("value", level)?,
            Self::Color(color) => cmd.serialize_field("value", color)?,
            Self::ColorTemperature(kelvin) => cmd.serialize_field("value", kelvin)?,
        }
        cmd.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_roundtrip() {
        for kind in [
            CommandKind::Turn,
            CommandKind::Brightness,
            CommandKind::Color,
            CommandKind::ColorTemperature,
        ] {
            assert_eq!(CommandKind::from_wire_name(kind.wire_name()), Some(kind));
        }
        assert_eq!(CommandKind::from_wire_name("mode"), None);
    }

    #[test]
    fn turn_serializes_to_power_string() {
        let cmd = Command::Turn(PowerState::Off);
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"name": "turn", "value": "off"})
        );
    }

    #[test]
    fn brightness_serializes_to_integer() {
        let cmd = Command::Brightness(Brightness::new(40).unwrap());
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"name": "brightness", "value": 40})
        );
    }

    #[test]
    fn color_serializes_to_channel_object() {
        let cmd = Command::Color(Rgb::new(255, 87, 51));
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"name": "color", "value": {"r": 255, "g": 87, "b": 51}})
        );
    }

    #[test]
    fn color_temperature_serializes_to_kelvin() {
        let cmd = Command::ColorTemperature(Kelvin::new(7200));
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"name": "colorTem", "value": 7200})
        );
    }
}
