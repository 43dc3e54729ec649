// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity and capability records.
//!
//! A [`DeviceDescriptor`] is assigned once per device at discovery and
//! never changes afterwards. It carries everything command validation
//! needs: the supported command set and any numeric ranges the vendor
//! reported for it.

use std::collections::{BTreeMap, BTreeSet};

use crate::command::CommandKind;

/// A numeric range the vendor reports for a command value.
///
/// Currently only `colorTem` comes with one (min/max Kelvin for the
/// model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CapabilityRange {
    /// Inclusive minimum.
    pub min: u32,
    /// Inclusive maximum.
    pub max: u32,
}

impl CapabilityRange {
    /// Returns `true` if `value` lies inside the range.
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Static identity and capability record for one device.
///
/// Built from a discovery response entry; unrecognized wire fields and
/// unknown `supportCmds` names are dropped at the transport boundary.
///
/// # Examples
///
/// ```
/// use govee_lib::command::CommandKind;
/// use govee_lib::DeviceDescriptor;
///
/// let descriptor = DeviceDescriptor::new("AA:BB:CC:DD:EE:FF:00:11", "H6089", "Desk lamp")
///     .with_supported_commands([CommandKind::Turn, CommandKind::Brightness]);
///
/// assert!(descriptor.supports(CommandKind::Turn));
/// assert!(!descriptor.supports(CommandKind::Color));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    device_id: String,
    model: String,
    display_name: String,
    controllable: bool,
    retrievable: bool,
    supported_commands: BTreeSet<CommandKind>,
    capability_ranges: BTreeMap<CommandKind, CapabilityRange>,
}

impl DeviceDescriptor {
    /// Creates a descriptor with no supported commands and both
    /// operation classes permitted.
    #[must_use]
    pub fn new(
        device_id: impl Into<String>,
        model: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            model: model.into(),
            display_name: display_name.into(),
            controllable: true,
            retrievable: true,
            supported_commands: BTreeSet::new(),
            capability_ranges: BTreeMap::new(),
        }
    }

    /// Replaces the supported command set.
    #[must_use]
    pub fn with_supported_commands(
        mut self,
        commands: impl IntoIterator<Item = CommandKind>,
    ) -> Self {
        self.supported_commands = commands.into_iter().collect();
        self
    }

    /// Records a value range for a command.
    #[must_use]
    pub fn with_capability_range(mut self, command: CommandKind, range: CapabilityRange) -> Self {
        self.capability_ranges.insert(command, range);
        self
    }

    /// Sets whether the device accepts control commands.
    #[must_use]
    pub fn with_controllable(mut self, controllable: bool) -> Self {
        self.controllable = controllable;
        self
    }

    /// Sets whether the device's state can be queried.
    #[must_use]
    pub fn with_retrievable(mut self, retrievable: bool) -> Self {
        self.retrievable = retrievable;
        self
    }

    /// Returns the vendor-assigned device identifier (primary key).
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the model code; required for every control/state call.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns `true` if the vendor permits control commands.
    #[must_use]
    pub fn controllable(&self) -> bool {
        self.controllable
    }

    /// Returns `true` if the vendor permits state queries.
    #[must_use]
    pub fn retrievable(&self) -> bool {
        self.retrievable
    }

    /// Returns `true` if the device declared support for `command`.
    #[must_use]
    pub fn supports(&self, command: CommandKind) -> bool {
        self.supported_commands.contains(&command)
    }

    /// Returns the supported command set.
    #[must_use]
    pub fn supported_commands(&self) -> &BTreeSet<CommandKind> {
        &self.supported_commands
    }

    /// Returns the reported value range for `command`, if any.
    #[must_use]
    pub fn capability_range(&self, command: CommandKind) -> Option<&CapabilityRange> {
        self.capability_ranges.get(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_contains_is_inclusive() {
        let range = CapabilityRange {
            min: 2000,
            max: 9000,
        };
        assert!(range.contains(2000));
        assert!(range.contains(9000));
        assert!(!range.contains(1999));
        assert!(!range.contains(9001));
    }

    #[test]
    fn supports_checks_membership() {
        let descriptor = DeviceDescriptor::new("id", "H6089", "Lamp")
            .with_supported_commands([CommandKind::Turn, CommandKind::Brightness]);

        assert!(descriptor.supports(CommandKind::Turn));
        assert!(descriptor.supports(CommandKind::Brightness));
        assert!(!descriptor.supports(CommandKind::Color));
        assert!(!descriptor.supports(CommandKind::ColorTemperature));
    }

    #[test]
    fn capability_range_lookup() {
        let descriptor = DeviceDescriptor::new("id", "H6089", "Lamp").with_capability_range(
            CommandKind::ColorTemperature,
            CapabilityRange {
                min: 2000,
                max: 9000,
            },
        );

        let range = descriptor
            .capability_range(CommandKind::ColorTemperature)
            .unwrap();
        assert_eq!(range.min, 2000);
        assert!(descriptor.capability_range(CommandKind::Color).is_none());
    }

    #[test]
    fn operation_class_flags() {
        let descriptor = DeviceDescriptor::new("id", "H6089", "Lamp")
            .with_controllable(false)
            .with_retrievable(false);
        assert!(!descriptor.controllable());
        assert!(!descriptor.retrievable());
    }
}
