// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature type.
//!
//! Govee reports and accepts color temperature directly in Kelvin. The
//! valid range varies per device model, so this type carries no fixed
//! bounds; [`Device`](crate::Device) checks the value against the range
//! the vendor reported for the device, when one is known.

use std::fmt;

/// Color temperature in Kelvin.
///
/// Lower values are warmer (more orange), higher values cooler (bluer).
/// Typical Govee lights accept roughly 2000-9000 K.
///
/// # Examples
///
/// ```
/// use govee_lib::types::Kelvin;
///
/// let neutral = Kelvin::new(4000);
/// assert_eq!(neutral.value(), 4000);
/// assert_eq!(neutral.to_string(), "4000K");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Kelvin(u32);

impl Kelvin {
    /// Warm white (~2700K).
    pub const WARM: Self = Self(2700);

    /// Neutral white (~4000K).
    pub const NEUTRAL: Self = Self(4000);

    /// Cool daylight (~6500K).
    pub const COOL: Self = Self(6500);

    /// Creates a new color temperature value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the color temperature in Kelvin.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

impl From<u32> for Kelvin {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(Kelvin::WARM.value(), 2700);
        assert_eq!(Kelvin::NEUTRAL.value(), 4000);
        assert_eq!(Kelvin::COOL.value(), 6500);
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&Kelvin::new(7200)).unwrap();
        assert_eq!(json, "7200");
        let k: Kelvin = serde_json::from_str("5000").unwrap();
        assert_eq!(k.value(), 5000);
    }
}
