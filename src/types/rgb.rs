// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing.
//!
//! The Govee API represents colors as a `{"r": .., "g": .., "b": ..}`
//! object, both in the `color` command value and in the reported `color`
//! state property. The serde field renames match that wire shape.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// Channel bounds are enforced by the type: [`Rgb::new`] takes `u8`, and
/// [`Rgb::from_values`] checks wider integers from untrusted input (menu
/// entry, config files) before a color can exist at all. A command method
/// therefore never has to re-validate channels.
///
/// # Examples
///
/// ```
/// use govee_lib::types::Rgb;
///
/// let orange = Rgb::new(255, 128, 0);
/// assert_eq!(orange.red(), 255);
///
/// // Checked construction from untrusted integers
/// assert!(Rgb::from_values(10, 20, 300).is_err());
///
/// // Parse from hex string
/// let red = Rgb::from_hex("#FF0000").unwrap();
/// assert_eq!(red.to_hex(), "FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    #[serde(rename = "r")]
    red: u8,
    #[serde(rename = "g")]
    green: u8,
    #[serde(rename = "b")]
    blue: u8,
}

impl Rgb {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates an RGB color from untrusted integer channels.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if any channel is outside [0, 255].
    pub fn from_values(red: u32, green: u32, blue: u32) -> Result<Self, ValueError> {
        let channel = |value: u32| {
            u8::try_from(value).map_err(|_| ValueError::OutOfRange {
                min: 0,
                max: 255,
                actual: value,
            })
        };
        Ok(Self {
            red: channel(red)?,
            green: channel(green)?,
            blue: channel(blue)?,
        })
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts `#RRGGBB` and `RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is malformed.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let hex = hex.trim_start_matches('#');
        // Byte slicing below requires ASCII.
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }
        let pair = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(s.to_string()))
        };
        Ok(Self {
            red: pair(&hex[0..2])?,
            green: pair(&hex[2..4])?,
            blue: pair(&hex[4..6])?,
        })
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as a hex string without a hash prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Creates a white color.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}
