//! A [`ColorInfo`] describes one color in hex, RGB and HSL notation at the
//! same time.

use std::{fmt, str::FromStr};

use crate::error::{ColorError, Result};
use crate::{hex, Hsl, Rgb};

/// A 64-bit floating point value used for all intermediate math. Conversions
/// round from it to the integer components of [`Rgb`] and [`Hsl`].
pub type Component = f64;

/// Three normalized components, i.e. RGB channels or HSL components scaled to
/// `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color in all three notations. The hex string is always canonical and
/// the three notations agree with each other under [`hex_to_rgb`] and
/// [`Rgb::to_hsl`].
///
/// [`hex_to_rgb`]: crate::hex_to_rgb
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorInfo {
    /// The color as `#` followed by 6 uppercase hexadecimal digits.
    pub hex: String,
    /// The color's channels.
    pub rgb: Rgb,
    /// The color in HSL notation.
    pub hsl: Hsl,
}

impl ColorInfo {
    /// Describe the color with the given channels.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
        }
    }

    /// Describe the color closest to the given HSL notation. The components
    /// are re-derived from the color's hex encoding, so the result's HSL
    /// notation may differ from `hsl` by rounding.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(hsl.to_rgb())
    }
}

/// Create the description of the color with the given hex notation. This is
/// the entry point for turning user input into a color.
/// ```rust
/// let info = tinct::create_color_info("#f00").unwrap();
/// assert_eq!(info.hex, "#FF0000");
/// assert_eq!(info.rgb, tinct::Rgb::new(255, 0, 0));
/// assert_eq!(info.hsl, tinct::Hsl::new(0, 100, 50));
/// ```
pub fn create_color_info(hex: &str) -> Result<ColorInfo> {
    let hex = hex::normalize_hex(hex)?;
    let rgb = hex::hex_to_rgb(&hex)?;

    Ok(ColorInfo {
        hsl: rgb.to_hsl(),
        rgb,
        hex,
    })
}

impl FromStr for ColorInfo {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        create_color_info(s)
    }
}

impl fmt::Display for ColorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
