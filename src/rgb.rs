//! Model a color in the sRGB color space with 8-bit channels.

use std::fmt;

use crate::Component;

tinct_macros::gen_model! {
    /// A color specified in the sRGB color space with one byte per channel.
    pub struct Rgb {
        /// The red channel of the color.
        #[cfg_attr(feature = "serde", serde(rename = "r"))]
        red: u8,
        /// The green channel of the color.
        #[cfg_attr(feature = "serde", serde(rename = "g"))]
        green: u8,
        /// The blue channel of the color.
        #[cfg_attr(feature = "serde", serde(rename = "b"))]
        blue: u8,
    }
}

impl Rgb {
    /// Create a color from channels that are not necessarily integers in
    /// `0..=255`. Each channel is clamped into range and then rounded to the
    /// nearest integer, so that any input yields a valid color.
    /// ```rust
    /// use tinct::Rgb;
    /// assert_eq!(Rgb::clamped(300.0, -4.0, 127.5), Rgb::new(255, 0, 128));
    /// ```
    pub fn clamped(red: Component, green: Component, blue: Component) -> Self {
        Self::new(to_channel(red), to_channel(green), to_channel(blue))
    }

    /// Encode the color in canonical hex notation, i.e. `#` followed by 6
    /// uppercase hexadecimal digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

fn to_channel(value: Component) -> u8 {
    // NaN falls through the clamp and casts to 0.
    value.clamp(0.0, 255.0).round() as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
