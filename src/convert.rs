//! Conversions between the hex, RGB and HSL notations.
//!
//! The math happens on normalized [`Components`] in [`util`], the models
//! only scale into and out of that range and round. Rounding is always half
//! away from zero.
//!
//! ```rust
//! use tinct::{Hsl, Rgb};
//! let chocolate = Rgb::new(210, 105, 30);
//! assert_eq!(chocolate.to_hsl(), Hsl::new(25, 75, 47));
//! assert_eq!(Hsl::new(25, 75, 47).to_rgb(), Rgb::new(210, 105, 30));
//! ```

use crate::{
    color::{Component, Components},
    error::Result,
    hex::hex_to_rgb,
    hsl::FULL_TURN,
    Hsl, Rgb,
};

const CHANNEL_MAX: Component = 255.0;
const PERCENT: Component = 100.0;
const DEGREES: Component = FULL_TURN as Component;

impl Rgb {
    /// Return the channels scaled to `0.0..=1.0`.
    pub fn to_components(&self) -> Components {
        Components(
            Component::from(self.red),
            Component::from(self.green),
            Component::from(self.blue),
        )
        .map(|c| c / CHANNEL_MAX)
    }

    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_components());

        // A hue just short of a full turn rounds up to it.
        let hue = (hue * DEGREES).round() as u16 % FULL_TURN;

        Hsl::new(
            hue,
            (saturation * PERCENT).round() as u8,
            (lightness * PERCENT).round() as u8,
        )
    }
}

impl Hsl {
    /// Return the components scaled to `0.0..=1.0`. Out of range values, which
    /// can only be constructed by hand, are wrapped (hue) or clamped.
    pub fn to_components(&self) -> Components {
        Components(
            Component::from(self.hue % FULL_TURN) / DEGREES,
            Component::from(self.saturation).min(PERCENT) / PERCENT,
            Component::from(self.lightness).min(PERCENT) / PERCENT,
        )
    }

    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) =
            util::hsl_to_rgb(&self.to_components()).map(|c| c * CHANNEL_MAX);
        Rgb::clamped(red, green, blue)
    }
}

/// Encode the color in canonical hex notation.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Convert from RGB notation to HSL notation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert from HSL notation to RGB notation.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

/// Decode the hex color and convert it to HSL notation.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(hex_to_rgb(hex)?.to_hsl())
}

/// Convert from HSL notation to canonical hex notation.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_rgb().to_hex()
}

mod util {
    use crate::color::{Component, Components};

    /// Convert from RGB notation to HSL notation. All components, including
    /// the hue, are in `0.0..=1.0`.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Components(hue / 6.0, saturation, lightness)
    }

    /// Compute one channel from the hue `t` relative to the channel, with `p`
    /// and `q` the channel's lower and upper bounds.
    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert from HSL notation to RGB notation. All components, including
    /// the hue, are in `0.0..=1.0`.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }
}
