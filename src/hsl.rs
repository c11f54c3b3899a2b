//! Model a color with the HSL notation in the sRGB color space.

use std::fmt;

tinct_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// The hue is an angle in whole degrees in `0..360`, saturation and
    /// lightness are whole percentages in `0..=100`.
    pub struct Hsl {
        /// The hue component of the color.
        #[cfg_attr(feature = "serde", serde(rename = "h"))]
        hue: u16,
        /// The saturation component of the color.
        #[cfg_attr(feature = "serde", serde(rename = "s"))]
        saturation: u8,
        /// The lightness component of the color.
        #[cfg_attr(feature = "serde", serde(rename = "l"))]
        lightness: u8,
    }
}

/// Number of degrees in a full turn of the hue circle.
pub const FULL_TURN: u16 = 360;

const MAX_PERCENT: i32 = 100;

impl Hsl {
    /// Return this color with the hue turned by `degrees`. Negative values
    /// turn backwards, the result always wraps into `0..360`.
    pub fn rotate(&self, degrees: i32) -> Self {
        let hue = (i32::from(self.hue) + degrees).rem_euclid(i32::from(FULL_TURN));
        Self::new(hue as u16, self.saturation, self.lightness)
    }

    /// Return this color with the saturation changed by `delta` percentage
    /// points, clamped to `0..=100`.
    pub fn shift_saturation(&self, delta: i32) -> Self {
        Self::new(self.hue, shift_percent(self.saturation, delta), self.lightness)
    }

    /// Return this color with the lightness changed by `delta` percentage
    /// points, clamped to `0..=100`.
    pub fn shift_lightness(&self, delta: i32) -> Self {
        Self::new(self.hue, self.saturation, shift_percent(self.lightness, delta))
    }

    /// Return this color with the given lightness.
    pub fn with_lightness(&self, lightness: u8) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }
}

fn shift_percent(value: u8, delta: i32) -> u8 {
    (i32::from(value) + delta).clamp(0, MAX_PERCENT) as u8
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        let hsl = Hsl::new(25, 75, 47);
        assert_eq!(hsl.hue, 25);
        assert_eq!(hsl.saturation, 75);
        assert_eq!(hsl.lightness, 47);
        assert_eq!(hsl.to_string(), "hsl(25, 75%, 47%)");
    }

    #[test]
    fn rotate_wraps() {
        #[rustfmt::skip]
        const TESTS: &[(u16, i32, u16)] = &[
            (200, 180, 20),
            (10, -30, 340),
            (10, 30, 40),
            (0, 120, 120),
            (300, 240, 180),
            (359, 1, 0),
            (0, -360, 0),
            (0, -721, 359),
        ];

        for &(hue, degrees, expected) in TESTS {
            let rotated = Hsl::new(hue, 50, 50).rotate(degrees);
            assert_eq!(rotated.hue, expected, "{hue} rotated by {degrees}");
            assert_eq!(rotated.saturation, 50);
            assert_eq!(rotated.lightness, 50);
        }
    }

    #[test]
    fn shifts_clamp() {
        let hsl = Hsl::new(90, 90, 10);
        assert_eq!(hsl.shift_saturation(20), Hsl::new(90, 100, 10));
        assert_eq!(hsl.shift_saturation(-20), Hsl::new(90, 70, 10));
        assert_eq!(hsl.shift_lightness(20), Hsl::new(90, 90, 30));
        assert_eq!(hsl.shift_lightness(-20), Hsl::new(90, 90, 0));
        assert_eq!(hsl.with_lightness(65), Hsl::new(90, 90, 65));
    }
}
