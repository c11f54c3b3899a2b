//! Lighter, darker, more and less saturated siblings of a color.

use crate::color::{create_color_info, ColorInfo};
use crate::error::Result;

/// How many percentage points a variation moves lightness or saturation.
pub const VARIATION_STEP: i32 = 20;

/// A color together with a human-readable name for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorVariation {
    /// The name of the variation, e.g. `Lighter`.
    pub name: String,
    /// The varied color.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub color: ColorInfo,
}

impl ColorVariation {
    fn new(name: &str, color: ColorInfo) -> Self {
        Self {
            name: name.to_string(),
            color,
        }
    }
}

/// A base color and its four variations. Each variation keeps the base hue
/// and moves exactly one of lightness or saturation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorVariations {
    /// The unmodified base color.
    pub base: ColorInfo,
    /// The base color with more lightness.
    pub lighter: ColorVariation,
    /// The base color with less lightness.
    pub darker: ColorVariation,
    /// The base color with more saturation.
    pub saturated: ColorVariation,
    /// The base color with less saturation.
    pub desaturated: ColorVariation,
}

impl ColorVariations {
    /// Iterate over the four variations, excluding the base color.
    pub fn iter(&self) -> impl Iterator<Item = &ColorVariation> {
        [
            &self.lighter,
            &self.darker,
            &self.saturated,
            &self.desaturated,
        ]
        .into_iter()
    }
}

/// Generate the variations of the given hex color.
/// ```rust
/// let variations = tinct::generate_color_variations("#808080").unwrap();
/// assert_eq!(variations.lighter.color.hex, "#B3B3B3");
/// assert_eq!(variations.darker.color.hex, "#4D4D4D");
/// ```
pub fn generate_color_variations(hex: &str) -> Result<ColorVariations> {
    let base = create_color_info(hex)?;
    let hsl = base.hsl;

    let lighter = ColorInfo::from_hsl(hsl.shift_lightness(VARIATION_STEP));
    let darker = ColorInfo::from_hsl(hsl.shift_lightness(-VARIATION_STEP));
    let saturated = ColorInfo::from_hsl(hsl.shift_saturation(VARIATION_STEP));
    let desaturated = ColorInfo::from_hsl(hsl.shift_saturation(-VARIATION_STEP));

    Ok(ColorVariations {
        base,
        lighter: ColorVariation::new("Lighter", lighter),
        darker: ColorVariation::new("Darker", darker),
        saturated: ColorVariation::new("More Saturated", saturated),
        desaturated: ColorVariation::new("Less Saturated", desaturated),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorError, Hsl};

    #[test]
    fn gray() {
        let variations = generate_color_variations("808080").unwrap();
        assert_eq!(variations.base.hex, "#808080");

        #[rustfmt::skip]
        let expected = [
            ("Lighter",        "#B3B3B3", Hsl::new(0,  0, 70)),
            ("Darker",         "#4D4D4D", Hsl::new(0,  0, 30)),
            ("More Saturated", "#996666", Hsl::new(0, 20, 50)),
            ("Less Saturated", "#808080", Hsl::new(0,  0, 50)),
        ];

        for (variation, (name, hex, hsl)) in variations.iter().zip(expected) {
            assert_eq!(variation.name, name);
            assert_eq!(variation.color.hex, hex, "{name}");
            assert_eq!(variation.color.hsl, hsl, "{name}");
        }
    }

    #[test]
    fn red_clamps_saturation() {
        let variations = generate_color_variations("#f00").unwrap();
        assert_eq!(variations.base.hsl, Hsl::new(0, 100, 50));
        assert_eq!(variations.lighter.color.hex, "#FF6666");
        assert_eq!(variations.darker.color.hex, "#990000");
        assert_eq!(variations.saturated.color, variations.base);
    }

    #[test]
    fn extremes_clamp_lightness() {
        let white = generate_color_variations("#FFFFFF").unwrap();
        assert_eq!(white.lighter.color.hex, "#FFFFFF");

        let black = generate_color_variations("#000000").unwrap();
        assert_eq!(black.darker.color.hex, "#000000");
        assert_eq!(black.desaturated.color.hex, "#000000");
    }

    #[test]
    fn hue_is_kept() {
        let variations = generate_color_variations("#00AAFF").unwrap();
        for variation in variations.iter() {
            assert_eq!(variation.color.hsl.hue, 200, "{}", variation.name);
        }
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(
            generate_color_variations("#12345"),
            Err(ColorError::InvalidHex("#12345".to_string()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape() {
        let variations = generate_color_variations("#808080").unwrap();
        let json = serde_json::to_value(&variations).unwrap();
        assert_eq!(json["base"]["hex"], "#808080");
        assert_eq!(json["lighter"]["name"], "Lighter");
        assert_eq!(json["lighter"]["hex"], "#B3B3B3");
        assert_eq!(json["desaturated"]["hsl"]["l"], 50);
    }
}
