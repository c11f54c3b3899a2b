//! Color harmonies: sets of colors related by their position on the hue
//! circle, or by sharing hue and saturation.

use std::{fmt, str::FromStr};

use crate::color::{create_color_info, ColorInfo, Component};
use crate::convert::hex_to_hsl;
use crate::error::{ColorError, Result};
use crate::math::step;

/// Number of colors in a monochromatic palette when the caller does not ask
/// for a specific size.
pub const DEFAULT_MONOCHROMATIC_COUNT: usize = 5;

const MONOCHROMATIC_LIGHTNESS_MIN: Component = 20.0;
const MONOCHROMATIC_LIGHTNESS_SPAN: Component = 60.0;

/// The supported harmonies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Harmony {
    /// The base color and the color opposite of it.
    Complementary,
    /// The base color between its two neighbors 30° away.
    Analogous,
    /// Three colors evenly spaced around the hue circle.
    Triadic,
    /// Colors of the base hue and saturation with increasing lightness.
    Monochromatic,
}

impl Harmony {
    /// All harmonies.
    pub const ALL: [Harmony; 4] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::Monochromatic,
    ];

    /// The lowercase keyword naming this harmony.
    pub fn name(&self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Harmony::ALL
            .into_iter()
            .find(|harmony| harmony.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownHarmony(s.to_string()))
    }
}

/// Return the color opposite of the given one on the hue circle, i.e., with
/// the hue turned by 180°.
/// ```rust
/// assert_eq!(tinct::complementary_color("#FF0000").unwrap().hex, "#00FFFF");
/// ```
pub fn complementary_color(hex: &str) -> Result<ColorInfo> {
    let hsl = hex_to_hsl(hex)?;
    Ok(ColorInfo::from_hsl(hsl.rotate(180)))
}

/// Return the colors 30° before the given one, the given one and 30° after
/// it, in that order.
pub fn analogous_colors(hex: &str) -> Result<[ColorInfo; 3]> {
    let base = create_color_info(hex)?;
    let hsl = base.hsl;

    Ok([
        ColorInfo::from_hsl(hsl.rotate(-30)),
        base,
        ColorInfo::from_hsl(hsl.rotate(30)),
    ])
}

/// Return the given color followed by the colors 120° and 240° after it.
pub fn triadic_colors(hex: &str) -> Result<[ColorInfo; 3]> {
    let base = create_color_info(hex)?;
    let hsl = base.hsl;

    Ok([
        base,
        ColorInfo::from_hsl(hsl.rotate(120)),
        ColorInfo::from_hsl(hsl.rotate(240)),
    ])
}

/// Return `count` colors with the hue and saturation of the given color and
/// lightness evenly spread from 20% to 80%, darkest first. Spreading needs
/// at least two colors, smaller counts are an error.
pub fn monochromatic_palette(hex: &str, count: usize) -> Result<Vec<ColorInfo>> {
    if count < 2 {
        return Err(ColorError::InvalidCount(count));
    }

    let hsl = hex_to_hsl(hex)?;
    let steps = (count - 1) as Component;

    Ok((0..count)
        .map(|index| {
            let lightness = step(
                MONOCHROMATIC_LIGHTNESS_MIN,
                MONOCHROMATIC_LIGHTNESS_SPAN,
                steps,
                index as Component,
            );
            ColorInfo::from_hsl(hsl.with_lightness(lightness.round() as u8))
        })
        .collect())
}

/// Generate the colors of the given harmony for the given color. The base
/// color comes first, except for analogous harmonies where it is in the
/// middle. Monochromatic palettes have [`DEFAULT_MONOCHROMATIC_COUNT`]
/// colors.
pub fn generate_harmony(hex: &str, harmony: Harmony) -> Result<Vec<ColorInfo>> {
    match harmony {
        Harmony::Complementary => Ok(vec![create_color_info(hex)?, complementary_color(hex)?]),
        Harmony::Analogous => Ok(analogous_colors(hex)?.to_vec()),
        Harmony::Triadic => Ok(triadic_colors(hex)?.to_vec()),
        Harmony::Monochromatic => monochromatic_palette(hex, DEFAULT_MONOCHROMATIC_COUNT),
    }
}
