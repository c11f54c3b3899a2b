//! Relative luminance and contrast ratio as defined by WCAG 2.
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

use bitflags::bitflags;

use crate::color::{Component, Components};
use crate::error::Result;
use crate::hex::hex_to_rgb;
use crate::math::weighted_sum;
use crate::Rgb;

/// The weights of the linear red, green and blue channels in the luminance.
const LUMINANCE_WEIGHTS: &[Component; 3] = &[0.2126, 0.7152, 0.0722];

/// Gamma encoded channels up to this value are decoded linearly. This is the
/// threshold WCAG 2 uses, not the 0.04045 of the sRGB standard.
const LINEAR_THRESHOLD: Component = 0.03928;

/// The flare added to both luminances before dividing them.
const FLARE: Component = 0.05;

fn to_linear_light(value: Component) -> Component {
    if value <= LINEAR_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

impl Rgb {
    /// Return the relative luminance of the color, from 0 for black to 1 for
    /// white.
    pub fn relative_luminance(&self) -> Component {
        let Components(red, green, blue) = self.to_components().map(to_linear_light);
        weighted_sum(LUMINANCE_WEIGHTS, red, green, blue)
    }

    /// Return the contrast ratio between this color and `other`, from 1 for
    /// no contrast to 21 for black against white. The order of the colors
    /// does not matter.
    pub fn contrast_ratio(&self, other: &Rgb) -> Component {
        ratio(self.relative_luminance(), other.relative_luminance())
    }
}

fn ratio(a: Component, b: Component) -> Component {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + FLARE) / (darker + FLARE)
}

/// Return the relative luminance of the given hex color.
pub fn relative_luminance(hex: &str) -> Result<Component> {
    Ok(hex_to_rgb(hex)?.relative_luminance())
}

/// Return the contrast ratio between the two given hex colors.
/// ```rust
/// let ratio = tinct::contrast_ratio("#000000", "#FFFFFF").unwrap();
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: &str, b: &str) -> Result<Component> {
    Ok(hex_to_rgb(a)?.contrast_ratio(&hex_to_rgb(b)?))
}

bitflags! {
    /// The WCAG 2 success criteria met by a contrast ratio.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Conformance : u8 {
        /// Level AA for large text, a ratio of at least 3.
        const AA_LARGE = 1 << 0;
        /// Level AA for normal text, a ratio of at least 4.5.
        const AA = 1 << 1;
        /// Level AAA for large text, a ratio of at least 4.5.
        const AAA_LARGE = 1 << 2;
        /// Level AAA for normal text, a ratio of at least 7.
        const AAA = 1 << 3;
    }
}

impl Conformance {
    /// Return the criteria met by the given contrast ratio.
    pub fn from_ratio(ratio: Component) -> Self {
        let mut conformance = Conformance::empty();

        if ratio >= 3.0 {
            conformance |= Conformance::AA_LARGE;
        }
        if ratio >= 4.5 {
            conformance |= Conformance::AA | Conformance::AAA_LARGE;
        }
        if ratio >= 7.0 {
            conformance |= Conformance::AAA;
        }

        conformance
    }
}

/// Return the criteria met by text in one of the two given hex colors on a
/// background of the other.
pub fn conformance(a: &str, b: &str) -> Result<Conformance> {
    Ok(Conformance::from_ratio(contrast_ratio(a, b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, ColorError};

    #[test]
    fn luminance() {
        #[rustfmt::skip]
        const TESTS: &[(&str, Component)] = &[
            ("#000000", 0.0),
            ("#FFFFFF", 1.0),
            ("#FF0000", 0.2126),
            ("#00FF00", 0.7152),
            ("#0000FF", 0.0722),
            ("#808080", 0.215_860_500),
            ("#0A0A0A", 0.003_035_270),
        ];

        for &(hex, expected) in TESTS {
            assert_component_eq!(relative_luminance(hex).unwrap(), expected, 1.0e-6);
        }
    }

    #[test]
    fn linear_threshold() {
        // 10 / 255 is just below the threshold, 11 / 255 just above it.
        let below: Component = 10.0 / 255.0;
        let above: Component = 11.0 / 255.0;
        assert_component_eq!(to_linear_light(below), below / 12.92);
        assert_component_eq!(to_linear_light(above), ((above + 0.055) / 1.055).powf(2.4));
    }

    #[test]
    fn ratios() {
        assert_component_eq!(contrast_ratio("#000000", "#FFFFFF").unwrap(), 21.0);
        assert_component_eq!(contrast_ratio("#FFFFFF", "#000000").unwrap(), 21.0);
        assert_component_eq!(contrast_ratio("#abc", "#abc").unwrap(), 1.0);
        assert_component_eq!(contrast_ratio("#FF0000", "#FFFFFF").unwrap(), 3.998, 1.0e-3);
        assert_component_eq!(contrast_ratio("#0000FF", "#FFFFFF").unwrap(), 8.592, 1.0e-3);

        for (a, b) in [("#D2691E", "#00AAFF"), ("#123456", "#FEDCBA"), ("#f00", "#0f0")] {
            let forward = contrast_ratio(a, b).unwrap();
            assert_eq!(forward, contrast_ratio(b, a).unwrap(), "{a} and {b}");
            assert!(forward >= 1.0, "{a} and {b}");
        }

        assert_eq!(
            contrast_ratio("#000000", "#FFFFF"),
            Err(ColorError::InvalidHex("#FFFFF".to_string()))
        );
    }

    #[test]
    fn conformance_levels() {
        assert_eq!(Conformance::from_ratio(1.0), Conformance::empty());
        assert_eq!(Conformance::from_ratio(3.0), Conformance::AA_LARGE);
        assert_eq!(
            Conformance::from_ratio(4.5),
            Conformance::AA_LARGE | Conformance::AA | Conformance::AAA_LARGE
        );
        assert_eq!(Conformance::from_ratio(21.0), Conformance::all());

        assert_eq!(conformance("#000", "#fff").unwrap(), Conformance::all());
        assert_eq!(conformance("#FF0000", "#FFFFFF").unwrap(), Conformance::AA_LARGE);
    }
}
