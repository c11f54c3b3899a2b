//! tinct converts colors between hex, RGB and HSL notation and derives
//! variations, harmonies and WCAG contrast metrics from them.
//!
//! Every operation takes a hex string with 3 or 6 digits and an optional
//! leading `#`. Malformed input is reported as a [`ColorError`] rather than
//! decoded into an arbitrary color.
//!
//! ```rust
//! let info = tinct::create_color_info("#d2691e").unwrap();
//! assert_eq!(info.hsl, tinct::Hsl::new(25, 75, 47));
//!
//! let complement = tinct::complementary_color(&info.hex).unwrap();
//! assert_eq!(complement.hsl.hue, 205);
//! ```

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
mod error;
mod harmony;
mod hex;
mod hsl;
mod math;
mod rgb;
mod variation;


pub use color::{create_color_info, ColorInfo, Component, Components};
pub use contrast::{conformance, contrast_ratio, relative_luminance, Conformance};
pub use convert::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{ColorError, Result};
pub use harmony::{
    analogous_colors, complementary_color, generate_harmony, monochromatic_palette,
    triadic_colors, Harmony, DEFAULT_MONOCHROMATIC_COUNT,
};
pub use hex::{hex_to_rgb, is_valid_hex, normalize_hex};
pub use hsl::{Hsl, FULL_TURN};
pub use rgb::Rgb;
pub use variation::{generate_color_variations, ColorVariation, ColorVariations, VARIATION_STEP};
