//! Validation, normalization and decoding of hex color strings.
//!
//! Accepted input is 3 or 6 hexadecimal digits in either case, optionally
//! prefixed with a single `#`. The canonical form is `#` followed by 6
//! uppercase digits. Three digit input is expanded by doubling each digit, so
//! `#abc` becomes `#AABBCC`.

use crate::error::{ColorError, Result};
use crate::Rgb;

/// Return `true` if the string is 3 or 6 hexadecimal digits, optionally
/// prefixed with `#`. This is the only check that does not report an error.
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = strip_hash(hex);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Return the canonical form of the given hex color.
/// ```rust
/// assert_eq!(tinct::normalize_hex("#abc").unwrap(), "#AABBCC");
/// assert!(tinct::normalize_hex("#abcd").is_err());
/// ```
pub fn normalize_hex(hex: &str) -> Result<String> {
    let digits = expand(hex)?;
    Ok(format!("#{digits}"))
}

/// Decode the given hex color into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = expand(hex)?;

    let channel = |index: usize| {
        digits
            .get(2 * index..2 * index + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ColorError::InvalidHex(hex.to_string()))
    };

    Ok(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
}

fn strip_hash(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

/// Validate and return the 6 uppercase digits without the leading `#`.
fn expand(hex: &str) -> Result<String> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let digits = strip_hash(hex).to_ascii_uppercase();
    if digits.len() == 3 {
        Ok(digits.chars().flat_map(|c| [c, c]).collect())
    } else {
        Ok(digits)
    }
}
