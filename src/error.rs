//! Errors reported by the color operations.

use thiserror::Error;

/// The ways a color operation can fail.
///
/// Every operation that accepts a hex string validates it first, so a
/// malformed string is reported instead of being decoded into garbage.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not 3 or 6 hexadecimal digits with an optional leading
    /// `#`.
    #[error("invalid hex color `{0}`, expected 3 or 6 hexadecimal digits")]
    InvalidHex(String),

    /// A monochromatic palette needs at least two colors to spread its
    /// lightness over.
    #[error("invalid palette size {0}, at least 2 colors are required")]
    InvalidCount(usize),

    /// The keyword does not name a harmony.
    #[error("unknown harmony `{0}`, expected complementary, analogous, triadic or monochromatic")]
    UnknownHarmony(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ColorError::InvalidHex("#12".to_string()).to_string(),
            "invalid hex color `#12`, expected 3 or 6 hexadecimal digits"
        );
        assert_eq!(
            ColorError::InvalidCount(1).to_string(),
            "invalid palette size 1, at least 2 colors are required"
        );
        assert_eq!(
            ColorError::UnknownHarmony("tetradic".to_string()).to_string(),
            "unknown harmony `tetradic`, expected complementary, analogous, triadic or monochromatic"
        );
    }
}
