//! Foreground/background color pair applied to rendered codes.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Module (foreground) and background colors of a rendered code.
///
/// Defaults to black modules on a white background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Color painted over dark modules
    pub foreground: RgbColor,
    /// Color painted over light modules, the border and the logo backdrop
    pub background: RgbColor,
}

impl ColorPair {
    /// Creates a color pair.
    #[must_use]
    pub const fn new(foreground: RgbColor, background: RgbColor) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Restores black on white.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when the pair is the default black on white.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when modules are dark and the background light.
    ///
    /// Inverted or low contrast pairs render fine but many scanners
    /// refuse them.
    #[must_use]
    pub const fn is_dark_on_light(&self) -> bool {
        self.foreground.is_dark() && !self.background.is_dark()
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(RgbColor::BLACK, RgbColor::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black_on_white() {
        let pair = ColorPair::default();
        assert_eq!(pair.foreground, RgbColor::BLACK);
        assert_eq!(pair.background, RgbColor::WHITE);
        assert!(pair.is_default());
        assert!(pair.is_dark_on_light());
    }

    #[test]
    fn test_reset() {
        let mut pair = ColorPair::new(RgbColor::new(255, 0, 0), RgbColor::new(0, 255, 0));
        assert!(!pair.is_default());

        pair.reset();
        assert!(pair.is_default());
    }

    #[test]
    fn test_inverted_pair_is_not_dark_on_light() {
        let pair = ColorPair::new(RgbColor::WHITE, RgbColor::BLACK);
        assert!(!pair.is_dark_on_light());
    }
}
