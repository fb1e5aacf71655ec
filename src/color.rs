//! Pixel colour value
//!
//! Channels are conceptually 0..=255 but are stored as `i32` and never
//! clamped here; layers are free to push values outside that range.

use serde::{Deserialize, Serialize};

/// An RGB colour with integer channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Color {
    /// Maximum conceptual channel value
    pub const MAX_CHANNEL: i32 = 255;

    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Create a colour from its three channels
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise inversion: `255 - channel`, wrapping on `i32` overflow
    pub fn inverted(self) -> Self {
        self.map(|c| Self::MAX_CHANNEL.wrapping_sub(c))
    }

    /// Apply `f` to every channel
    pub fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl From<(i32, i32, i32)> for Color {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for (i32, i32, i32) {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted() {
        assert_eq!(Color::WHITE.inverted(), Color::BLACK);
        assert_eq!(Color::new(10, 20, 30).inverted(), Color::new(245, 235, 225));
    }

    #[test]
    fn test_inverted_is_not_clamped() {
        assert_eq!(Color::new(300, -5, 0).inverted(), Color::new(-45, 260, 255));
    }

    #[test]
    fn test_inverted_extreme_channels_do_not_panic() {
        let color = Color::new(i32::MIN, i32::MAX, 0).inverted();
        assert_eq!(color.r, 255i32.wrapping_sub(i32::MIN));
        assert_eq!(color.g, 255 - i32::MAX);
        assert_eq!(color.b, 255);
    }

    #[test]
    fn test_tuple_conversion() {
        let color: Color = (1, 2, 3).into();
        let back: (i32, i32, i32) = color.into();
        assert_eq!(back, (1, 2, 3));
    }
}
