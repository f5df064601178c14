// src/ui/styling/colors.rs
//! Color definitions
//!
//! All colors are RGB565, matching the 16-bit draw targets the toolkit renders
//! to. To convert from 8-bit RGB: R>>3, G>>2, B>>3
//!
//! RGB565 has no alpha channel, so translucent fills are produced by
//! [`blend`]ing a foreground color over the canvas background.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

// ============================================================================
// Base Colors
// ============================================================================

/// Canvas background - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Black
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Slider outline gray (127, 127, 127)
pub const GRAY: Rgb565 = Rgb565::new(127 >> 3, 127 >> 2, 127 >> 3);

/// Slider handle gray (191, 191, 191)
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(191 >> 3, 191 >> 2, 191 >> 3);

/// Panel backdrop tint (222, 222, 222)
pub const PANEL_GRAY: Rgb565 = Rgb565::new(222 >> 3, 222 >> 2, 222 >> 3);

/// Tooltip border red
pub const ALERT_RED: Rgb565 = Rgb565::new(31, 0, 0);

/// Accent for active controls - bright teal-green
pub const ACCENT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

// ============================================================================
// Opacity levels (0-255), matching the translucent layers of the panels
// ============================================================================

/// Container backdrop
pub const ALPHA_BACKDROP: u8 = 19;

/// Manager backdrop
pub const ALPHA_MANAGER_BACKDROP: u8 = 38;

/// Outlines of the manager bounds
pub const ALPHA_OUTLINE: u8 = 77;

/// Tabs
pub const ALPHA_TAB: u8 = 127;

/// Mix `foreground` over `background` with the given opacity.
///
/// `alpha = 0` returns the background, `alpha = 255` the foreground.
pub fn blend(foreground: Rgb565, background: Rgb565, alpha: u8) -> Rgb565 {
    let a = alpha as u16;
    let inv = 255 - a;
    let mix = |fg: u8, bg: u8| ((fg as u16 * a + bg as u16 * inv + 127) / 255) as u8;

    Rgb565::new(
        mix(foreground.r(), background.r()),
        mix(foreground.g(), background.g()),
        mix(foreground.b(), background.b()),
    )
}

/// Translucent variant of `color` over the canvas background
pub fn translucent(color: Rgb565, alpha: u8) -> Rgb565 {
    blend(color, COLOR_BACKGROUND, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(WHITE, BLACK, 255), WHITE);
        assert_eq!(blend(WHITE, BLACK, 0), BLACK);
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = blend(WHITE, BLACK, 128);

        assert_eq!(mid.r(), 16);
        assert_eq!(mid.g(), 32);
        assert_eq!(mid.b(), 16);
    }
}
