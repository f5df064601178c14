// src/ui/components/text.rs
//! Label metrics and fixed-capacity label storage
//!
//! Labels render with the 6x10 monospace font, so their bounding boxes follow
//! directly from the character count.

use embedded_graphics::mono_font::ascii::FONT_6X10;

use crate::ui::geometry::Rect;

/// Width of one label character in pixels
pub const CHAR_WIDTH: f32 = FONT_6X10.character_size.width as f32;

/// Height of one label line in pixels
pub const LINE_HEIGHT: f32 = FONT_6X10.character_size.height as f32;

/// Label storage used by widgets and containers
pub type Label = heapless::String<32>;

/// Build a label, truncating at capacity on a character boundary.
pub fn label<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Bounding box of `text` drawn with its top-left corner at `(x, y)`.
///
/// The height is one line even for an empty string so that empty labels
/// still take up a row.
pub fn label_bounds(text: &str, x: f32, y: f32) -> Rect {
    let width = text.chars().count() as f32 * CHAR_WIDTH;
    Rect::new(x, y, width, LINE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_bounds_uses_font_metrics() {
        let bounds = label_bounds("Gravity", 5.0, 7.0);

        assert_eq!(bounds, Rect::new(5.0, 7.0, 42.0, 10.0));
    }

    #[test]
    fn test_empty_label_keeps_line_height() {
        let bounds = label_bounds("", 0.0, 0.0);

        assert_eq!(bounds.width, 0.0);
        assert_eq!(bounds.height, LINE_HEIGHT);
    }

    #[test]
    fn test_label_truncates_at_capacity() {
        let long: heapless::String<4> = label("abcdefgh");
        assert_eq!(long.as_str(), "abcd");
    }
}
