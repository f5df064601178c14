// src/ui/geometry.rs
//! Floating-point geometry shared by the layout, routing and grid code.
//!
//! Layout math happens in `f32` so that fractional cell sizes and scale
//! factors stay exact until the very last step, where [`Rect::to_rectangle`]
//! snaps the result onto the integer pixel grid used by embedded-graphics.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A 2D point or size in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Axis-aligned rectangle `(x, y, width, height)`
///
/// Unlike [`Rectangle`], containment is tested on the closed interval on both
/// axes: a point lying exactly on the right or bottom edge is inside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Closed-interval containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Move the top-left corner, keeping the size.
    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.set_position(position);
        self
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Snap onto the integer pixel grid. Negative sizes collapse to zero.
    pub fn to_rectangle(&self) -> Rectangle {
        let width = if self.width > 0.0 { self.width as u32 } else { 0 };
        let height = if self.height > 0.0 { self.height as u32 } else { 0 };

        Rectangle::new(self.position().to_point(), Size::new(width, height))
    }
}

/// One of the four canvas quadrants, split at half width and half height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Size of the surface that layout and drawing happen on.
///
/// Passed explicitly into every layout and draw call so that layout is a
/// function of widget state and canvas size only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Read the canvas size off a draw target.
    pub fn of<D: Dimensions>(target: &D) -> Self {
        let size = target.bounding_box().size;
        Self::new(size.width as f32, size.height as f32)
    }

    /// Which quadrant a point falls in. Points on the split lines belong to
    /// the right/bottom half.
    pub fn quadrant(&self, point: Vec2) -> Quadrant {
        let left = point.x < self.width * 0.5;
        let top = point.y < self.height * 0.5;

        match (left, top) {
            (true, true) => Quadrant::TopLeft,
            (false, true) => Quadrant::TopRight,
            (true, false) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }
}

/// Absolute difference without relying on float intrinsics.
pub fn abs_diff(a: f32, b: f32) -> f32 {
    if a > b { a - b } else { b - a }
}

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// A degenerate input range maps everything onto `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32, clamp: bool) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }

    let mapped = out_min + (value - in_min) / span * (out_max - out_min);

    if clamp {
        let (lo, hi) = if out_min <= out_max {
            (out_min, out_max)
        } else {
            (out_max, out_min)
        };
        mapped.max(lo).min(hi)
    } else {
        mapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_closed_interval() {
        let rect = Rect::new(10.0, 10.0, 20.0, 5.0);

        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(30.0, 15.0)));
        assert!(!rect.contains(Vec2::new(30.1, 15.0)));
        assert!(!rect.contains(Vec2::new(9.9, 12.0)));
    }

    #[test]
    fn test_zero_size_rect_contains_its_corner() {
        let rect = Rect::new(100.0, 100.0, 0.0, 0.0);
        assert!(rect.contains(Vec2::new(100.0, 100.0)));
        assert!(rect.is_empty());
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 20.0, 5.0);

        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
    }

    #[test]
    fn test_to_rectangle_clamps_negative_size() {
        let rect = Rect::new(3.7, 4.2, -5.0, 8.9).to_rectangle();

        assert_eq!(rect.top_left, Point::new(3, 4));
        assert_eq!(rect.size, Size::new(0, 8));
    }

    #[test]
    fn test_quadrants() {
        let canvas = Canvas::new(200.0, 100.0);

        assert_eq!(canvas.quadrant(Vec2::new(10.0, 10.0)), Quadrant::TopLeft);
        assert_eq!(canvas.quadrant(Vec2::new(100.0, 10.0)), Quadrant::TopRight);
        assert_eq!(canvas.quadrant(Vec2::new(10.0, 50.0)), Quadrant::BottomLeft);
        assert_eq!(canvas.quadrant(Vec2::new(150.0, 90.0)), Quadrant::BottomRight);
    }

    #[test]
    fn test_map_range_clamps() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0, true), 50.0);
        assert_eq!(map_range(20.0, 0.0, 10.0, 0.0, 100.0, true), 100.0);
        assert_eq!(map_range(-3.0, 0.0, 10.0, 0.0, 100.0, true), 0.0);
        assert_eq!(map_range(4.0, 2.0, 2.0, 7.0, 9.0, true), 7.0);
    }
}
