// src/ui/components/tab.rs
//! Collapsed header control of a container or manager

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::core::{Drawable, EventResult, Interactive, PointerEvent};
use crate::ui::geometry::{Canvas, Rect, Vec2};
use crate::ui::styling::{ALPHA_TAB, WHITE, translucent};
use crate::ui::surface;

/// Clickable tab. The owner decides what a hit means.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    rect: Rect,
    pressed: bool,
}

impl Tab {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            pressed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Drawable for Tab {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        _canvas: Canvas,
    ) -> Result<(), D::Error> {
        let fill = if self.pressed {
            WHITE
        } else {
            translucent(WHITE, ALPHA_TAB)
        };
        surface::fill_rounded_rect(display, self.rect, 3, fill)
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Interactive for Tab {
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        match event {
            PointerEvent::Press { .. } if self.rect.contains(event.position()) => {
                self.pressed = true;
                EventResult::Handled
            }
            PointerEvent::Release { .. } if self.pressed => {
                self.pressed = false;
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn set_position(&mut self, position: Vec2) {
        self.rect.set_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_inside_is_handled() {
        let mut tab = Tab::new(Rect::new(10.0, 10.0, 20.0, 15.0));

        assert!(tab.handle_pointer(PointerEvent::press(15, 20, 0)).is_handled());
        assert!(tab.is_pressed());
        assert!(tab.handle_pointer(PointerEvent::release(15, 20, 0)).is_handled());
        assert!(!tab.is_pressed());
    }

    #[test]
    fn test_press_outside_ignored() {
        let mut tab = Tab::new(Rect::new(10.0, 10.0, 20.0, 15.0));

        assert_eq!(
            tab.handle_pointer(PointerEvent::press(0, 0, 0)),
            EventResult::NotHandled
        );
    }

    #[test]
    fn test_edges_count_as_inside() {
        let mut tab = Tab::new(Rect::new(10.0, 10.0, 20.0, 15.0));

        assert!(tab.handle_pointer(PointerEvent::press(30, 25, 0)).is_handled());
    }
}
