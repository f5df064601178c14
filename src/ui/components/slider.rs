// src/ui/components/slider.rs
//! Horizontal value slider

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::components::text::{self, LINE_HEIGHT, Label};
use crate::ui::core::{Action, Drawable, EventResult, Interactive, PointerEvent, WidgetId};
use crate::ui::geometry::{Canvas, Rect, Vec2, abs_diff, map_range};
use crate::ui::styling::{GRAY, LIGHT_GRAY, WHITE};
use crate::ui::surface;

const HANDLE_WIDTH: f32 = 10.0;

/// Slider owning its value in `[min, max]`
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    id: WidgetId,
    label: Label,
    rect: Rect,
    min: f32,
    max: f32,
    value: f32,
    precision: usize,
    dragging: bool,
}

impl Slider {
    pub fn new(id: WidgetId, label: &str, rect: Rect, min: f32, max: f32, value: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };

        Self {
            id,
            label: text::label(label),
            rect,
            min,
            max,
            value: value.clamp(min, max),
            precision: 2,
            dragging: false,
        }
    }

    /// Number of decimals shown next to the label
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn handle_x(&self) -> f32 {
        map_range(
            self.value,
            self.min,
            self.max,
            self.rect.x,
            self.rect.right(),
            true,
        )
    }

    /// Move the value to match a pointer x, reporting a change if it moved.
    fn track(&mut self, x: f32) -> EventResult {
        let value = map_range(x, self.rect.x, self.rect.right(), self.min, self.max, true);

        if abs_diff(value, self.value) > f32::EPSILON {
            self.value = value;
            EventResult::Action(Action::SliderChanged {
                id: self.id,
                value,
            })
        } else {
            EventResult::Handled
        }
    }
}

impl Drawable for Slider {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        _canvas: Canvas,
    ) -> Result<(), D::Error> {
        surface::stroke_rect(display, self.rect, GRAY, 1)?;

        let handle = Rect::new(
            self.handle_x() - HANDLE_WIDTH * 0.5,
            self.rect.y,
            HANDLE_WIDTH,
            self.rect.height,
        );
        surface::fill_rect(display, handle, LIGHT_GRAY)?;

        let mut caption: heapless::String<64> = heapless::String::new();
        // Overflow only truncates the caption
        let _ = write!(
            caption,
            "{}: {:.*}",
            self.label.as_str(),
            self.precision,
            self.value
        );
        let caption_y = self.rect.y + (self.rect.height - LINE_HEIGHT) * 0.5;
        surface::text(
            display,
            &caption,
            Vec2::new(self.rect.x + 4.0, caption_y),
            WHITE,
        )
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Interactive for Slider {
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        let position = event.position();

        match event {
            PointerEvent::Press { .. } if self.rect.contains(position) => {
                self.dragging = true;
                self.track(position.x)
            }
            PointerEvent::Drag { .. } if self.dragging => self.track(position.x),
            PointerEvent::Release { .. } if self.dragging => {
                self.dragging = false;
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
    use crate::testing::CountingTarget;

    fn slider() -> Slider {
        Slider::new(
            WidgetId(1),
            "Mass",
            Rect::new(0.0, 0.0, 100.0, 10.0),
            0.0,
            10.0,
            5.0,
        )
    }

    #[test]
    fn test_press_sets_value_from_position() {
        let mut slider = slider();

        let result = slider.handle_pointer(PointerEvent::press(25, 5, 0));

        assert_eq!(
            result,
            EventResult::Action(Action::SliderChanged {
                id: WidgetId(1),
                value: 2.5
            })
        );
        assert!(slider.is_dragging());
    }

    #[test]
    fn test_drag_clamps_to_range() {
        let mut slider = slider();
        slider.handle_pointer(PointerEvent::press(50, 5, 0));

        slider.handle_pointer(PointerEvent::drag(400, 80, 0));
        assert_eq!(slider.value(), 10.0);

        slider.handle_pointer(PointerEvent::drag(-40, 80, 0));
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_drag_without_press_ignored() {
        let mut slider = slider();

        assert_eq!(
            slider.handle_pointer(PointerEvent::drag(10, 5, 0)),
            EventResult::NotHandled
        );
        assert_eq!(slider.value(), 5.0);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut slider = slider();
        slider.handle_pointer(PointerEvent::press(50, 5, 0));

        assert!(slider.handle_pointer(PointerEvent::release(50, 5, 0)).is_handled());
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        let slider = Slider::new(WidgetId(2), "x", Rect::ZERO, 5.0, -5.0, 20.0);

        assert_eq!(slider.range(), (-5.0, 5.0));
        assert_eq!(slider.value(), 5.0);
    }

    #[test]
    fn test_draw_touches_pixels() {
        let mut target = CountingTarget::new(120, 40);
        let canvas = target.canvas();

        slider().draw(&mut target, canvas).unwrap();

        assert!(target.drawn > 0);
        assert_eq!(target.pixel(0, 5), Some(GRAY));
    }
}
