// src/ui/components/button.rs
//! Push button reporting presses as actions

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::components::text::{self, Label};
use crate::ui::core::{Action, Drawable, EventResult, Interactive, PointerEvent, WidgetId};
use crate::ui::geometry::{Canvas, Rect, Vec2};
use crate::ui::styling::{ACCENT, BLACK, WHITE};
use crate::ui::surface;

/// Button state
#[derive(Debug, Clone, Copy, PartialEq)]
enum ButtonState {
    Normal,
    Pressed,
}

/// Button component with a label
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    id: WidgetId,
    rect: Rect,
    label: Label,
    state: ButtonState,
    border_radius: u32,
}

impl Button {
    pub fn new(id: WidgetId, label: &str, rect: Rect) -> Self {
        Self {
            id,
            rect,
            label: text::label(label),
            state: ButtonState::Normal,
            border_radius: 4,
        }
    }

    pub fn with_border_radius(mut self, radius: u32) -> Self {
        self.border_radius = radius;
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

    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        _canvas: Canvas,
    ) -> Result<(), D::Error> {
        let (background, foreground) = match self.state {
            ButtonState::Normal => (ACCENT, WHITE),
            // Darken the background for pressed state
            ButtonState::Pressed => (
                Rgb565::new(
                    ACCENT.r().saturating_sub(4),
                    ACCENT.g().saturating_sub(8),
                    ACCENT.b().saturating_sub(4),
                ),
                BLACK,
            ),
        };

        surface::fill_rounded_rect(display, self.rect, self.border_radius, background)?;
        surface::text_centered(display, &self.label, self.rect, foreground)
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Interactive for Button {
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        let inside = self.rect.contains(event.position());

        match event {
            PointerEvent::Press { .. } if inside => {
                self.state = ButtonState::Pressed;

                // Trigger action immediately on press
                EventResult::Action(Action::ButtonPressed(self.id))
            }
            PointerEvent::Drag { .. } if self.state == ButtonState::Pressed && !inside => {
                self.state = ButtonState::Normal;
                EventResult::Handled
            }
            PointerEvent::Release { .. } if self.state == ButtonState::Pressed => {
                self.state = ButtonState::Normal;
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn set_position(&mut self, position: Vec2) {
        self.rect.set_position(position);
    }
}
