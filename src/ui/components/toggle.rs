// src/ui/components/toggle.rs
//! On/off switch

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::components::text::{self, LINE_HEIGHT, Label};
use crate::ui::core::{Action, Drawable, EventResult, Interactive, PointerEvent, WidgetId};
use crate::ui::geometry::{Canvas, Rect, Vec2};
use crate::ui::styling::{ACCENT, GRAY, WHITE};
use crate::ui::surface;

#[derive(Debug, Clone, PartialEq)]
pub struct Toggle {
    id: WidgetId,
    label: Label,
    rect: Rect,
    on: bool,
}

impl Toggle {
    pub fn new(id: WidgetId, label: &str, rect: Rect, on: bool) -> Self {
        Self {
            id,
            label: text::label(label),
            rect,
            on,
        }
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

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Current state as a per-frame report
    pub fn report_state(&self) -> Action {
        Action::ToggleState {
            id: self.id,
            on: self.on,
        }
    }

    /// Square indicator at the left edge of the rect
    fn indicator(&self) -> Rect {
        Rect::new(self.rect.x, self.rect.y, self.rect.height, self.rect.height)
    }
}

impl Drawable for Toggle {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        _canvas: Canvas,
    ) -> Result<(), D::Error> {
        let indicator = self.indicator();

        if self.on {
            surface::fill_rect(display, indicator, ACCENT)?;
        }
        surface::stroke_rect(display, indicator, GRAY, 1)?;

        let label_position = Vec2::new(
            indicator.right() + 4.0,
            self.rect.y + (self.rect.height - LINE_HEIGHT) * 0.5,
        );
        surface::text(display, &self.label, label_position, WHITE)
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Interactive for Toggle {
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        match event {
            PointerEvent::Press { .. } if self.rect.contains(event.position()) => {
                self.on = !self.on;
                EventResult::Action(Action::ToggleChanged {
                    id: self.id,
                    on: self.on,
                })
            }
            _ => EventResult::NotHandled,
        }
    }

    fn set_position(&mut self, position: Vec2) {
        self.rect.set_position(position);
    }
}
