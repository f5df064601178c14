// src/ui/components/tooltip.rs
//! "?" icon that reveals a message box when pressed

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::components::text::{self, CHAR_WIDTH, LINE_HEIGHT};
use crate::ui::core::{Drawable, EventResult, Interactive, PointerEvent};
use crate::ui::geometry::{Canvas, Rect, Vec2};
use crate::ui::styling::{ALERT_RED, BLACK, WHITE};
use crate::ui::surface;

/// Tooltip message storage
pub type Message = heapless::String<512>;

/// Messages longer than this are shown centered on the canvas
pub const LARGE_MESSAGE_CHARS: usize = 250;

const ICON_RADIUS: f32 = 10.0;
const BOX_WIDTH: f32 = 300.0;
const BOX_HEIGHT: f32 = 150.0;
const BOX_PADDING: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    position: Vec2,
    message: Message,
    visible: bool,
    large: bool,
}

impl Tooltip {
    /// Tooltip whose icon is centered on `(x, y)`
    pub fn new(message: &str, x: f32, y: f32) -> Self {
        let mut tooltip = Self {
            position: Vec2::new(x, y),
            message: Message::new(),
            visible: false,
            large: false,
        };
        tooltip.set_message(message);
        tooltip
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = text::label(message);
        self.large = self.message.chars().count() > LARGE_MESSAGE_CHARS;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_message_visible(&self) -> bool {
        self.visible
    }

    pub fn is_large_message(&self) -> bool {
        self.large
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Hit area of the icon
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x - ICON_RADIUS,
            self.position.y - ICON_RADIUS,
            ICON_RADIUS * 2.0,
            ICON_RADIUS * 2.0,
        )
    }

    /// Recenter the icon inside `rect`
    pub fn set_rect(&mut self, rect: Rect) {
        self.position = rect.center();
    }

    /// Where the message box goes: centered on the canvas for large
    /// messages, on the icon otherwise.
    pub fn message_box(&self, canvas: Canvas) -> Rect {
        let center = if self.large {
            Vec2::new(canvas.width * 0.5, canvas.height * 0.5)
        } else {
            self.position
        };

        Rect::new(
            center.x - BOX_WIDTH * 0.5,
            center.y - BOX_HEIGHT * 0.5,
            BOX_WIDTH,
            BOX_HEIGHT,
        )
    }

    fn draw_message_box<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        canvas: Canvas,
    ) -> Result<(), D::Error> {
        let frame = self.message_box(canvas);

        surface::fill_rect(display, frame, WHITE)?;
        surface::stroke_rect(display, frame, ALERT_RED, 2)?;

        let columns = ((BOX_WIDTH - BOX_PADDING * 2.0) / CHAR_WIDTH) as usize;
        let rows = ((BOX_HEIGHT - BOX_PADDING * 2.0) / LINE_HEIGHT) as usize;

        for (row, line) in wrap(&self.message, columns).take(rows).enumerate() {
            let origin = Vec2::new(
                frame.x + BOX_PADDING,
                frame.y + BOX_PADDING + row as f32 * LINE_HEIGHT,
            );
            surface::text(display, line, origin, BLACK)?;
        }

        if self.large {
            let close = Vec2::new(frame.right() - 15.0, frame.y + 5.0);
            surface::text(display, "X", close, ALERT_RED)?;
        }

        Ok(())
    }
}

/// Split `message` into chunks of at most `columns` characters.
fn wrap(message: &str, columns: usize) -> impl Iterator<Item = &str> {
    let columns = columns.max(1);
    let mut rest = message;

    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let split = rest
            .char_indices()
            .nth(columns)
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        let (line, tail) = rest.split_at(split);
        rest = tail;
        Some(line)
    })
}

impl Drawable for Tooltip {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        canvas: Canvas,
    ) -> Result<(), D::Error> {
        surface::fill_circle(display, self.position, ICON_RADIUS as u32, WHITE)?;
        surface::text_centered(display, "?", self.rect(), BLACK)?;

        if self.visible {
            self.draw_message_box(display, canvas)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rect {
        self.rect()
    }
}

impl Interactive for Tooltip {
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        match event {
            PointerEvent::Press { .. } if self.rect().contains(event.position()) => {
                self.toggle_visibility();
                EventResult::Handled
            }
            // Pressing anywhere else dismisses a small message
            PointerEvent::Press { .. } if self.visible && !self.large => {
                self.visible = false;
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}
