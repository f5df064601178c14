// src/ui/components/text_field.rs
//! Single-line text input, optionally restricted to numbers

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::debug;

use crate::ui::components::text::{self, LINE_HEIGHT, Label};
use crate::ui::core::{Action, Drawable, EventResult, Interactive, Key, PointerEvent, WidgetId};
use crate::ui::geometry::{Canvas, Rect, Vec2};
use crate::ui::styling::{ACCENT, GRAY, WHITE};
use crate::ui::surface;

/// Edit buffer of a text field
pub type TextBuffer = heapless::String<32>;

#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    id: WidgetId,
    label: Label,
    rect: Rect,
    buffer: TextBuffer,
    numeric: bool,
    precision: usize,
    editing: bool,
}

impl TextField {
    /// Free-form text field
    pub fn new(id: WidgetId, label: &str, rect: Rect) -> Self {
        Self {
            id,
            label: text::label(label),
            rect,
            buffer: TextBuffer::new(),
            numeric: false,
            precision: 2,
            editing: false,
        }
    }

    /// Numeric field showing `value` with `precision` decimals
    pub fn numeric(id: WidgetId, label: &str, rect: Rect, value: f32, precision: usize) -> Self {
        let mut field = Self::new(id, label, rect);
        field.numeric = true;
        field.precision = precision;
        field.set_value(value);
        field
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

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Replace the buffer with a formatted number
    pub fn set_value(&mut self, value: f32) {
        self.buffer.clear();
        // Overflow only truncates the shown digits
        let _ = write!(self.buffer, "{:.*}", self.precision, value);
    }

    /// Parsed numeric value of the buffer, if it holds one
    pub fn value(&self) -> Option<f32> {
        self.buffer.trim().parse::<f32>().ok()
    }

    fn accepts(&self, ch: char) -> bool {
        !self.numeric || ch.is_ascii_digit() || ch == '.' || ch == '-'
    }

    fn commit(&mut self) -> EventResult {
        self.editing = false;

        match (self.numeric, self.value()) {
            (true, Some(value)) => {
                debug!(" Text field {:?} committed {}", self.id, value);
                EventResult::Action(Action::ValueCommitted { id: self.id, value })
            }
            _ => EventResult::Action(Action::TextCommitted(self.id)),
        }
    }
}

impl Drawable for TextField {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        _canvas: Canvas,
    ) -> Result<(), D::Error> {
        let outline = if self.editing { ACCENT } else { GRAY };
        surface::stroke_rect(display, self.rect, outline, 1)?;

        // Label sits just above the box
        surface::text(
            display,
            &self.label,
            Vec2::new(self.rect.x, self.rect.y - LINE_HEIGHT - 2.0),
            WHITE,
        )?;

        let text_y = self.rect.y + (self.rect.height - LINE_HEIGHT) * 0.5;
        surface::text(
            display,
            &self.buffer,
            Vec2::new(self.rect.x + 4.0, text_y),
            WHITE,
        )
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Interactive for TextField {
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        match event {
            PointerEvent::Press { .. } => {
                let inside = self.rect.contains(event.position());
                if inside {
                    self.editing = true;
                    EventResult::Handled
                } else if self.editing {
                    self.editing = false;
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            _ => EventResult::NotHandled,
        }
    }

    fn handle_key(&mut self, key: Key) -> EventResult {
        if !self.editing {
            return EventResult::NotHandled;
        }

        match key {
            Key::RETURN => self.commit(),
            Key::BACKSPACE | Key::DELETE => {
                self.buffer.pop();
                EventResult::Handled
            }
            _ => match key.printable() {
                Some(ch) if self.accepts(ch) => {
                    // A full buffer drops further input
                    let _ = self.buffer.push(ch);
                    EventResult::Handled
                }
                _ => EventResult::NotHandled,
            },
        }
    }

    fn set_position(&mut self, position: Vec2) {
        self.rect.set_position(position);
    }
}
