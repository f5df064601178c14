// src/ui/core.rs
//! Core UI traits and types for the tableau UI system

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::geometry::{Canvas, Rect, Vec2};

/// Mouse button that produced a pointer event
///
/// Hosts forward raw integer button indices; `0` is the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(i32),
}

impl MouseButton {
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }
}

/// Pointer events forwarded by the host application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button went down at a point
    Press { x: i32, y: i32, button: MouseButton },
    /// Pointer moved while a button is held
    Drag { x: i32, y: i32, button: MouseButton },
    /// Button went up at a point
    Release { x: i32, y: i32, button: MouseButton },
}

impl PointerEvent {
    pub fn press(x: i32, y: i32, button: i32) -> Self {
        PointerEvent::Press {
            x,
            y,
            button: MouseButton::from_index(button),
        }
    }

    pub fn drag(x: i32, y: i32, button: i32) -> Self {
        PointerEvent::Drag {
            x,
            y,
            button: MouseButton::from_index(button),
        }
    }

    pub fn release(x: i32, y: i32, button: i32) -> Self {
        PointerEvent::Release {
            x,
            y,
            button: MouseButton::from_index(button),
        }
    }

    /// Event position in canvas coordinates
    pub fn position(&self) -> Vec2 {
        let (x, y) = match *self {
            PointerEvent::Press { x, y, .. }
            | PointerEvent::Drag { x, y, .. }
            | PointerEvent::Release { x, y, .. } => (x, y),
        };
        Vec2::new(x as f32, y as f32)
    }

    pub fn button(&self) -> MouseButton {
        match *self {
            PointerEvent::Press { button, .. }
            | PointerEvent::Drag { button, .. }
            | PointerEvent::Release { button, .. } => button,
        }
    }
}

/// Raw key code of a released key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key(pub i32);

impl Key {
    pub const BACKSPACE: Key = Key(8);
    pub const RETURN: Key = Key(13);
    pub const DELETE: Key = Key(127);

    /// The printable ASCII character for this key, if it has one.
    pub fn printable(&self) -> Option<char> {
        match self.0 {
            32..=126 => char::from_u32(self.0 as u32),
            _ => None,
        }
    }
}

/// Caller-assigned identifier carried by leaf widgets in their actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u16);

/// Result from handling an input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

impl EventResult {
    pub fn action(self) -> Option<Action> {
        match self {
            EventResult::Action(action) => Some(action),
            _ => None,
        }
    }

    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::NotHandled)
    }
}

/// Effects produced by input handling, consumed by the owner of the widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A button was pressed
    ButtonPressed(WidgetId),
    /// A toggle flipped to a new state
    ToggleChanged { id: WidgetId, on: bool },
    /// Per-frame report of a toggle's current state
    ToggleState { id: WidgetId, on: bool },
    /// A slider moved to a new value
    SliderChanged { id: WidgetId, value: f32 },
    /// A numeric text field committed a parsed value
    ValueCommitted { id: WidgetId, value: f32 },
    /// A text field finished editing without a numeric value
    TextCommitted(WidgetId),
    /// A grid selection was confirmed with the given granularity
    GranularitySubmitted { granularity: u32 },
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element onto the display.
    ///
    /// `canvas` is the size of the whole drawing surface; elements that anchor
    /// themselves relative to the screen read it from here.
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        canvas: Canvas,
    ) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rect;
}

/// Trait for UI elements that respond to input events
pub trait Interactive {
    /// Handle a pointer event, returns result indicating if handled and any action
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult;

    /// Handle a key release. Most elements ignore keys.
    fn handle_key(&mut self, _key: Key) -> EventResult {
        EventResult::NotHandled
    }

    /// Move the element's top-left corner, keeping its size
    fn set_position(&mut self, position: Vec2);
}

/// Combined trait for interactive drawable elements
pub trait Widget: Drawable + Interactive {}

/// Implement Widget for any type that implements both Drawable and Interactive
impl<T: Drawable + Interactive> Widget for T {}
