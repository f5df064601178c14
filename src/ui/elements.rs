// src/ui/elements.rs
//! Concrete leaf-widget enum.
//!
//! Containers need to own heterogeneous child widgets *without* using trait
//! objects. In embedded-graphics, `DrawTarget` is generic, which makes
//! `Drawable` (our trait) **not object-safe**. This enum is the pragmatic
//! alternative: one ordered sequence of tagged widgets, filtered by
//! [`WidgetKind`] wherever a layout pass cares about the kind.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::components::text::{LINE_HEIGHT, label_bounds};
use crate::ui::components::{Button, Slider, TextField, Toggle, Tooltip};
use crate::ui::core::{Drawable, EventResult, Interactive, Key, PointerEvent};
use crate::ui::geometry::{Canvas, Rect, Vec2};

/// Discriminant of a [`LeafWidget`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Slider,
    Button,
    Toggle,
    TextField,
    Tooltip,
}

impl WidgetKind {
    /// Kinds that take part in the vertical stack of a panel. Tooltips float.
    pub fn is_stacked(self) -> bool {
        !matches!(self, WidgetKind::Tooltip)
    }
}

/// A concrete, layout-friendly leaf widget.
#[derive(Debug, Clone, PartialEq)]
pub enum LeafWidget {
    Slider(Slider),
    Button(Button),
    Toggle(Toggle),
    TextField(TextField),
    Tooltip(Tooltip),
}

impl LeafWidget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            LeafWidget::Slider(_) => WidgetKind::Slider,
            LeafWidget::Button(_) => WidgetKind::Button,
            LeafWidget::Toggle(_) => WidgetKind::Toggle,
            LeafWidget::TextField(_) => WidgetKind::TextField,
            LeafWidget::Tooltip(_) => WidgetKind::Tooltip,
        }
    }

    /// Caption used for footprint measurement. Tooltips have none.
    pub fn label(&self) -> &str {
        match self {
            LeafWidget::Slider(s) => s.label(),
            LeafWidget::Button(b) => b.label(),
            LeafWidget::Toggle(t) => t.label(),
            LeafWidget::TextField(t) => t.label(),
            LeafWidget::Tooltip(_) => "",
        }
    }

    /// Bounding box of the caption at the widget's position
    pub fn label_rect(&self) -> Rect {
        let rect = self.rect();
        label_bounds(self.label(), rect.x, rect.y)
    }

    /// Height the caption adds to a panel
    pub fn label_height(&self) -> f32 {
        if self.kind().is_stacked() {
            LINE_HEIGHT
        } else {
            0.0
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            LeafWidget::Slider(s) => s.rect(),
            LeafWidget::Button(b) => b.rect(),
            LeafWidget::Toggle(t) => t.rect(),
            LeafWidget::TextField(t) => t.rect(),
            LeafWidget::Tooltip(t) => t.rect(),
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        match self {
            LeafWidget::Slider(s) => s.set_rect(rect),
            LeafWidget::Button(b) => b.set_rect(rect),
            LeafWidget::Toggle(t) => t.set_rect(rect),
            LeafWidget::TextField(t) => t.set_rect(rect),
            LeafWidget::Tooltip(t) => t.set_rect(rect),
        }
    }

    pub fn as_toggle(&self) -> Option<&Toggle> {
        match self {
            LeafWidget::Toggle(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match self {
            LeafWidget::Slider(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Slider> for LeafWidget {
    fn from(slider: Slider) -> Self {
        LeafWidget::Slider(slider)
    }
}

impl From<Button> for LeafWidget {
    fn from(button: Button) -> Self {
        LeafWidget::Button(button)
    }
}

impl From<Toggle> for LeafWidget {
    fn from(toggle: Toggle) -> Self {
        LeafWidget::Toggle(toggle)
    }
}

impl From<TextField> for LeafWidget {
    fn from(field: TextField) -> Self {
        LeafWidget::TextField(field)
    }
}

impl From<Tooltip> for LeafWidget {
    fn from(tooltip: Tooltip) -> Self {
        LeafWidget::Tooltip(tooltip)
    }
}

impl Drawable for LeafWidget {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        canvas: Canvas,
    ) -> Result<(), D::Error> {
        match self {
            LeafWidget::Slider(s) => s.draw(display, canvas),
            LeafWidget::Button(b) => b.draw(display, canvas),
            LeafWidget::Toggle(t) => t.draw(display, canvas),
            LeafWidget::TextField(t) => t.draw(display, canvas),
            LeafWidget::Tooltip(t) => t.draw(display, canvas),
        }
    }

    fn bounds(&self) -> Rect {
        self.rect()
    }
}

impl Interactive for LeafWidget {
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        match self {
            LeafWidget::Slider(s) => s.handle_pointer(event),
            LeafWidget::Button(b) => b.handle_pointer(event),
            LeafWidget::Toggle(t) => t.handle_pointer(event),
            LeafWidget::TextField(t) => t.handle_pointer(event),
            LeafWidget::Tooltip(t) => t.handle_pointer(event),
        }
    }

    fn handle_key(&mut self, key: Key) -> EventResult {
        match self {
            LeafWidget::TextField(t) => t.handle_key(key),
            _ => EventResult::NotHandled,
        }
    }

    fn set_position(&mut self, position: Vec2) {
        match self {
            LeafWidget::Slider(s) => s.set_position(position),
            LeafWidget::Button(b) => b.set_position(position),
            LeafWidget::Toggle(t) => t.set_position(position),
            LeafWidget::TextField(t) => t.set_position(position),
            LeafWidget::Tooltip(t) => t.set_position(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::WidgetId;

    #[test]
    fn test_kind_and_label() {
        let widget: LeafWidget =
            Toggle::new(WidgetId(1), "Bounce", Rect::new(0.0, 0.0, 50.0, 10.0), false).into();

        assert_eq!(widget.kind(), WidgetKind::Toggle);
        assert_eq!(widget.label(), "Bounce");
        assert_eq!(widget.label_rect().width, 36.0);
    }

    #[test]
    fn test_tooltip_is_not_stacked() {
        let widget: LeafWidget = Tooltip::new("help", 0.0, 0.0).into();

        assert!(!widget.kind().is_stacked());
        assert_eq!(widget.label_height(), 0.0);
    }

    #[test]
    fn test_set_rect_delegates() {
        let mut widget: LeafWidget =
            Button::new(WidgetId(1), "Go", Rect::new(0.0, 0.0, 10.0, 10.0)).into();

        widget.set_rect(Rect::new(5.0, 6.0, 70.0, 12.0));

        assert_eq!(widget.rect(), Rect::new(5.0, 6.0, 70.0, 12.0));
    }

    #[test]
    fn test_keys_reach_text_fields_only() {
        let mut button: LeafWidget =
            Button::new(WidgetId(1), "Go", Rect::new(0.0, 0.0, 10.0, 10.0)).into();

        assert_eq!(button.handle_key(Key('a' as i32)), EventResult::NotHandled);
    }
}
