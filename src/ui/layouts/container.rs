// src/ui/layouts/container.rs
//! Collapsible container of leaf widgets
//!
//! A container is drawn as a label plus a tab. Pressing the tab expands a
//! panel next to it, placed in whichever direction keeps it on the canvas, and
//! the container's widgets are stacked vertically inside that panel.
//!
//! Widgets stack in a fixed kind order, not insertion order:
//! sliders, buttons, toggles, text fields. Tooltips float where their owner
//! put them and never take part in layout.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, trace};

use crate::config::{ConfigResult, LayoutConfig};
use crate::ui::components::text::{self, Label, label_bounds};
use crate::ui::components::{Button, Slider, Tab, TextField, Toggle, Tooltip};
use crate::ui::core::{Action, Drawable, Interactive, Key, PointerEvent};
use crate::ui::elements::{LeafWidget, WidgetKind};
use crate::ui::geometry::{Canvas, Quadrant, Rect, Vec2};
use crate::ui::styling::{ALPHA_BACKDROP, WHITE, translucent};
use crate::ui::surface;

/// Order in which `layout_elements` stacks widget kinds
const STACK_ORDER: [WidgetKind; 4] = [
    WidgetKind::Slider,
    WidgetKind::Button,
    WidgetKind::Toggle,
    WidgetKind::TextField,
];

/// Order in which `draw` paints widget kinds
const DRAW_ORDER: [WidgetKind; 5] = [
    WidgetKind::Slider,
    WidgetKind::TextField,
    WidgetKind::Button,
    WidgetKind::Toggle,
    WidgetKind::Tooltip,
];

/// Container behaviour class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerKind {
    #[default]
    Regular,
    /// Laid out like `Regular`; kept so hosts can tag two-row panels
    DoubleRow,
    /// Opening a focus container closes every other container in its manager
    Focus,
}

/// Collapsible panel owning an ordered sequence of leaf widgets
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    label: Label,
    label_rect: Rect,
    tab: Tab,
    panel: Rect,
    backdrop: Rect,
    opened: bool,
    kind: ContainerKind,
    elements: Vec<LeafWidget>,
    config: LayoutConfig,
}

impl Container {
    /// Container whose label starts at `(x, y)` with a `w`×`h` tab after it.
    pub fn new(label: &str, x: f32, y: f32, w: f32, h: f32, opened: bool) -> Self {
        Self::build(label, x, y, w, h, opened, LayoutConfig::default())
    }

    /// Same as [`Container::new`] with custom spacing.
    pub fn try_with_config(
        label: &str,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        opened: bool,
        config: LayoutConfig,
    ) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(label, x, y, w, h, opened, config))
    }

    fn build(
        label: &str,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        opened: bool,
        config: LayoutConfig,
    ) -> Self {
        let label: Label = text::label(label);
        let label_rect = label_bounds(&label, x, y + h * 0.3125);
        let tab_rect = Rect::new(label_rect.right() + config.label_gap, y - h * 0.5 + 2.0, w, h);

        Self {
            label,
            label_rect,
            tab: Tab::new(tab_rect),
            panel: Rect::new(tab_rect.x, tab_rect.y, 0.0, 0.0),
            backdrop: Rect::ZERO,
            opened,
            kind: ContainerKind::Regular,
            elements: Vec::new(),
            config,
        }
    }

    pub fn with_kind(mut self, kind: ContainerKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_rect(&self) -> Rect {
        self.label_rect
    }

    pub fn tab_rect(&self) -> Rect {
        self.tab.rect()
    }

    /// Panel rectangle from the last `set_position` or `arrange`
    pub fn panel(&self) -> Rect {
        self.panel
    }

    /// Backdrop rectangle from the last `arrange`
    pub fn backdrop(&self) -> Rect {
        self.backdrop
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn set_opened(&mut self, opened: bool) {
        if self.opened != opened {
            debug!(
                " Container '{}' {}",
                self.label,
                if opened { "opened" } else { "closed" }
            );
            self.opened = opened;
        }
    }

    pub fn elements(&self) -> &[LeafWidget] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [LeafWidget] {
        &mut self.elements
    }

    pub fn add_element(&mut self, widget: impl Into<LeafWidget>) {
        self.elements.push(widget.into());
    }

    pub fn add_slider(&mut self, slider: Slider) {
        self.add_element(slider);
    }

    pub fn add_button(&mut self, button: Button) {
        self.add_element(button);
    }

    pub fn add_toggle(&mut self, toggle: Toggle) {
        self.add_element(toggle);
    }

    pub fn add_text_field(&mut self, field: TextField) {
        self.add_element(field);
    }

    pub fn add_tooltip(&mut self, tooltip: Tooltip) {
        self.add_element(tooltip);
    }

    /// Builder form of [`Container::add_element`]
    pub fn with_element(mut self, widget: impl Into<LeafWidget>) -> Self {
        self.add_element(widget);
        self
    }

    /// Drop every owned widget.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Hand every owned widget back to the caller, leaving the container empty.
    pub fn detach_all(&mut self) -> Vec<LeafWidget> {
        core::mem::take(&mut self.elements)
    }

    /// Number of widgets that take part in the vertical stack
    pub fn stacked_count(&self) -> usize {
        self.stacked().count()
    }

    fn stacked(&self) -> impl Iterator<Item = &LeafWidget> {
        self.elements.iter().filter(|w| w.kind().is_stacked())
    }

    fn has_kind(&self, kind: WidgetKind) -> bool {
        self.elements.iter().any(|w| w.kind() == kind)
    }

    /// Space the container needs in its current state.
    ///
    /// Closed: the label's box. Open: the widest widget or caption by the sum
    /// of caption heights, but never shorter than two tab heights per widget.
    pub fn footprint(&self) -> Vec2 {
        if !self.opened {
            return self.label_rect.size();
        }

        let count = self.stacked_count();
        if count == 0 {
            return Vec2::ZERO;
        }

        let (width, height) = self.stacked().fold((0.0f32, 0.0f32), |(width, height), widget| {
            let widest = widget.label_rect().width.max(widget.rect().width);
            (width.max(widest), height + widget.label_height())
        });

        let floor = self.tab.rect().height * 2.0 * count as f32;
        Vec2::new(width, height.max(floor))
    }

    /// Stack widgets from the panel's top-left, each stretched to the panel
    /// width. Returns the total vertical advance.
    pub fn layout_elements(&mut self) -> f32 {
        let origin = self.panel.position();
        let width = self.panel.width;
        let gap = self.config.text_field_gap;
        let mut current_y = origin.y;

        for kind in STACK_ORDER {
            for widget in self.elements.iter_mut().filter(|w| w.kind() == kind) {
                let height = widget.rect().height;
                widget.set_rect(Rect::new(origin.x, current_y, width, height));
                trace!(" Placed {:?} at y={}", kind, current_y);

                current_y += height;
                if kind == WidgetKind::TextField {
                    current_y += gap;
                }
            }
        }

        current_y - origin.y
    }

    /// Move the container so its label starts at `position`.
    pub fn set_position(&mut self, position: Vec2) {
        let tab = self.tab.rect();

        self.label_rect = label_bounds(&self.label, position.x, position.y + tab.height * 0.375);
        self.tab.set_rect(Rect::new(
            self.label_rect.right() + self.config.label_gap,
            position.y - tab.height * 0.5 + 2.0,
            tab.width,
            tab.height,
        ));

        self.panel = Rect::from_position_size(position, self.footprint());
        self.layout_elements();
    }

    /// Place the open panel next to the tab and position its widgets.
    ///
    /// The panel expands away from the canvas corner the tab sits in.
    pub fn arrange(&mut self, canvas: Canvas) {
        if !self.opened {
            return;
        }

        let count = self.stacked_count();
        if count == 0 {
            self.backdrop = Rect::ZERO;
            return;
        }

        let config = self.config;
        let footprint = self.footprint();
        let tab = self.tab.rect();
        let mut width = footprint.x;

        let (x, y) = match canvas.quadrant(tab.position()) {
            Quadrant::TopLeft => (
                tab.x + tab.width + config.panel_tab_offset,
                tab.y + tab.height * 0.5,
            ),
            Quadrant::TopRight => (tab.x - footprint.x - tab.width, tab.y + tab.height * 2.0),
            Quadrant::BottomLeft => (
                tab.x + tab.width + config.panel_tab_offset,
                tab.y - footprint.y - tab.height * 2.0,
            ),
            Quadrant::BottomRight => {
                width *= config.bottom_right_width_scale;
                (tab.x - footprint.x - tab.width, tab.y - footprint.y - tab.height)
            }
        };

        self.panel = Rect::new(x, y, width, footprint.y);
        self.backdrop = Rect::new(
            x,
            y - tab.height,
            width * config.backdrop_width_scale,
            footprint.y * config.backdrop_height_scale,
        );

        let element_height = footprint.y / count as f32;
        let column_x = x + tab.width;
        let has_text_fields = self.has_kind(WidgetKind::TextField);
        let mut y_pos = y;

        for widget in self.elements.iter_mut().filter(|w| w.kind() == WidgetKind::Slider) {
            widget.set_position(Vec2::new(column_x, y_pos));
            y_pos += element_height;
        }
        y_pos += config.slider_padding;

        for widget in self.elements.iter_mut().filter(|w| w.kind() == WidgetKind::TextField) {
            widget.set_position(Vec2::new(column_x, y_pos));
            y_pos += element_height + config.text_field_gap;
        }

        for widget in self.elements.iter_mut().filter(|w| w.kind() == WidgetKind::Button) {
            widget.set_position(Vec2::new(column_x, y_pos));
            y_pos += element_height;
        }

        let toggles = self.elements.iter_mut().filter(|w| w.kind() == WidgetKind::Toggle);
        for (index, widget) in toggles.enumerate() {
            // Toggles past the threshold spill into a second column beside the text fields
            let position = if has_text_fields && index + 1 > config.toggle_column_threshold {
                Vec2::new(
                    column_x * config.toggle_column_scale,
                    y_pos - element_height * config.toggle_column_threshold as f32,
                )
            } else {
                Vec2::new(column_x, y_pos)
            };
            widget.set_position(position);
            y_pos += element_height;
        }
    }

    /// Arrange then draw.
    pub fn render<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
        canvas: Canvas,
    ) -> Result<(), D::Error> {
        self.arrange(canvas);
        self.draw(display, canvas)
    }

    /// Route a press: the tab first, then every widget while open.
    pub fn mouse_pressed(&mut self, x: i32, y: i32, button: i32) -> Vec<Action> {
        let event = PointerEvent::press(x, y, button);

        if self.tab.handle_pointer(event).is_handled() {
            self.set_opened(!self.opened);
        }

        if self.opened {
            self.broadcast(event)
        } else {
            Vec::new()
        }
    }

    pub fn mouse_dragged(&mut self, x: i32, y: i32, button: i32) -> Vec<Action> {
        if !self.opened {
            return Vec::new();
        }
        self.broadcast(PointerEvent::drag(x, y, button))
    }

    pub fn mouse_released(&mut self, x: i32, y: i32, button: i32) -> Vec<Action> {
        let event = PointerEvent::release(x, y, button);
        self.tab.handle_pointer(event);

        if !self.opened {
            return Vec::new();
        }
        self.broadcast(event)
    }

    pub fn key_released(&mut self, key: i32) -> Vec<Action> {
        if !self.opened {
            return Vec::new();
        }

        self.elements
            .iter_mut()
            .filter_map(|widget| widget.handle_key(Key(key)).action())
            .collect()
    }

    fn broadcast(&mut self, event: PointerEvent) -> Vec<Action> {
        self.elements
            .iter_mut()
            .filter_map(|widget| widget.handle_pointer(event).action())
            .collect()
    }

    /// One state report per toggle, in insertion order.
    pub fn callback_update(&self) -> Vec<Action> {
        self.elements
            .iter()
            .filter_map(LeafWidget::as_toggle)
            .map(Toggle::report_state)
            .collect()
    }
}

impl Drawable for Container {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        canvas: Canvas,
    ) -> Result<(), D::Error> {
        surface::text(display, &self.label, self.label_rect.position(), WHITE)?;
        self.tab.draw(display, canvas)?;

        if !self.opened {
            return Ok(());
        }

        surface::fill_rect(display, self.backdrop, translucent(WHITE, ALPHA_BACKDROP))?;

        for kind in DRAW_ORDER {
            for widget in self.elements.iter().filter(|w| w.kind() == kind) {
                widget.draw(display, canvas)?;
            }
        }

        Ok(())
    }

    fn bounds(&self) -> Rect {
        let closed = self.label_rect.union(&self.tab.rect());
        if self.opened && !self.backdrop.is_empty() {
            closed.union(&self.backdrop)
        } else {
            closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingTarget;
    use crate::ui::core::WidgetId;

    const CANVAS: Canvas = Canvas::new(800.0, 600.0);

    fn slider(id: u16, height: f32) -> Slider {
        Slider::new(
            WidgetId(id),
            "Mass",
            Rect::new(0.0, 0.0, 100.0, height),
            0.0,
            1.0,
            0.5,
        )
    }

    fn toggle(id: u16) -> Toggle {
        Toggle::new(WidgetId(id), "Trail", Rect::new(0.0, 0.0, 60.0, 10.0), false)
    }

    fn physics() -> Container {
        Container::new("Physics", 10.0, 20.0, 20.0, 16.0, true)
    }

    #[test]
    fn test_new_places_label_and_tab() {
        let container = physics();

        assert_eq!(container.label_rect(), Rect::new(10.0, 25.0, 42.0, 10.0));
        assert_eq!(container.tab_rect(), Rect::new(62.0, 14.0, 20.0, 16.0));
    }

    #[test]
    fn test_footprint_floor_uses_tab_height() {
        let mut container = Container::new("Table", 0.0, 0.0, 15.0, 15.0, true);
        container.add_slider(slider(1, 10.0));
        container.add_slider(slider(2, 10.0));
        container.add_button(Button::new(WidgetId(3), "Go", Rect::new(0.0, 0.0, 40.0, 10.0)));

        let footprint = container.footprint();

        assert_eq!(footprint.y, 90.0);
        assert_eq!(footprint.x, 100.0);
    }

    #[test]
    fn test_footprint_ignores_tooltips() {
        let mut container = physics();
        container.add_tooltip(Tooltip::new("help", 0.0, 0.0));

        assert_eq!(container.footprint(), Vec2::ZERO);
    }

    #[test]
    fn test_closed_footprint_is_label_box() {
        let mut container = physics();
        container.add_slider(slider(1, 10.0));
        container.set_opened(false);

        assert_eq!(container.footprint(), Vec2::new(42.0, 10.0));
    }

    #[test]
    fn test_footprint_width_covers_long_caption() {
        let mut container = physics();
        container.add_toggle(Toggle::new(
            WidgetId(1),
            "A rather long toggle caption",
            Rect::new(0.0, 0.0, 30.0, 10.0),
            false,
        ));

        assert_eq!(container.footprint().x, 28.0 * 6.0);
    }

    #[test]
    fn test_layout_advances_by_heights() {
        let mut container = physics();
        for id in 0..3 {
            container.add_slider(slider(id, 10.0));
        }
        container.set_position(Vec2::new(50.0, 50.0));

        let advance = container.layout_elements();

        assert_eq!(advance, 30.0);
        let panel = container.panel();
        for (index, widget) in container.elements().iter().enumerate() {
            assert_eq!(widget.rect().width, panel.width);
            assert_eq!(widget.rect().y, 50.0 + index as f32 * 10.0);
        }
    }

    #[test]
    fn test_layout_stacks_by_kind_then_adds_text_field_gap() {
        let mut container = physics();
        container.add_text_field(TextField::new(WidgetId(1), "Name", Rect::new(0.0, 0.0, 80.0, 15.0)));
        container.add_toggle(toggle(2));
        container.add_slider(slider(3, 10.0));
        container.set_position(Vec2::ZERO);

        let advance = container.layout_elements();

        assert_eq!(advance, 10.0 + 10.0 + 15.0 + 35.0);
        let ys: Vec<f32> = container.elements().iter().map(|w| w.rect().y).collect();
        assert_eq!(ys, [20.0, 10.0, 0.0]);
    }

    #[test]
    fn test_set_position_moves_label_and_tab() {
        let mut container = physics();
        container.add_slider(slider(1, 10.0));

        container.set_position(Vec2::new(100.0, 200.0));

        assert_eq!(container.label_rect(), Rect::new(100.0, 206.0, 42.0, 10.0));
        assert_eq!(container.tab_rect(), Rect::new(152.0, 194.0, 20.0, 16.0));
        assert_eq!(container.panel().position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_arrange_top_left() {
        let mut container = physics();
        container.add_slider(slider(1, 10.0));

        container.arrange(CANVAS);

        assert_eq!(container.panel(), Rect::new(97.0, 22.0, 100.0, 32.0));
        assert_eq!(container.backdrop().y, 6.0);
        assert_eq!(container.backdrop().width, 125.0);
        assert_eq!(container.elements()[0].rect().position(), Vec2::new(117.0, 22.0));
    }

    #[test]
    fn test_arrange_bottom_right_widens_panel() {
        let mut container = Container::new("Physics", 600.0, 500.0, 20.0, 16.0, true);
        container.add_slider(slider(1, 10.0));

        container.arrange(CANVAS);

        let tab = container.tab_rect();
        let panel = container.panel();
        assert_eq!(panel.x, tab.x - 100.0 - tab.width);
        assert_eq!(panel.y, tab.y - 32.0 - tab.height);
        assert_eq!(panel.width, 175.0);
    }

    #[test]
    fn test_arrange_spills_toggles_into_second_column() {
        let mut container = physics();
        container.add_text_field(TextField::new(WidgetId(1), "Name", Rect::new(0.0, 0.0, 80.0, 15.0)));
        for id in 2..6 {
            container.add_toggle(toggle(id));
        }

        container.arrange(CANVAS);

        let toggles: Vec<Vec2> = container
            .elements()
            .iter()
            .filter(|w| w.kind() == WidgetKind::Toggle)
            .map(|w| w.rect().position())
            .collect();
        assert_eq!(toggles[0], Vec2::new(117.0, 94.0));
        assert_eq!(toggles[2], Vec2::new(117.0, 158.0));
        assert_eq!(toggles[3], Vec2::new(117.0 * 1.625, 94.0));
    }

    #[test]
    fn test_arrange_leaves_tooltips_alone() {
        let mut container = physics();
        container.add_slider(slider(1, 10.0));
        container.add_tooltip(Tooltip::new("help", 400.0, 300.0));

        container.arrange(CANVAS);

        assert_eq!(container.elements()[1].rect().center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_tab_press_toggles_open_state() {
        let mut container = physics();

        container.mouse_pressed(70, 20, 0);
        assert!(!container.is_opened());

        container.mouse_pressed(70, 20, 0);
        assert!(container.is_opened());
    }

    #[test]
    fn test_closed_container_does_not_route_to_widgets() {
        let mut container = physics();
        container.add_toggle(toggle(1));
        container.set_position(Vec2::new(0.0, 100.0));
        container.set_opened(false);
        let target = container.elements()[0].rect().center();

        let actions = container.mouse_pressed(target.x as i32, target.y as i32, 0);

        assert!(actions.is_empty());
        assert!(!container.elements()[0].as_toggle().unwrap().is_on());
    }

    #[test]
    fn test_press_collects_widget_actions() {
        let mut container = physics();
        container.add_toggle(toggle(8));
        container.set_position(Vec2::new(0.0, 100.0));
        let target = container.elements()[0].rect().center();

        let actions = container.mouse_pressed(target.x as i32, target.y as i32, 0);

        assert_eq!(
            actions,
            [Action::ToggleChanged {
                id: WidgetId(8),
                on: true
            }]
        );
    }

    #[test]
    fn test_drag_reaches_sliders() {
        let mut container = physics();
        container.add_slider(slider(1, 10.0));
        container.set_position(Vec2::new(0.0, 100.0));
        container.mouse_pressed(0, 105, 0);

        let actions = container.mouse_dragged(1000, 105, 0);

        assert_eq!(
            actions,
            [Action::SliderChanged {
                id: WidgetId(1),
                value: 1.0
            }]
        );
        assert!(container.mouse_released(1000, 105, 0).is_empty());
    }

    #[test]
    fn test_callback_update_reports_every_toggle() {
        let mut container = physics();
        container.add_toggle(toggle(1));
        container.add_slider(slider(2, 10.0));
        container.add_toggle(Toggle::new(WidgetId(3), "On", Rect::ZERO, true));

        assert_eq!(
            container.callback_update(),
            [
                Action::ToggleState {
                    id: WidgetId(1),
                    on: false
                },
                Action::ToggleState {
                    id: WidgetId(3),
                    on: true
                },
            ]
        );
    }

    #[test]
    fn test_detach_all_returns_widgets() {
        let mut container = physics();
        container.add_slider(slider(1, 10.0));
        container.add_toggle(toggle(2));

        let widgets = container.detach_all();

        assert_eq!(widgets.len(), 2);
        assert!(container.elements().is_empty());
    }

    #[test]
    fn test_clear_drops_widgets_and_reports() {
        let mut container = physics();
        container.add_slider(slider(1, 10.0));
        container.add_toggle(toggle(2));

        container.clear();

        assert!(container.elements().is_empty());
        assert_eq!(container.stacked_count(), 0);
        assert!(container.callback_update().is_empty());
        assert_eq!(container.footprint(), Vec2::ZERO);
    }

    #[test]
    fn test_render_draws_open_panel() {
        let mut container = physics();
        container.add_slider(slider(1, 10.0));
        let mut target = CountingTarget::new(800, 600);

        container.render(&mut target, CANVAS).unwrap();

        assert!(target.pixel(98, 7).is_some());
    }

    #[test]
    fn test_try_with_config_rejects_invalid() {
        let config = LayoutConfig {
            label_gap: f32::INFINITY,
            ..LayoutConfig::default()
        };

        assert!(Container::try_with_config("x", 0.0, 0.0, 10.0, 10.0, true, config).is_err());
    }
}
