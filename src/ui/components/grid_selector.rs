// src/ui/components/grid_selector.rs
//! Square drag selection subdivided into a uniform grid
//!
//! The user presses inside the bounds and drags to size a square region
//! anchored at the bounds' top-left corner. After release, the embedded slider
//! picks how many cells each side is split into, and the submit button
//! confirms the choice.
//!
//! ```text
//! Idle --press in bounds--> Dragging --release--> Configuring
//!   ^                                                  |
//!   +------take_submission------ Submitted <--submit---+
//! ```

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::debug;

use crate::config::{ConfigResult, GridConfig};
use crate::ui::components::text::{self, LINE_HEIGHT, Label};
use crate::ui::components::{Button, Slider};
use crate::ui::core::{Action, Drawable, EventResult, Interactive, PointerEvent, WidgetId};
use crate::ui::geometry::{Canvas, Rect, Vec2, abs_diff};
use crate::ui::styling::{GRAY, WHITE};
use crate::ui::surface;

const GRANULARITY_SLIDER: WidgetId = WidgetId(u16::MAX - 1);
const SUBMIT_BUTTON: WidgetId = WidgetId(u16::MAX);

/// Interaction phase of a [`GridSelector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPhase {
    Idle,
    /// Bounds follow the pointer
    Dragging,
    /// Bounds fixed, granularity adjustable
    Configuring,
    /// Waiting for the owner to take the submitted granularity
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridSelector {
    label: Label,
    bounds: Rect,
    granularity: u32,
    cells: Vec<Rect>,
    slider: Slider,
    submit: Button,
    phase: GridPhase,
    config: GridConfig,
}

impl GridSelector {
    /// Selector with the default granularity range
    pub fn new(label: &str, rect: Rect) -> Self {
        Self::build(label, rect, GridConfig::default())
    }

    /// Selector whose granularity slider spans `min..=max`
    ///
    /// A zero minimum is raised to one and an inverted range collapses onto
    /// its minimum.
    pub fn with_range(label: &str, rect: Rect, min: u32, max: u32) -> Self {
        let min = min.max(1);
        Self::build(label, rect, GridConfig::with_range(min, max.max(min)))
    }

    pub fn try_with_config(label: &str, rect: Rect, config: GridConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(label, rect, config))
    }

    fn build(label: &str, rect: Rect, config: GridConfig) -> Self {
        let initial = (rect.width * config.initial_width_ratio) as u32;
        let granularity = initial
            .max(config.min_granularity)
            .min(config.max_granularity)
            .max(1);

        let slider = Slider::new(
            GRANULARITY_SLIDER,
            "Granularity",
            Rect::new(
                rect.x,
                rect.bottom() + config.slider_offset,
                config.slider_width,
                config.slider_height,
            ),
            config.min_granularity as f32,
            config.max_granularity as f32,
            granularity as f32,
        )
        .with_precision(0);

        let submit = Button::new(
            SUBMIT_BUTTON,
            "Submit",
            Rect::new(
                rect.x,
                rect.bottom() + config.submit_offset,
                config.submit_width,
                config.submit_height,
            ),
        );

        let mut selector = Self {
            label: text::label(label),
            bounds: rect,
            granularity,
            cells: Vec::new(),
            slider,
            submit,
            phase: GridPhase::Idle,
            config,
        };
        selector.update_grid_cells();
        selector
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    pub fn cells(&self) -> &[Rect] {
        &self.cells
    }

    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn submit_button(&self) -> &Button {
        &self.submit
    }

    /// Set the number of cells per side, clamped to the configured range.
    /// Zero is ignored.
    pub fn set_granularity(&mut self, granularity: u32) {
        if granularity == 0 {
            return;
        }
        self.granularity =
            granularity.clamp(self.config.min_granularity, self.config.max_granularity);
        self.slider.set_value(granularity as f32);
        self.update_grid_cells();
    }

    /// Take the submitted granularity, returning to `Idle`.
    pub fn take_submission(&mut self) -> Option<u32> {
        if self.phase != GridPhase::Submitted {
            return None;
        }
        self.set_phase(GridPhase::Idle);
        Some(self.granularity)
    }

    /// Resize the bounds in place.
    pub fn set_size(&mut self, size: Vec2) {
        self.bounds.width = size.x;
        self.bounds.height = size.y;
        self.update_grid_cells();
    }

    /// Rebuild the cell list column by column.
    pub fn update_grid_cells(&mut self) {
        self.cells.clear();

        if self.granularity == 0 || self.bounds.is_empty() {
            return;
        }

        let steps = self.granularity as f32;
        let cell_width = self.bounds.width / steps;
        let cell_height = self.bounds.height / steps;

        for i in 0..self.granularity {
            for j in 0..self.granularity {
                self.cells.push(Rect::new(
                    self.bounds.x + i as f32 * cell_width,
                    self.bounds.y + j as f32 * cell_height,
                    cell_width,
                    cell_height,
                ));
            }
        }
    }

    pub fn mouse_pressed(&mut self, x: i32, y: i32, button: i32) -> Option<Action> {
        self.handle_pointer(PointerEvent::press(x, y, button)).action()
    }

    pub fn mouse_dragged(&mut self, x: i32, y: i32, button: i32) -> Option<Action> {
        self.handle_pointer(PointerEvent::drag(x, y, button)).action()
    }

    pub fn mouse_released(&mut self, x: i32, y: i32, button: i32) -> Option<Action> {
        self.handle_pointer(PointerEvent::release(x, y, button)).action()
    }

    fn set_phase(&mut self, phase: GridPhase) {
        if self.phase != phase {
            debug!(" Grid '{}' {:?} -> {:?}", self.label, self.phase, phase);
            self.phase = phase;
        }
    }

    /// Keep the slider and submit button just below the bounds.
    fn place_controls(&mut self) {
        let bottom = self.bounds.bottom();
        self.slider
            .set_position(Vec2::new(self.bounds.x, bottom + self.config.slider_offset));
        self.submit
            .set_position(Vec2::new(self.bounds.x, bottom + self.config.submit_offset));
    }

    fn apply_slider(&mut self, result: EventResult) {
        if let Some(Action::SliderChanged { value, .. }) = result.action() {
            let granularity = ((value + 0.5) as u32).max(1);
            if granularity != self.granularity {
                self.granularity = granularity;
                self.update_grid_cells();
            }
        }
    }

    fn press(&mut self, event: PointerEvent) -> EventResult {
        let position = event.position();

        if self.bounds.contains(position) {
            self.set_phase(GridPhase::Dragging);
            EventResult::Handled
        } else if self.slider.rect().contains(position) {
            let result = self.slider.handle_pointer(event);
            self.apply_slider(result);
            EventResult::Handled
        } else if self.submit.rect().contains(position) {
            match self.submit.handle_pointer(event) {
                EventResult::Action(Action::ButtonPressed(_)) => {
                    self.set_phase(GridPhase::Submitted);
                    EventResult::Action(Action::GranularitySubmitted {
                        granularity: self.granularity,
                    })
                }
                other => other,
            }
        } else {
            EventResult::NotHandled
        }
    }

    fn drag(&mut self, event: PointerEvent) -> EventResult {
        if self.phase != GridPhase::Dragging {
            let result = self.slider.handle_pointer(event);
            self.apply_slider(result);
            return if result.is_handled() {
                EventResult::Handled
            } else {
                EventResult::NotHandled
            };
        }

        // Keep the selection square, anchored at the top-left corner
        let position = event.position();
        let size = abs_diff(position.x, self.bounds.x).min(abs_diff(position.y, self.bounds.y));
        self.bounds.width = size;
        self.bounds.height = size;
        self.update_grid_cells();
        EventResult::Handled
    }

    fn release(&mut self, event: PointerEvent) -> EventResult {
        let was_dragging = self.phase == GridPhase::Dragging;
        if was_dragging {
            self.set_phase(GridPhase::Configuring);
            self.place_controls();
        }

        let slider = self.slider.handle_pointer(event);
        let submit = self.submit.handle_pointer(event);

        if was_dragging || slider.is_handled() || submit.is_handled() {
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }
}

impl Drawable for GridSelector {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        canvas: Canvas,
    ) -> Result<(), D::Error> {
        let bounds = self.bounds;

        surface::text(
            display,
            &self.label,
            Vec2::new(bounds.x, bounds.y - LINE_HEIGHT - 4.0),
            WHITE,
        )?;

        if !bounds.is_empty() && self.granularity > 1 {
            let steps = self.granularity as f32;
            for k in 1..self.granularity {
                let x = bounds.x + bounds.width * k as f32 / steps;
                let y = bounds.y + bounds.height * k as f32 / steps;
                surface::line(
                    display,
                    Vec2::new(x, bounds.y),
                    Vec2::new(x, bounds.bottom()),
                    GRAY,
                    1,
                )?;
                surface::line(
                    display,
                    Vec2::new(bounds.x, y),
                    Vec2::new(bounds.right(), y),
                    GRAY,
                    1,
                )?;
            }
        }

        surface::stroke_rect(display, bounds, WHITE, 1)?;
        self.slider.draw(display, canvas)?;
        self.submit.draw(display, canvas)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Interactive for GridSelector {
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        match event {
            PointerEvent::Press { .. } => self.press(event),
            PointerEvent::Drag { .. } => self.drag(event),
            PointerEvent::Release { .. } => self.release(event),
        }
    }

    /// Move the bounds and carry the controls along.
    fn set_position(&mut self, position: Vec2) {
        self.bounds.set_position(position);
        self.place_controls();
        self.update_grid_cells();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingTarget;

    fn selector() -> GridSelector {
        GridSelector::new("Region", Rect::new(100.0, 100.0, 10.0, 10.0))
    }

    fn dragged_selector() -> GridSelector {
        let mut grid = selector();
        grid.mouse_pressed(100, 100, 0);
        grid.mouse_dragged(250, 180, 0);
        grid
    }

    #[test]
    fn test_drag_scenario_produces_square_grid() {
        let mut grid = dragged_selector();
        assert_eq!(grid.bounds(), Rect::new(100.0, 100.0, 80.0, 80.0));

        grid.set_granularity(4);

        let cells = grid.cells();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Rect::new(100.0, 100.0, 20.0, 20.0));
        assert_eq!(cells[1], Rect::new(100.0, 120.0, 20.0, 20.0));
        assert_eq!(cells[15], Rect::new(160.0, 160.0, 20.0, 20.0));
    }

    #[test]
    fn test_bounds_stay_square_while_dragging() {
        let mut grid = selector();
        grid.mouse_pressed(101, 101, 0);

        for (x, y) in [(150, 400), (400, 130), (40, 60), (100, 300), (90, 90)] {
            grid.mouse_dragged(x, y, 0);
            let bounds = grid.bounds();
            assert_eq!(bounds.width, bounds.height);
            assert_eq!(bounds.position(), Vec2::new(100.0, 100.0));
        }
    }

    #[test]
    fn test_cells_tile_bounds() {
        let mut grid = selector();
        grid.set_size(Vec2::new(100.0, 60.0));

        for granularity in 1..=7 {
            grid.set_granularity(granularity);

            let cells = grid.cells();
            let area: f32 = cells.iter().map(Rect::area).sum();
            assert_eq!(cells.len(), (granularity * granularity) as usize);
            assert!(abs_diff(area, 6000.0) < 0.1);
        }
    }

    #[test]
    fn test_zero_granularity_is_ignored() {
        let mut grid = dragged_selector();
        grid.set_granularity(3);

        grid.set_granularity(0);

        assert_eq!(grid.granularity(), 3);
        assert_eq!(grid.cells().len(), 9);
    }

    #[test]
    fn test_granularity_clamped_to_range() {
        let mut grid = dragged_selector();

        grid.set_granularity(50);
        assert_eq!(grid.granularity(), 20);
        assert_eq!(grid.slider().value(), 20.0);
        assert_eq!(grid.cells().len(), 400);

        let mut narrow = GridSelector::with_range("Narrow", Rect::new(0.0, 0.0, 80.0, 80.0), 3, 6);
        narrow.set_granularity(2);
        assert_eq!(narrow.granularity(), 3);
        assert_eq!(narrow.slider().value(), 3.0);
    }

    #[test]
    fn test_empty_bounds_have_no_cells() {
        let mut grid = selector();
        grid.set_size(Vec2::new(0.0, 50.0));

        assert!(grid.cells().is_empty());
    }

    #[test]
    fn test_initial_granularity_from_width() {
        let wide = GridSelector::new("Wide", Rect::new(0.0, 0.0, 1000.0, 1000.0));
        let narrow = GridSelector::with_range("Narrow", Rect::new(0.0, 0.0, 100.0, 100.0), 0, 8);

        assert_eq!(wide.granularity(), 5);
        assert_eq!(narrow.granularity(), 1);
        assert_eq!(narrow.cells().len(), 1);
    }

    #[test]
    fn test_release_moves_controls_below_bounds() {
        let mut grid = dragged_selector();

        grid.mouse_released(250, 180, 0);

        assert_eq!(grid.phase(), GridPhase::Configuring);
        assert_eq!(grid.slider().rect().position(), Vec2::new(100.0, 190.0));
        assert_eq!(grid.submit_button().rect().position(), Vec2::new(100.0, 220.0));
    }

    #[test]
    fn test_slider_drag_changes_granularity() {
        let mut grid = dragged_selector();
        grid.mouse_released(250, 180, 0);

        grid.mouse_pressed(100, 195, 0);
        grid.mouse_dragged(250, 195, 0);

        assert_eq!(grid.granularity(), 20);
        assert_eq!(grid.cells().len(), 400);
        assert_eq!(grid.bounds().width, 80.0);
    }

    #[test]
    fn test_submit_reports_granularity() {
        let mut grid = dragged_selector();
        grid.mouse_released(250, 180, 0);
        grid.set_granularity(4);

        let action = grid.mouse_pressed(110, 225, 0);

        assert_eq!(action, Some(Action::GranularitySubmitted { granularity: 4 }));
        assert_eq!(grid.phase(), GridPhase::Submitted);
        assert_eq!(grid.take_submission(), Some(4));
        assert_eq!(grid.phase(), GridPhase::Idle);
        assert_eq!(grid.take_submission(), None);
    }

    #[test]
    fn test_press_outside_everything_is_ignored() {
        let mut grid = selector();

        assert_eq!(grid.mouse_pressed(5, 5, 0), None);
        assert_eq!(grid.phase(), GridPhase::Idle);
    }

    #[test]
    fn test_set_position_carries_controls() {
        let mut grid = dragged_selector();

        grid.set_position(Vec2::new(10.0, 20.0));

        assert_eq!(grid.bounds(), Rect::new(10.0, 20.0, 80.0, 80.0));
        assert_eq!(grid.slider().rect().position(), Vec2::new(10.0, 110.0));
        assert_eq!(grid.submit_button().rect().position(), Vec2::new(10.0, 140.0));
        assert_eq!(grid.cells()[0].position(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_try_with_config_rejects_empty_range() {
        let config = GridConfig::with_range(5, 2);

        assert!(GridSelector::try_with_config("Bad", Rect::ZERO, config).is_err());
    }

    #[test]
    fn test_draw_outlines_bounds() {
        let mut grid = dragged_selector();
        grid.mouse_released(250, 180, 0);
        grid.set_granularity(2);
        let mut target = CountingTarget::new(320, 260);
        let canvas = target.canvas();

        grid.draw(&mut target, canvas).unwrap();

        assert_eq!(target.pixel(100, 150), Some(WHITE));
        assert_eq!(target.pixel(140, 150), Some(GRAY));
    }
}
