// src/ui/layouts/manager.rs
//! Container manager: packs open containers into rows and routes input
//!
//! The manager owns its containers in an arena addressed by [`ContainerId`].
//! Every frame the host calls [`ContainerManager::reposition_containers`] and
//! then [`ContainerManager::draw`]; input events are forwarded as they arrive.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, trace};

use crate::config::{ConfigResult, LayoutConfig};
use crate::ui::components::text::{self, Label, label_bounds};
use crate::ui::core::Action;
use crate::ui::geometry::{Canvas, Rect, Vec2};
use crate::ui::layouts::container::{Container, ContainerKind};
use crate::ui::styling::{
    ALPHA_MANAGER_BACKDROP, ALPHA_OUTLINE, PANEL_GRAY, WHITE, translucent,
};
use crate::ui::surface;

/// Stable handle to a container owned by a [`ContainerManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(usize);

impl ContainerId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerManager {
    label: Label,
    label_rect: Rect,
    bounds: Rect,
    base_size: Vec2,
    opened: bool,
    focus_mode: bool,
    containers: Vec<Container>,
    config: LayoutConfig,
}

impl ContainerManager {
    /// Manager whose label starts at `(x, y)` with `w`×`h` bounds after it.
    pub fn new(label: &str, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::build(label, x, y, w, h, LayoutConfig::default())
    }

    pub fn try_with_config(
        label: &str,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        config: LayoutConfig,
    ) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(label, x, y, w, h, config))
    }

    /// Manager anchored near the top-left corner of the canvas
    pub fn anchored(label: &str, canvas: Canvas) -> Self {
        let config = LayoutConfig::default();
        let label: Label = text::label(label);
        let label_rect = label_bounds(&label, canvas.width * 0.01, canvas.height * 0.01);
        let bounds = Rect::new(label_rect.right() + config.label_gap, 25.0, 200.0, 200.0);

        Self::from_parts(label, label_rect, bounds, config)
    }

    fn build(label: &str, x: f32, y: f32, w: f32, h: f32, config: LayoutConfig) -> Self {
        let label: Label = text::label(label);
        let label_rect = label_bounds(&label, x, y + h * 0.3125);
        let bounds = Rect::new(label_rect.right() + config.label_gap, y - h * 0.5 + 2.0, w, h);

        Self::from_parts(label, label_rect, bounds, config)
    }

    fn from_parts(label: Label, label_rect: Rect, bounds: Rect, config: LayoutConfig) -> Self {
        Self {
            label,
            label_rect,
            bounds,
            base_size: bounds.size(),
            opened: false,
            focus_mode: false,
            containers: Vec::new(),
            config,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_rect(&self) -> Rect {
        self.label_rect
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn set_opened(&mut self, opened: bool) {
        if self.opened != opened {
            debug!(
                " Manager '{}' {}",
                self.label,
                if opened { "opened" } else { "closed" }
            );
            self.opened = opened;
        }
    }

    pub fn focus_mode(&self) -> bool {
        self.focus_mode
    }

    pub fn add_container(&mut self, container: Container) -> ContainerId {
        self.containers.push(container);
        ContainerId(self.containers.len() - 1)
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.0)
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.get_mut(id.0)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Release every container's widgets, then the containers themselves.
    ///
    /// Previously issued [`ContainerId`]s no longer resolve afterwards.
    pub fn clear(&mut self) {
        for container in &mut self.containers {
            container.clear();
        }
        self.containers.clear();
        self.focus_mode = false;
    }

    /// Hand every container back to the caller, leaving the manager empty.
    pub fn detach_all(&mut self) -> Vec<Container> {
        self.focus_mode = false;
        core::mem::take(&mut self.containers)
    }

    /// Greedy shelf packing of the open containers.
    ///
    /// Containers are placed left to right and wrap to a new row when the
    /// next one would cross the canvas edge. The manager grows by one tab and
    /// one label height per open container and is as wide as the widest open
    /// label or tab.
    pub fn reposition_containers(&mut self, canvas: Canvas) {
        let margin = self.config.margin;
        let mut current_x = margin;
        let mut current_y = margin;
        let mut max_row_height = 0.0f32;
        let mut width = 0.0f32;
        let mut extra_height = 0.0f32;
        let mut rows = 0usize;

        for container in self.containers.iter_mut().filter(|c| c.is_opened()) {
            width = width
                .max(container.label_rect().width)
                .max(container.tab_rect().width);

            let footprint = container.footprint();

            // A container wider than the canvas still gets a row of its own
            if rows == 0 {
                rows = 1;
            } else if current_x > margin && current_x + footprint.x + margin > canvas.width {
                current_x = margin;
                current_y += max_row_height + margin;
                max_row_height = 0.0;
                rows += 1;
            }

            container.set_position(Vec2::new(current_x, current_y));
            trace!(
                " Placed container '{}' at ({}, {})",
                container.label(),
                current_x,
                current_y
            );

            current_x += footprint.x + margin;
            max_row_height = max_row_height.max(footprint.y);
            extra_height += container.tab_rect().height + container.label_rect().height;
        }

        self.bounds.height = self.base_size.y + extra_height;
        // With nothing open the manager keeps its base width
        self.bounds.width = if width > 0.0 { width } else { self.base_size.x };
        debug!(" Packed open containers into {} rows", rows);
    }

    /// Close every non-focus container while a focus container is open.
    pub fn focused_mode(&mut self) {
        let focus_mode = self
            .containers
            .iter()
            .any(|c| c.kind() == ContainerKind::Focus && c.is_opened());

        if focus_mode != self.focus_mode {
            debug!(" Focus mode {}", if focus_mode { "on" } else { "off" });
            self.focus_mode = focus_mode;
        }

        if focus_mode {
            for container in &mut self.containers {
                if container.kind() != ContainerKind::Focus {
                    container.set_opened(false);
                }
            }
        }
    }

    /// Move the manager so its label starts at `position`, then repack.
    pub fn set_position(&mut self, position: Vec2, canvas: Canvas) {
        self.label_rect = label_bounds(
            &self.label,
            position.x,
            position.y + self.bounds.height * 0.375,
        );
        self.bounds.x = self.label_rect.right() + self.config.label_gap;
        self.bounds.y = position.y - self.bounds.height * 0.5 + 2.0;

        self.reposition_containers(canvas);
    }

    /// Set the height and stretch the width across the canvas.
    pub fn adjust_dimensions(&mut self, new_height: f32, canvas: Canvas) {
        self.bounds.height = new_height;
        self.bounds.width = canvas.width - 2.0 * self.config.edge_margin;
    }

    pub fn mouse_pressed(&mut self, x: i32, y: i32, button: i32) -> Vec<Action> {
        if self.bounds.contains(Vec2::new(x as f32, y as f32)) {
            self.set_opened(!self.opened);
        }

        if !self.opened {
            return Vec::new();
        }

        let actions = self
            .containers
            .iter_mut()
            .flat_map(|c| c.mouse_pressed(x, y, button))
            .collect();

        self.focused_mode();
        actions
    }

    pub fn mouse_dragged(&mut self, x: i32, y: i32, button: i32) -> Vec<Action> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.mouse_dragged(x, y, button))
            .collect()
    }

    pub fn mouse_released(&mut self, x: i32, y: i32, button: i32) -> Vec<Action> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.mouse_released(x, y, button))
            .collect()
    }

    pub fn key_released(&mut self, key: i32) -> Vec<Action> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.key_released(key))
            .collect()
    }

    /// Draw the manager and its containers.
    ///
    /// Returns the per-frame toggle reports of every container.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
        canvas: Canvas,
    ) -> Result<Vec<Action>, D::Error> {
        surface::text(display, &self.label, self.label_rect.position(), WHITE)?;

        let reports: Vec<Action> = self
            .containers
            .iter()
            .flat_map(Container::callback_update)
            .collect();

        let outline = translucent(WHITE, ALPHA_OUTLINE);
        let bounds = self.bounds;
        let mid_y = bounds.y + bounds.height * 0.5;

        if self.opened {
            surface::fill_rect(
                display,
                bounds,
                translucent(PANEL_GRAY, ALPHA_MANAGER_BACKDROP),
            )?;

            for container in &mut self.containers {
                container.render(display, canvas)?;
            }

            surface::stroke_rect(display, bounds, outline, 2)?;
            surface::line(
                display,
                Vec2::new(bounds.x + 2.0, mid_y),
                Vec2::new(bounds.right() - 2.0, mid_y),
                outline,
                1,
            )?;
        } else {
            let mid_x = bounds.x + bounds.width * 0.5;

            surface::stroke_rect(display, bounds, outline, 2)?;
            surface::line(
                display,
                Vec2::new(mid_x, bounds.y + 2.0),
                Vec2::new(mid_x, bounds.bottom() - 2.0),
                outline,
                1,
            )?;
            surface::line(
                display,
                Vec2::new(bounds.x + 2.0, mid_y),
                Vec2::new(bounds.right() - 2.0, mid_y),
                outline,
                1,
            )?;
        }

        Ok(reports)
    }
}
