// src/ui/mod.rs
//! Tableau UI System - immediate-mode panels for embedded-graphics targets
//!
//! This module provides:
//! - Core traits for drawable and interactive elements
//! - Leaf widgets (sliders, buttons, toggles, text fields, tooltips)
//! - Collapsible containers and a manager that packs them into rows
//! - A square grid-selection tool
//!
//! Input handling returns [`Action`] values instead of invoking callbacks, so
//! the host decides what each interaction means.

pub mod components;
pub mod core;
pub mod elements;
pub mod geometry;
pub mod layouts;
pub mod styling;
pub mod surface;

// Re-export commonly used items
pub use components::{
    Button, GridPhase, GridSelector, Slider, Tab, TextField, Toggle, Tooltip,
};
pub use self::core::{
    Action, Drawable, EventResult, Interactive, Key, MouseButton, PointerEvent, Widget, WidgetId,
};
pub use elements::{LeafWidget, WidgetKind};
pub use geometry::{Canvas, Quadrant, Rect, Vec2};
pub use layouts::{Container, ContainerId, ContainerKind, ContainerManager};
