// src/ui/styling/mod.rs
//! Colors used by the toolkit's widgets
//!
//! - [`colors`] - Color constants, opacity levels and blending

pub mod colors;

pub use colors::{
    ACCENT, ALERT_RED, ALPHA_BACKDROP, ALPHA_MANAGER_BACKDROP, ALPHA_OUTLINE, ALPHA_TAB, BLACK,
    COLOR_BACKGROUND, GRAY, LIGHT_GRAY, PANEL_GRAY, WHITE, blend, translucent,
};
