// src/ui/components/mod.rs
//! UI components library

pub mod button;
pub mod grid_selector;
pub mod slider;
pub mod tab;
pub mod text;
pub mod text_field;
pub mod toggle;
pub mod tooltip;

pub use button::Button;
pub use grid_selector::{GridPhase, GridSelector};
pub use slider::Slider;
pub use tab::Tab;
pub use text::{Label, label_bounds};
pub use text_field::TextField;
pub use toggle::Toggle;
pub use tooltip::Tooltip;
