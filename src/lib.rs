#![no_std]

extern crate alloc;

pub mod config;
pub mod ui;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, ConfigResult, GridConfig, LayoutConfig};
