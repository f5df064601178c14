// src/config.rs
//! Layout and grid-selection tuning
//!
//! The defaults reproduce the stock look of the panels. Hosts that keep their
//! own settings can embed these structs and (de)serialize them with any serde
//! format; everything is validated before a widget accepts it.

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Error types for configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// A spacing value is negative, NaN or infinite
    #[error("Invalid spacing for {field}: must be finite and non-negative")]
    InvalidSpacing {
        /// Name of the offending field
        field: &'static str,
    },

    /// A scale factor is zero, negative or not finite
    #[error("Invalid scale for {field}: must be finite and positive")]
    InvalidScale {
        /// Name of the offending field
        field: &'static str,
    },

    /// Granularity range is empty
    #[error("Invalid granularity range ({min}..={max})")]
    InvalidGranularityRange { min: u32, max: u32 },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

fn check_spacing(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpacing { field })
    }
}

fn check_scale(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScale { field })
    }
}

/// Spacing and scale constants used by containers and the manager
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Gap between packed containers and between rows
    pub margin: f32,
    /// Horizontal gap between a label and its tab
    pub label_gap: f32,
    /// Extra vertical space after each text field
    pub text_field_gap: f32,
    /// Gap between the slider block and the rest of a panel
    pub slider_padding: f32,
    /// Horizontal gap between a left-side tab and its panel
    pub panel_tab_offset: f32,
    /// Backdrop width relative to the panel footprint
    pub backdrop_width_scale: f32,
    /// Backdrop height relative to the panel footprint
    pub backdrop_height_scale: f32,
    /// Width multiplier for panels expanding into the bottom-right quadrant
    pub bottom_right_width_scale: f32,
    /// X multiplier of the second toggle column
    pub toggle_column_scale: f32,
    /// Toggles with an index above this move to the second column
    pub toggle_column_threshold: usize,
    /// Horizontal inset of the manager when it fills the canvas width
    pub edge_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            label_gap: 10.0,
            text_field_gap: 35.0,
            slider_padding: 5.0,
            panel_tab_offset: 15.0,
            backdrop_width_scale: 1.25,
            backdrop_height_scale: 1.05,
            bottom_right_width_scale: 1.75,
            toggle_column_scale: 1.625,
            toggle_column_threshold: 3,
            edge_margin: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        check_spacing("margin", self.margin)?;
        check_spacing("label_gap", self.label_gap)?;
        check_spacing("text_field_gap", self.text_field_gap)?;
        check_spacing("slider_padding", self.slider_padding)?;
        check_spacing("panel_tab_offset", self.panel_tab_offset)?;
        check_spacing("edge_margin", self.edge_margin)?;
        check_scale("backdrop_width_scale", self.backdrop_width_scale)?;
        check_scale("backdrop_height_scale", self.backdrop_height_scale)?;
        check_scale("bottom_right_width_scale", self.bottom_right_width_scale)?;
        check_scale("toggle_column_scale", self.toggle_column_scale)?;
        Ok(())
    }
}

/// Placement of the grid selector's controls and its granularity range
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Distance from the bottom of the bounds to the slider
    pub slider_offset: f32,
    pub slider_width: f32,
    pub slider_height: f32,
    /// Distance from the bottom of the bounds to the submit button
    pub submit_offset: f32,
    pub submit_width: f32,
    pub submit_height: f32,
    /// Smallest selectable granularity
    pub min_granularity: u32,
    /// Largest selectable granularity
    pub max_granularity: u32,
    /// Starting granularity as a fraction of the initial width
    pub initial_width_ratio: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            slider_offset: 10.0,
            slider_width: 150.0,
            slider_height: 20.0,
            submit_offset: 40.0,
            submit_width: 80.0,
            submit_height: 20.0,
            min_granularity: 1,
            max_granularity: 20,
            initial_width_ratio: 0.005,
        }
    }
}

impl GridConfig {
    /// Same defaults with a different granularity range
    pub fn with_range(min: u32, max: u32) -> Self {
        Self {
            min_granularity: min,
            max_granularity: max,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_granularity == 0 || self.min_granularity > self.max_granularity {
            return Err(ConfigError::InvalidGranularityRange {
                min: self.min_granularity,
                max: self.max_granularity,
            });
        }

        check_spacing("slider_offset", self.slider_offset)?;
        check_spacing("slider_width", self.slider_width)?;
        check_spacing("slider_height", self.slider_height)?;
        check_spacing("submit_offset", self.submit_offset)?;
        check_spacing("submit_width", self.submit_width)?;
        check_spacing("submit_height", self.submit_height)?;
        check_spacing("initial_width_ratio", self.initial_width_ratio)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
        assert_eq!(GridConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let config = LayoutConfig {
            margin: -1.0,
            ..LayoutConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSpacing { field: "margin" })
        );
    }

    #[test]
    fn test_nan_scale_rejected() {
        let config = LayoutConfig {
            backdrop_width_scale: f32::NAN,
            ..LayoutConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidScale {
                field: "backdrop_width_scale"
            })
        );
    }

    #[test]
    fn test_empty_granularity_range_rejected() {
        assert_eq!(
            GridConfig::with_range(0, 10).validate(),
            Err(ConfigError::InvalidGranularityRange { min: 0, max: 10 })
        );
        assert_eq!(
            GridConfig::with_range(8, 4).validate(),
            Err(ConfigError::InvalidGranularityRange { min: 8, max: 4 })
        );
        assert!(GridConfig::with_range(2, 2).validate().is_ok());
    }
}
