//! Radar chart options

use serde::{Deserialize, Serialize};

/// Colours used by the radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPalette {
    /// Data stroke and vertex markers
    pub accent: String,
    pub background: String,
    pub grid: String,
    pub label: String,
    /// Translucent data polygon fill
    pub fill: String,
    /// Outline of the vertex markers
    pub marker_outline: String,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            accent: "#4FB8E0".to_string(),
            background: "#F8FBFD".to_string(),
            grid: "#E3EDF3".to_string(),
            label: "#2C3E50".to_string(),
            fill: "rgba(79, 184, 224, 0.2)".to_string(),
            marker_outline: "#FFFFFF".to_string(),
        }
    }
}

/// Layout and styling of a radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Logical width and height in CSS pixels
    pub size: f64,
    /// Outer grid radius as a fraction of `size`
    pub radius_scale: f64,
    /// Distance of axis labels beyond the outer ring
    pub label_offset: f64,
    /// Background disc extends this far beyond the outer ring
    pub background_margin: f64,
    /// Backing-store pixels per logical pixel
    pub device_pixel_ratio: f64,
    pub font: String,
    pub palette: ChartPalette,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: 280.0,
            radius_scale: 0.36,
            label_offset: 24.0,
            background_margin: 10.0,
            device_pixel_ratio: 1.0,
            font: "500 12px \"Noto Sans JP\", sans-serif".to_string(),
            palette: ChartPalette::default(),
        }
    }
}

impl ChartOptions {
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    /// Effective pixel ratio; non-finite or non-positive values read as 1
    pub fn pixel_ratio(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Backing-store edge length in device pixels
    pub fn backing_size(&self) -> u32 {
        (self.size * self.pixel_ratio()).round().max(0.0) as u32
    }

    /// Return a copy with `overrides` applied
    pub fn merged(&self, overrides: &ChartStyleOverrides) -> Self {
        let mut merged = self.clone();
        if let Some(size) = overrides.size {
            merged.size = size;
        }
        let palette = &mut merged.palette;
        if let Some(c) = &overrides.color {
            palette.accent = c.clone();
        }
        if let Some(c) = &overrides.bg_color {
            palette.background = c.clone();
        }
        if let Some(c) = &overrides.grid_color {
            palette.grid = c.clone();
        }
        if let Some(c) = &overrides.label_color {
            palette.label = c.clone();
        }
        if let Some(c) = &overrides.fill_color {
            palette.fill = c.clone();
        }
        merged
    }
}

/// Per-render style overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyleOverrides {
    pub size: Option<f64>,
    pub color: Option<String>,
    pub bg_color: Option<String>,
    pub grid_color: Option<String>,
    pub label_color: Option<String>,
    pub fill_color: Option<String>,
}

impl ChartStyleOverrides {
    /// Override only the chart size
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }
}
