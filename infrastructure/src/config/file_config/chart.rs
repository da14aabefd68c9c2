//! Chart configuration from TOML (`[chart]` section)

use beanquiz_domain::{ChartOptions, ChartPalette};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw chart configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChartConfig {
    /// Logical edge length in pixels
    pub size: f64,
    pub radius_scale: f64,
    pub label_offset: f64,
    pub device_pixel_ratio: f64,
    /// Data stroke and markers
    pub color: Option<String>,
    pub bg_color: Option<String>,
    pub grid_color: Option<String>,
    pub label_color: Option<String>,
    pub fill_color: Option<String>,
    /// Where rendered SVG files are written
    pub output_dir: PathBuf,
}

impl Default for FileChartConfig {
    fn default() -> Self {
        let defaults = ChartOptions::default();
        Self {
            size: defaults.size,
            radius_scale: defaults.radius_scale,
            label_offset: defaults.label_offset,
            device_pixel_ratio: defaults.device_pixel_ratio,
            color: None,
            bg_color: None,
            grid_color: None,
            label_color: None,
            fill_color: None,
            output_dir: PathBuf::from("charts"),
        }
    }
}

impl FileChartConfig {
    /// Convert to domain chart options, keeping default colours for unset keys
    pub fn to_chart_options(&self) -> ChartOptions {
        let defaults = ChartPalette::default();
        let palette = ChartPalette {
            accent: self.color.clone().unwrap_or(defaults.accent),
            background: self.bg_color.clone().unwrap_or(defaults.background),
            grid: self.grid_color.clone().unwrap_or(defaults.grid),
            label: self.label_color.clone().unwrap_or(defaults.label),
            fill: self.fill_color.clone().unwrap_or(defaults.fill),
            marker_outline: defaults.marker_outline,
        };
        ChartOptions {
            size: self.size,
            radius_scale: self.radius_scale,
            label_offset: self.label_offset,
            device_pixel_ratio: self.device_pixel_ratio,
            palette,
            ..ChartOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_chart_options() {
        assert_eq!(
            FileChartConfig::default().to_chart_options(),
            ChartOptions::default()
        );
    }

    #[test]
    fn test_colour_override() {
        let config: super::super::FileConfig = toml::from_str(
            r##"
[chart]
size = 320.0
color = "#AA5500"
"##,
        )
        .unwrap();
        let options = config.chart.to_chart_options();
        assert_eq!(options.size, 320.0);
        assert_eq!(options.palette.accent, "#AA5500");
        assert_eq!(options.palette.grid, "#E3EDF3");
    }
}
