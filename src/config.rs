use std::path::PathBuf;

use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Static settings for the dashboard window, data source and payload slider.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV loaded at startup.
    pub data_path: PathBuf,
    /// Window title.
    pub window_title: String,
    /// Heading shown above the controls.
    pub heading: String,
    pub heading_color: Color32,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Payload slider bounds and step, in kilograms.
    pub payload_min: f64,
    pub payload_max: f64,
    pub payload_step: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            window_title: "SpaceX Launch Dashboard".to_string(),
            heading: "SpaceX Launch Records Dashboard".to_string(),
            heading_color: Color32::from_rgb(0x50, 0x3D, 0x36),
            inner_size: [1100.0, 900.0],
            min_inner_size: [600.0, 500.0],
            payload_min: 0.0,
            payload_max: 10_000.0,
            payload_step: 1_000.0,
        }
    }
}

impl DashboardConfig {
    /// Tick positions shown under the payload slider (0, 1000, …, 10000).
    pub fn payload_marks(&self) -> Vec<f64> {
        if self.payload_step <= 0.0 || self.payload_max < self.payload_min {
            return vec![self.payload_min];
        }
        let n = ((self.payload_max - self.payload_min) / self.payload_step).round() as usize;
        (0..=n)
            .map(|i| self.payload_min + i as f64 * self.payload_step)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_marks_cover_slider_range() {
        let marks = DashboardConfig::default().payload_marks();
        assert_eq!(marks.len(), 11);
        assert_eq!(marks.first(), Some(&0.0));
        assert_eq!(marks.last(), Some(&10_000.0));
    }

    #[test]
    fn zero_step_yields_single_mark() {
        let config = DashboardConfig {
            payload_step: 0.0,
            ..DashboardConfig::default()
        };
        assert_eq!(config.payload_marks(), vec![0.0]);
    }
}
