use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::Theme;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub canvas: CanvasConfig,
    pub labels: LabelConfig,
}

/// Scale and geometry of the drawing surface, in braille dots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Dots per unit when the vector magnitude is zero.
    pub default_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Fraction of the half extent the vector should occupy.
    pub fill_ratio: f64,
    /// Arrowhead edge length in dots.
    pub arrow_head: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_scale: 20.0,
            min_scale: 2.0,
            max_scale: 100.0,
            fill_ratio: 0.65,
            arrow_head: 8.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Label offset from the arrowhead tip, in dots.
    pub offset: f64,
    /// Minimum distance kept from the canvas edges, in dots.
    pub margin: f64,
    /// Cap on the angle-arc radius, in dots.
    pub arc_radius: f64,
    /// Decimal places for computed outputs.
    pub precision: usize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            offset: 10.0,
            margin: 10.0,
            arc_radius: 20.0,
            precision: 3,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/vecscope/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vecscope").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config at {}: {}\nUsing defaults.",
                        path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = Self::generate_config_template();
        std::fs::write(&path, template)?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# vecscope Configuration
# This file is auto-generated. Edit as needed.

# Color theme: "classic", "dark", "light" or "mono"
theme = "classic"

[canvas]
# Dots per unit when the vector magnitude is zero
default_scale = 20.0
# Scale clamp range, in dots per unit
min_scale = 2.0
max_scale = 100.0
# Fraction of the half extent the vector should occupy
fill_ratio = 0.65
# Arrowhead edge length in dots
arrow_head = 8.0

[labels]
# Label offset from the arrowhead tip, in dots
offset = 10.0
# Minimum distance kept from the canvas edges, in dots
margin = 10.0
# Cap on the angle-arc radius, in dots
arc_radius = 20.0
# Decimal places for computed outputs
precision = 3
"#
        .to_string()
    }

    /// Clamp out-of-range values so a hand-edited config cannot break rendering.
    pub fn validated(mut self) -> Self {
        let c = &mut self.canvas;
        c.min_scale = c.min_scale.max(0.5);
        c.max_scale = c.max_scale.max(c.min_scale);
        c.default_scale = c.default_scale.clamp(c.min_scale, c.max_scale);
        c.fill_ratio = c.fill_ratio.clamp(0.05, 1.0);
        c.arrow_head = c.arrow_head.max(1.0);

        let l = &mut self.labels;
        l.offset = l.offset.max(0.0);
        l.margin = l.margin.max(0.0);
        l.arc_radius = l.arc_radius.max(0.0);
        l.precision = l.precision.min(9);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn template_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::generate_config_template()).unwrap();
        let default = Config::default();
        assert_eq!(parsed.theme, default.theme);
        assert_eq!(parsed.canvas.default_scale, default.canvas.default_scale);
        assert_eq!(parsed.canvas.min_scale, default.canvas.min_scale);
        assert_eq!(parsed.canvas.max_scale, default.canvas.max_scale);
        assert_eq!(parsed.labels.precision, default.labels.precision);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let parsed: Config = toml::from_str("theme = \"dark\"\n[canvas]\nmax_scale = 50.0\n").unwrap();
        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(parsed.canvas.max_scale, 50.0);
        assert_eq!(parsed.canvas.default_scale, 20.0);
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[labels]\nprecision = 2\n").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.labels.precision, 2);
    }

    #[test]
    fn validated_repairs_bad_values() {
        let mut config = Config::default();
        config.canvas.min_scale = 50.0;
        config.canvas.max_scale = 10.0;
        config.canvas.fill_ratio = 7.0;
        let config = config.validated();
        assert!(config.canvas.min_scale <= config.canvas.max_scale);
        assert!(config.canvas.fill_ratio <= 1.0);
        assert!(config.canvas.default_scale >= config.canvas.min_scale);
        assert!(config.canvas.default_scale <= config.canvas.max_scale);
    }
}
