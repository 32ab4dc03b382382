use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::chart::builder::ImageFormat;
use crate::chart::style::FigureStyle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "RunConfig::default_run_id")]
    pub run_id: String,
    #[serde(default = "RunConfig::default_system")]
    pub system: String,
    #[serde(default = "RunConfig::default_duration")]
    pub duration: String,
}

impl RunConfig {
    fn default_run_id() -> String {
        "MT25190".to_string()
    }
    fn default_system() -> String {
        "Linux".to_string()
    }
    fn default_duration() -> String {
        "30s per experiment".to_string()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            run_id: Self::default_run_id(),
            system: Self::default_system(),
            duration: Self::default_duration(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl From<OutputFormat> for ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Svg => ImageFormat::Svg,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "FigureConfig::default_width_in")]
    pub width_in: f64,
    #[serde(default = "FigureConfig::default_height_in")]
    pub height_in: f64,
    #[serde(default = "FigureConfig::default_dpi")]
    pub dpi: u32,
    #[serde(default)]
    pub format: OutputFormat,
}

impl FigureConfig {
    fn default_width_in() -> f64 {
        18.0
    }
    fn default_height_in() -> f64 {
        6.0
    }
    fn default_dpi() -> u32 {
        300
    }

    pub fn style(&self) -> FigureStyle {
        FigureStyle::default().with_size(self.width_in, self.height_in, self.dpi)
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: Self::default_width_in(),
            height_in: Self::default_height_in(),
            dpi: Self::default_dpi(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartsConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub figure: FigureConfig,
}

impl ChartsConfig {
    fn format_f64_compact(x: f64) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() {
            "0".to_string()
        } else {
            s
        }
    }

    /// Render a config as TOML with every key commented out, keeping the
    /// section headers, so the file documents defaults without pinning them.
    fn commented_toml(&self) -> Option<String> {
        let text = toml::to_string_pretty(self).ok()?;
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                commented.push('\n');
            } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                commented.push_str(line);
                commented.push('\n');
            } else {
                let mut out_line = line.to_string();
                if let Some((lhs, rhs)) = line.split_once('=') {
                    let rhs_trim = rhs.trim();
                    let has_decimal = rhs_trim.contains('.');
                    if has_decimal && !rhs_trim.contains('"') {
                        if let Ok(val) = rhs_trim.parse::<f64>() {
                            let mut formatted = Self::format_f64_compact(val);
                            if !formatted.contains('.') {
                                formatted.push_str(".0");
                            }
                            out_line = format!("{} = {}", lhs.trim(), formatted);
                        }
                    }
                }
                commented.push_str("# ");
                commented.push_str(&out_line);
                commented.push('\n');
            }
        }
        Some(commented)
    }

    /// Load `path`, falling back to defaults when it cannot be read or
    /// parsed. A missing file is created with the defaults commented out.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        let default_cfg = Self::default();
        match default_cfg.commented_toml() {
            Some(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            None => warn!("Failed to serialize default config; continuing with defaults"),
        }
        default_cfg
    }
}
