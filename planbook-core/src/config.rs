//! Engine tunables and the user preference file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_DAY_END_HOUR, DEFAULT_DAY_START_HOUR, DEFAULT_HOUR_HEIGHT, EVENT_MARGIN_PCT,
    MAX_COLUMNS, MIN_EVENT_HEIGHT_PX, MIN_EVENT_WIDTH_PCT,
};
use crate::error::{PlanbookError, PlanbookResult};

/// Tunables for one layout computation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Hard cap on side-by-side lanes. The single knob feeding both column
    /// assignment and responsive reflow.
    pub max_columns: usize,
    /// Rendered pixels per displayed hour.
    pub hour_height: f32,
    /// First displayed hour of the day grid.
    pub day_start_hour: u32,
    /// One-past-last displayed hour of the day grid.
    pub day_end_hour: u32,
    /// Horizontal gap around lanes, in percent of the day column.
    pub margin_pct: f32,
    /// Shortest box an item may render as, in pixels.
    pub min_height_px: f32,
    /// Narrowest a reflowed box may get, in percent.
    pub min_width_pct: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            max_columns: MAX_COLUMNS,
            hour_height: DEFAULT_HOUR_HEIGHT,
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour: DEFAULT_DAY_END_HOUR,
            margin_pct: EVENT_MARGIN_PCT,
            min_height_px: MIN_EVENT_HEIGHT_PX,
            min_width_pct: MIN_EVENT_WIDTH_PCT,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> PlanbookResult<()> {
        if self.max_columns == 0 {
            return Err(PlanbookError::Config("max_columns must be at least 1".into()));
        }
        if self.hour_height <= 0.0 {
            return Err(PlanbookError::Config("hour_height must be positive".into()));
        }
        if self.day_start_hour >= self.day_end_hour || self.day_end_hour > 24 {
            return Err(PlanbookError::InvalidDayWindow {
                start: self.day_start_hour,
                end: self.day_end_hour,
            });
        }
        Ok(())
    }

    pub fn pixels_per_minute(&self) -> f32 {
        self.hour_height / 60.0
    }
}

static DEFAULT_ITEMS_DIR: &str = "~/planbook";

fn default_items_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ITEMS_DIR)
}

fn default_show_weekends() -> bool {
    true
}

fn default_hour_height() -> f32 {
    DEFAULT_HOUR_HEIGHT
}

fn default_day_start_hour() -> u32 {
    DEFAULT_DAY_START_HOUR
}

fn default_day_end_hour() -> u32 {
    DEFAULT_DAY_END_HOUR
}

fn default_max_columns() -> usize {
    MAX_COLUMNS
}

/// User preferences at `<config-dir>/planbook/config.toml`.
///
/// Every field is optional in the file; missing fields (or a missing file)
/// fall back to the engine defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Preferences {
    /// Directory scanned for `.ics` items.
    #[serde(default = "default_items_dir")]
    pub items_dir: PathBuf,

    #[serde(default = "default_show_weekends")]
    pub show_weekends: bool,

    #[serde(default = "default_hour_height")]
    pub hour_height: f32,

    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,

    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,

    #[serde(default = "default_max_columns")]
    pub max_columns: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            items_dir: default_items_dir(),
            show_weekends: true,
            hour_height: DEFAULT_HOUR_HEIGHT,
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour: DEFAULT_DAY_END_HOUR,
            max_columns: MAX_COLUMNS,
        }
    }
}

impl Preferences {
    pub fn config_path() -> PlanbookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlanbookError::Config("Could not determine config directory".into()))?
            .join("planbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load preferences, falling back to defaults when no file exists.
    pub fn load() -> PlanbookResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Preferences::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> PlanbookResult<Self> {
        toml::from_str(content)
            .map_err(|e| PlanbookError::Config(format!("Invalid config file: {}", e)))
    }

    /// The items directory with `~` expanded.
    pub fn resolved_items_dir(&self) -> PathBuf {
        let raw = self.items_dir.to_string_lossy();
        PathBuf::from(shellexpand::tilde(raw.as_ref()).into_owned())
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            max_columns: self.max_columns,
            hour_height: self.hour_height,
            day_start_hour: self.day_start_hour,
            day_end_hour: self.day_end_hour,
            ..LayoutConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let prefs = Preferences::from_toml("").unwrap();
        assert!(prefs.show_weekends);
        assert_eq!(prefs.max_columns, MAX_COLUMNS);
        assert_eq!(prefs.hour_height, DEFAULT_HOUR_HEIGHT);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let prefs = Preferences::from_toml("show_weekends = false\nhour_height = 48.0\n").unwrap();
        assert!(!prefs.show_weekends);
        assert_eq!(prefs.hour_height, 48.0);
        assert_eq!(prefs.day_end_hour, DEFAULT_DAY_END_HOUR);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = Preferences::from_toml("show_weekends = \"maybe").unwrap_err();
        assert!(matches!(err, PlanbookError::Config(_)));
    }

    #[test]
    fn validate_rejects_inverted_day_window() {
        let config = LayoutConfig { day_start_hour: 18, day_end_hour: 8, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PlanbookError::InvalidDayWindow { start: 18, end: 8 }));
    }

    #[test]
    fn validate_rejects_zero_lane_cap() {
        let config = LayoutConfig { max_columns: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }
}
